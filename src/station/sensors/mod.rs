pub mod sim;

use std::io;

// Raw physical quantities as the hardware reports them, before any
// unit conversion or rounding.
#[derive(Clone, Copy, Debug)]
pub struct RawSample {
    pub temperature_c: f32,
    pub pressure_mbar: f32,
    pub humidity_pct: f32,
}

/// Interface to the ambient sensor hardware.
///
/// A failed read is fatal for the telemetry loop; there is no point in
/// posting datapoints once the hardware has gone away.
pub trait EnvironmentSensor {
    fn read_temperature_c(&mut self) -> Result<f32, io::Error>;
    fn read_pressure_millibar(&mut self) -> Result<f32, io::Error>;
    fn read_humidity_percent(&mut self) -> Result<f32, io::Error>;

    fn sample(&mut self) -> Result<RawSample, io::Error> {
        Ok(RawSample {
            temperature_c: self.read_temperature_c()?,
            pressure_mbar: self.read_pressure_millibar()?,
            humidity_pct: self.read_humidity_percent()?,
        })
    }
}
