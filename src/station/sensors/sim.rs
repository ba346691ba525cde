use super::EnvironmentSensor;
use std::io;

const BASE_TEMP_C: f32 = 21.5;
const BASE_PRESSURE_MBAR: f32 = 1013.25;
const BASE_HUMIDITY_PCT: f32 = 45.0;

// Stand-in for the HAT driver on machines without the hardware
// attached. Produces a slow wobble around typical indoor values.
pub struct Sensor {
    tick: f32,
}

impl Sensor {
    pub fn new() -> Self {
        Self { tick: 0.0 }
    }

    fn wobble(&mut self, amplitude: f32) -> f32 {
        self.tick += 1.0;
        (self.tick * 0.1).sin() * amplitude
    }
}

impl EnvironmentSensor for Sensor {
    fn read_temperature_c(&mut self) -> Result<f32, io::Error> {
        Ok(BASE_TEMP_C + self.wobble(1.5))
    }

    fn read_pressure_millibar(&mut self) -> Result<f32, io::Error> {
        Ok(BASE_PRESSURE_MBAR + self.wobble(4.0))
    }

    fn read_humidity_percent(&mut self) -> Result<f32, io::Error> {
        Ok(BASE_HUMIDITY_PCT + self.wobble(5.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_plausible_ranges() {
        let mut sensor = Sensor::new();
        for _ in 0..100 {
            let sample = sensor.sample().unwrap();
            assert!(sample.temperature_c > 15.0 && sample.temperature_c < 30.0);
            assert!(sample.pressure_mbar > 1000.0 && sample.pressure_mbar < 1025.0);
            assert!(sample.humidity_pct > 35.0 && sample.humidity_pct < 55.0);
        }
    }
}
