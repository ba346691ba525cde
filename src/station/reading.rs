use serde::Serialize;

// --
// One transformed snapshot of the three ambient quantities, with the
// key names the collector expects. Built fresh every iteration,
// serialized once and discarded.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Reading {
    pub name: String,
    pub temp: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Reading {
    pub fn new(name: &str, temp_celsius: f32, humidity_percent: f32, pressure_mbar: f32) -> Self {
        Self {
            name: name.into(),
            temp: round2(celsius_to_fahrenheit(temp_celsius)),
            humidity: round2(humidity_percent),
            pressure: round2(pressure_mbar),
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

// Round to 2 decimal places, halves away from zero
pub fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}
