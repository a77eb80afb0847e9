//! Sensor subsystem: the thermistor ADC source and the temperature model.

pub mod adc;
pub mod temperature;

pub use adc::ThermistorAdc;
pub use temperature::{TemperatureReading, ThermistorModel, estimate_temperature};
