//! NTC thermistor temperature model (10 kOhm @ 25 C, B = 3950).
//!
//! The thermistor sits in a voltage divider with a fixed resistor and the
//! ADC samples the midpoint. The divider relation gives the thermistor
//! resistance, and the simplified Beta equation turns that into Kelvin:
//!
//! ```text
//!   R   = R_series * (full_scale / raw - 1)
//!   1/T = 1/T0 + ln(R / R0) / B
//! ```
//!
//! Raw codes are clamped to `[1, full_scale - 1]` first, so `R` is always
//! strictly positive and finite. There is no error path.

use crate::config::ThermistorConfig;

const KELVIN_OFFSET: f32 = 273.15;

/// One estimator pass: the code as read, the code actually used, and the
/// resulting temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    pub raw: u16,
    pub clamped: u16,
    pub celsius: f32,
}

impl TemperatureReading {
    /// `true` when the raw code sat on a rail and had to be clamped.
    pub fn was_clamped(&self) -> bool {
        self.raw != self.clamped
    }
}

/// Voltage-divider + Beta-equation sensor model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermistorModel {
    cfg: ThermistorConfig,
}

impl Default for ThermistorModel {
    fn default() -> Self {
        Self::new(ThermistorConfig::default())
    }
}

impl ThermistorModel {
    pub fn new(cfg: ThermistorConfig) -> Self {
        Self { cfg }
    }

    /// Pull the rail codes (0 and full scale) one step inside.
    pub fn clamp_sample(&self, raw: u16) -> u16 {
        let top = self.cfg.adc_full_scale.saturating_sub(1).max(1);
        raw.clamp(1, top)
    }

    /// Thermistor resistance (ohms) for an already clamped code.
    pub fn resistance_ohms(&self, sample: u16) -> f32 {
        let full_scale = self.cfg.adc_full_scale as f32;
        self.cfg.series_resistor_ohms * (full_scale / sample as f32 - 1.0)
    }

    /// Estimate the temperature in °C for a raw ADC code.
    pub fn celsius(&self, raw: u16) -> f32 {
        let r = self.resistance_ohms(self.clamp_sample(raw));
        let inv_t = 1.0 / self.cfg.nominal_temp_k
            + (r / self.cfg.nominal_resistance_ohms).ln() / self.cfg.beta;
        1.0 / inv_t - KELVIN_OFFSET
    }

    pub fn reading(&self, raw: u16) -> TemperatureReading {
        TemperatureReading {
            raw,
            clamped: self.clamp_sample(raw),
            celsius: self.celsius(raw),
        }
    }
}

/// Estimate the temperature in °C with the stock 10 k / 10 k / B3950 model.
pub fn estimate_temperature(raw: u16) -> f32 {
    ThermistorModel::default().celsius(raw)
}
