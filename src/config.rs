//! System configuration parameters
//!
//! Calibration and timing for the thermistor fan controller. The values are
//! fixed at build time; [`SystemConfig::default`] is what the firmware runs.
//! They are passed explicitly into the estimator and the actuator so tests
//! can swap in other sensor models.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// NTC thermistor wired in a divider with a fixed series resistor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermistorConfig {
    /// Fixed resistor in series with the thermistor (ohms)
    pub series_resistor_ohms: f32,
    /// Thermistor resistance at the nominal temperature (ohms)
    pub nominal_resistance_ohms: f32,
    /// Nominal (reference) temperature in Kelvin
    pub nominal_temp_k: f32,
    /// Beta coefficient of the thermistor
    pub beta: f32,
    /// Full-scale ADC count (10-bit = 1023)
    pub adc_full_scale: u16,
}

impl Default for ThermistorConfig {
    fn default() -> Self {
        Self {
            series_resistor_ohms: 10_000.0,
            nominal_resistance_ohms: 10_000.0,
            nominal_temp_k: 298.15, // 25 °C
            beta: 3950.0,
            adc_full_scale: 1023,
        }
    }
}

/// Longest accepted PWM period (milliseconds).
pub const MAX_PWM_PERIOD_MS: u32 = 60_000;

/// Software PWM timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwmConfig {
    /// Length of one waveform period (milliseconds)
    pub period_ms: u32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self { period_ms: 20 } // ~50 Hz
    }
}

/// Temperature bands for the fan tiers (half-open, lower bound inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// At or above this temperature (°C) the fan runs at 50 %
    pub half_speed_c: f32,
    /// At or above this temperature (°C) the fan runs at 100 %
    pub full_speed_c: f32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            half_speed_c: 25.0,
            full_speed_c: 30.0,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub thermistor: ThermistorConfig,
    pub pwm: PwmConfig,
    pub tiers: TierThresholds,
    /// How long each cycle drives the fan before re-sampling (milliseconds)
    pub actuation_window_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            thermistor: ThermistorConfig::default(),
            pwm: PwmConfig::default(),
            tiers: TierThresholds::default(),
            actuation_window_ms: 1000,
        }
    }
}

impl SystemConfig {
    /// Range-check every parameter. Invalid values are rejected, never
    /// silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thermistor;
        if !(t.series_resistor_ohms.is_finite() && t.series_resistor_ohms > 0.0) {
            return Err(ConfigError::ValidationFailed(
                "series resistor must be positive",
            ));
        }
        if !(t.nominal_resistance_ohms.is_finite() && t.nominal_resistance_ohms > 0.0) {
            return Err(ConfigError::ValidationFailed(
                "nominal resistance must be positive",
            ));
        }
        if !(t.nominal_temp_k.is_finite() && t.nominal_temp_k > 0.0) {
            return Err(ConfigError::ValidationFailed(
                "nominal temperature must be above absolute zero",
            ));
        }
        if !(t.beta.is_finite() && t.beta > 0.0) {
            return Err(ConfigError::ValidationFailed("beta must be positive"));
        }
        // Clamp range is [1, full_scale - 1]; it must hold at least one code.
        if t.adc_full_scale < 2 {
            return Err(ConfigError::ValidationFailed("ADC full scale must be >= 2"));
        }
        if self.pwm.period_ms == 0 {
            return Err(ConfigError::ValidationFailed("PWM period must be non-zero"));
        }
        if self.pwm.period_ms > MAX_PWM_PERIOD_MS {
            return Err(ConfigError::ValidationFailed("PWM period too long"));
        }
        if self.actuation_window_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "actuation window must be non-zero",
            ));
        }
        let tiers = &self.tiers;
        if !(tiers.half_speed_c.is_finite() && tiers.full_speed_c.is_finite()) {
            return Err(ConfigError::ValidationFailed("tier thresholds must be finite"));
        }
        if tiers.half_speed_c >= tiers.full_speed_c {
            return Err(ConfigError::ValidationFailed(
                "half-speed threshold must be below full-speed threshold",
            ));
        }
        Ok(())
    }
}
