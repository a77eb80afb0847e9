//! GPIO / peripheral pin assignments for the thermofan board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors, analog (ADC1)
// ---------------------------------------------------------------------------

/// NTC thermistor, 10 kΩ @ 25 °C, voltage divider with a 10 kΩ resistor.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMP_ADC_CHANNEL: u32 = 8;

// ---------------------------------------------------------------------------
// Fan (simulated by an LED)
// ---------------------------------------------------------------------------

/// Digital output driven by the software PWM. HIGH = fan energised.
pub const FAN_GPIO: i32 = 13;
