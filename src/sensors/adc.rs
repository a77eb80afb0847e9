//! Thermistor divider ADC source.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init). The
//! ESP32-S3 converts at 12 bits; codes are rescaled to the 10-bit
//! `[0, 1023]` domain the thermistor model is calibrated for.
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::ports::AnalogInput;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Mid-scale: roughly room temperature with the stock divider.
#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(512);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

pub struct ThermistorAdc {
    // Only the device read path addresses the channel.
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    channel: u32,
}

impl ThermistorAdc {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        // 12-bit -> 10-bit
        hw_init::adc1_read(self.channel) >> 2
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_TEMP_ADC.load(Ordering::Relaxed)
    }
}

impl AnalogInput for ThermistorAdc {
    fn read_raw(&mut self) -> u16 {
        self.read_adc()
    }
}
