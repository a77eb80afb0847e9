//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the thermistor ADC, the software PWM on the fan pin, and the
//! system clock, exposing them through [`AnalogInput`],
//! [`WaveformDriver`] and [`MonotonicClock`]. This is the only module in
//! the system that touches actual hardware. On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::adapters::time::SystemClock;
use crate::app::ports::{AnalogInput, MonotonicClock, WaveformDriver};
use crate::config::SystemConfig;
use crate::drivers::delay::BlockingDelay;
use crate::drivers::fan_pin::FanPin;
use crate::drivers::soft_pwm::SoftPwm;
use crate::error::ActuatorError;
use crate::pins;
use crate::sensors::ThermistorAdc;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    adc: ThermistorAdc,
    fan: SoftPwm<FanPin, BlockingDelay>,
    clock: SystemClock,
}

impl HardwareAdapter {
    pub fn new(adc: ThermistorAdc, fan: SoftPwm<FanPin, BlockingDelay>, clock: SystemClock) -> Self {
        Self { adc, fan, clock }
    }

    /// Wire up the board's default pins with the configured PWM period.
    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(
            ThermistorAdc::new(pins::TEMP_ADC_CHANNEL),
            SoftPwm::new(FanPin::new(pins::FAN_GPIO), BlockingDelay::new(), config.pwm.period_ms),
            SystemClock::new(),
        )
    }
}

// ── AnalogInput implementation ────────────────────────────────

impl AnalogInput for HardwareAdapter {
    fn read_raw(&mut self) -> u16 {
        self.adc.read_raw()
    }
}

// ── WaveformDriver implementation ─────────────────────────────

impl WaveformDriver for HardwareAdapter {
    fn drive(&mut self, duty_percent: u8) -> Result<(), ActuatorError> {
        self.fan.drive(duty_percent)
    }
}

// ── MonotonicClock implementation ─────────────────────────────

impl MonotonicClock for HardwareAdapter {
    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}
