//! Software PWM on a plain digital output.
//!
//! No LEDC timer is involved: each call to [`SoftPwm::drive`] raises the
//! pin, blocks for the on-time, lowers it and blocks for the off-time.
//! Nothing else runs on the calling thread meanwhile.
//!
//! ```text
//!  duty 50, period 20:   ┌──────────┐
//!                        │   10 ms  │   10 ms
//!                   ─────┘          └──────────
//! ```
//!
//! On/off times use truncating integer division:
//! `on = period * duty / 100`, `off = period - on`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::app::ports::WaveformDriver;
use crate::error::ActuatorError;

/// Busy-wait waveform generator over any `OutputPin` + `DelayNs` pair.
pub struct SoftPwm<P, D> {
    pin: P,
    delay: D,
    period_ms: u32,
}

impl<P: OutputPin, D: DelayNs> SoftPwm<P, D> {
    pub fn new(pin: P, delay: D, period_ms: u32) -> Self {
        Self {
            pin,
            delay,
            period_ms,
        }
    }

    /// (on, off) milliseconds for one period at `duty_percent`.
    pub fn split(&self, duty_percent: u8) -> (u32, u32) {
        let on = u64::from(self.period_ms) * u64::from(duty_percent) / 100;
        let on = u32::try_from(on).unwrap_or(u32::MAX);
        (on, self.period_ms.saturating_sub(on))
    }
}

impl<P: OutputPin, D: DelayNs> WaveformDriver for SoftPwm<P, D> {
    fn drive(&mut self, duty_percent: u8) -> Result<(), ActuatorError> {
        let (on_ms, off_ms) = self.split(duty_percent);

        if duty_percent > 0 {
            self.pin
                .set_high()
                .map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.delay.delay_ms(on_ms);
        }
        if duty_percent < 100 {
            self.pin
                .set_low()
                .map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.delay.delay_ms(off_ms);
        }
        Ok(())
    }
}
