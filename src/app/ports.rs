//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (ADC, fan output, clock, status sink) implement these
//! traits. The [`ControlLoop`](super::service::ControlLoop) consumes them
//! via generics, so the domain core never touches hardware directly.

use crate::error::ActuatorError;

use super::events::StatusReport;

// ───────────────────────────────────────────────────────────────
// Analog input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Ratiometric ADC source for the thermistor divider.
pub trait AnalogInput {
    /// Take one sample, nominally in `[0, 1023]`. Infallible: a failed
    /// conversion reports 0, which the estimator clamps like any rail code.
    fn read_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Waveform port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Produces one duty-cycled waveform period on a binary output.
///
/// The busy-wait [`SoftPwm`](crate::drivers::soft_pwm::SoftPwm) is the only
/// implementation today; a hardware-timer backend would slot in here
/// without touching the control loop.
pub trait WaveformDriver {
    /// Emit exactly one period at `duty_percent` (expected 0–100, used as
    /// given). Blocks until the period is over.
    fn drive(&mut self, duty_percent: u8) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock used to bound the actuation window.
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Status sink port (driven adapter: domain → serial text)
// ───────────────────────────────────────────────────────────────

/// Append-only text sink for the one-line status report per cycle.
pub trait StatusSink {
    fn emit(&mut self, report: &StatusReport);
}
