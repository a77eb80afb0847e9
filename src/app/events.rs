//! Outbound status reports.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits one
//! [`StatusReport`] per cycle through the
//! [`StatusSink`](super::ports::StatusSink) port.

use core::fmt;

use crate::control::FanTier;

/// The per-cycle status line: temperature and the fan tier in force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReport {
    pub temperature_c: f32,
    pub tier: FanTier,
}

impl fmt::Display for StatusReport {
    /// `Temp: 27.50 °C | Fan: 50%`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temp: {:.2} \u{00b0}C | Fan: {}",
            self.temperature_c,
            self.tier.label()
        )
    }
}
