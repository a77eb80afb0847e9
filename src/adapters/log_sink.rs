//! Log-based status sink adapter.
//!
//! Implements [`StatusSink`] by writing each status line to the log
//! facade (which goes to UART / USB-CDC in production).

use log::info;

use crate::app::events::StatusReport;
use crate::app::ports::StatusSink;

/// Adapter that logs every [`StatusReport`] to the serial console.
pub struct LogStatusSink;

impl LogStatusSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogStatusSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for LogStatusSink {
    fn emit(&mut self, report: &StatusReport) {
        info!("{}", report);
    }
}
