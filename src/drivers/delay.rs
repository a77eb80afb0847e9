//! Blocking delay provider.
//!
//! Implements [`embedded_hal::delay::DelayNs`] by parking the calling
//! thread. On ESP-IDF `std::thread::sleep` lands on the FreeRTOS tick
//! delay, so the idle task (and the task watchdog) keep running while the
//! control loop is stalled.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingDelay;

impl BlockingDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for BlockingDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
