//! Mock hardware for integration tests.
//!
//! Pin writes and delays land on one shared timeline so tests can assert
//! on the exact waveform. Delays advance a simulated millisecond clock
//! that the control loop polls for its actuation window.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use thermofan::app::events::StatusReport;
use thermofan::app::ports::{AnalogInput, MonotonicClock, StatusSink, WaveformDriver};
use thermofan::drivers::soft_pwm::SoftPwm;
use thermofan::error::ActuatorError;

// ── Timeline ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    High,
    Low,
    Wait(u32),
}

/// Shared timeline plus simulated clock.
#[derive(Clone, Default)]
pub struct Bench {
    steps: Rc<RefCell<Vec<Step>>>,
    now_ms: Rc<Cell<u64>>,
}

#[allow(dead_code)]
impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> Vec<Step> {
        self.steps.borrow().clone()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pin(&self) -> MockPin {
        MockPin(self.clone())
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay(self.clone())
    }

    /// Milliseconds spent HIGH and LOW across the whole timeline.
    pub fn high_low_ms(&self) -> (u64, u64) {
        let mut high = false;
        let (mut hi, mut lo) = (0u64, 0u64);
        for step in self.steps.borrow().iter() {
            match step {
                Step::High => high = true,
                Step::Low => high = false,
                Step::Wait(ms) if high => hi += u64::from(*ms),
                Step::Wait(ms) => lo += u64::from(*ms),
            }
        }
        (hi, lo)
    }

    /// Number of rising edges (HIGH writes).
    pub fn high_writes(&self) -> usize {
        self.steps
            .borrow()
            .iter()
            .filter(|s| **s == Step::High)
            .count()
    }
}

// ── Pin / delay ───────────────────────────────────────────────

pub struct MockPin(Bench);

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.steps.borrow_mut().push(Step::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.steps.borrow_mut().push(Step::High);
        Ok(())
    }
}

pub struct MockDelay(Bench);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.steps.borrow_mut().push(Step::Wait(ms));
        self.0.now_ms.set(self.0.now_ms.get() + u64::from(ms));
    }
}

// ── MockBoard ─────────────────────────────────────────────────

/// ADC with a scripted sequence of samples; the last one repeats.
pub struct MockBoard {
    pub bench: Bench,
    samples: VecDeque<u16>,
    last: u16,
    pwm: SoftPwm<MockPin, MockDelay>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new(samples: &[u16]) -> Self {
        Self::with_period(samples, 20)
    }

    pub fn with_period(samples: &[u16], period_ms: u32) -> Self {
        let bench = Bench::new();
        let pwm = SoftPwm::new(bench.pin(), bench.delay(), period_ms);
        Self {
            samples: samples.iter().copied().collect(),
            last: samples.last().copied().unwrap_or(0),
            bench,
            pwm,
        }
    }
}

impl AnalogInput for MockBoard {
    fn read_raw(&mut self) -> u16 {
        self.samples.pop_front().unwrap_or(self.last)
    }
}

impl WaveformDriver for MockBoard {
    fn drive(&mut self, duty_percent: u8) -> Result<(), ActuatorError> {
        self.pwm.drive(duty_percent)
    }
}

impl MonotonicClock for MockBoard {
    fn now_ms(&self) -> u64 {
        self.bench.now_ms()
    }
}

// ── LineSink ──────────────────────────────────────────────────

#[derive(Default)]
pub struct LineSink {
    pub lines: Vec<String>,
}

impl StatusSink for LineSink {
    fn emit(&mut self, report: &StatusReport) {
        self.lines.push(report.to_string());
    }
}
