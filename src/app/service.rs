//! Application service: the control loop.
//!
//! [`ControlLoop`] owns the configuration and the sensor model and runs
//! one cycle per call:
//!
//! ```text
//!  AnalogInput ──▶ ┌──────────────────────────────┐ ──▶ StatusSink
//!                  │          ControlLoop          │
//! WaveformDriver ◀─│  estimate · tier · actuate    │
//! MonotonicClock ─▶└──────────────────────────────┘
//! ```
//!
//! Everything runs on the calling thread. While the fan is being driven
//! no other phase can make progress.

use core::convert::Infallible;

use log::{debug, trace};

use crate::config::SystemConfig;
use crate::control::{FanTier, Phase};
use crate::error::Result;
use crate::sensors::temperature::{TemperatureReading, ThermistorModel};

use super::events::StatusReport;
use super::ports::{AnalogInput, MonotonicClock, StatusSink, WaveformDriver};

/// Outcome of one completed cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub reading: TemperatureReading,
    pub tier: FanTier,
    /// Waveform periods emitted during the actuation window.
    pub periods: u32,
    /// Clock time spent actuating (ms). Never less than the window.
    pub actuation_ms: u64,
}

impl CycleReport {
    pub fn status(&self) -> StatusReport {
        StatusReport {
            temperature_c: self.reading.celsius,
            tier: self.tier,
        }
    }
}

/// The sample → estimate → select → actuate → report loop.
pub struct ControlLoop {
    config: SystemConfig,
    model: ThermistorModel,
    phase: Phase,
    cycle_count: u64,
}

impl ControlLoop {
    /// Validate `config` and build the loop. Starts in [`Phase::Sampling`].
    pub fn new(config: SystemConfig) -> Result<Self> {
        config.validate()?;
        let model = ThermistorModel::new(config.thermistor);
        Ok(Self {
            config,
            model,
            phase: Phase::Sampling,
            cycle_count: 0,
        })
    }

    /// Phase the loop is in (or was last in, between cycles).
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Run one full cycle.
    ///
    /// The `hw` parameter satisfies the input, output and clock ports at
    /// once, the same way a single board adapter owns all three.
    pub fn cycle(
        &mut self,
        hw: &mut (impl AnalogInput + WaveformDriver + MonotonicClock),
        sink: &mut impl StatusSink,
    ) -> Result<CycleReport> {
        self.cycle_count += 1;

        // 1. Sample
        self.enter(Phase::Sampling);
        let raw = hw.read_raw();

        // 2. Estimate
        self.enter(Phase::Estimating);
        let reading = self.model.reading(raw);
        if reading.was_clamped() {
            debug!("raw sample {} clamped to {}", reading.raw, reading.clamped);
        }

        // 3. Select tier
        self.enter(Phase::TierSelecting);
        let tier = FanTier::select(reading.celsius, &self.config.tiers);

        // 4. Drive the fan for the actuation window
        self.enter(Phase::Actuating);
        let (periods, actuation_ms) = self.actuate(hw, tier.duty_percent())?;

        // 5. Report
        self.enter(Phase::Reporting);
        let report = CycleReport {
            reading,
            tier,
            periods,
            actuation_ms,
        };
        sink.emit(&report.status());

        debug!(
            "cycle {}: raw={} T={:.2} tier={:?} periods={} elapsed={}ms",
            self.cycle_count, raw, reading.celsius, tier, periods, actuation_ms
        );
        Ok(report)
    }

    /// Cycle forever. Only returns if an actuator command fails.
    pub fn run(
        &mut self,
        hw: &mut (impl AnalogInput + WaveformDriver + MonotonicClock),
        sink: &mut impl StatusSink,
    ) -> Result<Infallible> {
        loop {
            self.cycle(hw, sink)?;
        }
    }

    /// Repeat whole waveform periods until the window has elapsed on the
    /// clock. The last period may overrun the window; it is never cut short.
    fn actuate(
        &self,
        hw: &mut (impl WaveformDriver + MonotonicClock),
        duty_percent: u8,
    ) -> Result<(u32, u64)> {
        let window = u64::from(self.config.actuation_window_ms);
        let start = hw.now_ms();
        let mut periods = 0u32;
        loop {
            let elapsed = hw.now_ms().saturating_sub(start);
            if elapsed >= window {
                return Ok((periods, elapsed));
            }
            hw.drive(duty_percent)?;
            periods += 1;
        }
    }

    fn enter(&mut self, phase: Phase) {
        trace!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
