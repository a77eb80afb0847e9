//! Thermofan firmware entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter                      LogStatusSink      │
//! │  (AnalogInput + WaveformDriver        (StatusSink)       │
//! │   + MonotonicClock)                                      │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ──────────────        │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          ControlLoop (pure logic)              │      │
//! │  │  Thermistor model · tier policy · actuation    │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use thermofan::adapters::hardware::HardwareAdapter;
use thermofan::adapters::log_sink::LogStatusSink;
use thermofan::app::service::ControlLoop;
use thermofan::config::SystemConfig;
use thermofan::drivers::hw_init;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Thermofan v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without the ADC or the fan pin there is nothing to control.
        error!("HAL init failed: {}, halting", e);
        return Err(e.into());
    }

    // ── 3. Fixed configuration ────────────────────────────────
    let config = SystemConfig::default();
    info!("config: {}", serde_json::to_string(&config)?);

    let mut hw = HardwareAdapter::from_config(&config);
    let mut sink = LogStatusSink::new();
    let mut control = ControlLoop::new(config)?;

    // ── 4. Control loop (never returns) ───────────────────────
    info!("Entering control loop");
    loop {
        if let Err(e) = control.cycle(&mut hw, &mut sink) {
            error!("control cycle {} failed: {}", control.cycle_count(), e);
        }
    }
}
