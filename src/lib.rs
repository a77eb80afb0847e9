//! Thermofan firmware library.
//!
//! Reads an NTC thermistor, maps the temperature onto one of three fan
//! tiers and drives the fan with a software PWM. Exposes the pure-logic
//! modules for integration testing. All ESP-IDF-specific code is guarded
//! by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;

// Hardware-facing layers; host builds compile their simulation stubs.
pub mod adapters;
pub mod drivers;
pub mod sensors;
