//! Application core: pure domain logic, zero I/O.
//!
//! The control loop composes the temperature model, the tier policy and
//! the waveform driver. All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
