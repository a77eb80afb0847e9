//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. All tests run on the host (x86_64) with no
//! real hardware and no real sleeping: the mock delay advances a
//! simulated clock.

mod control_loop_tests;
mod mock_hw;
mod soft_pwm_tests;
