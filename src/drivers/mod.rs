//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod delay;
pub mod fan_pin;
pub mod hw_init;
pub mod soft_pwm;
