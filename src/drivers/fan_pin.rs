//! Fan output pin.
//!
//! Exposes the fan GPIO as an [`embedded_hal::digital::OutputPin`] so the
//! software PWM stays generic over the pin type.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the GPIO level via hw_init.
//! On host/test: hw_init records the level in memory.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::drivers::hw_init;

pub struct FanPin {
    gpio: i32,
    high: bool,
}

impl FanPin {
    /// Wrap an already configured output GPIO. The level is driven LOW.
    pub fn new(gpio: i32) -> Self {
        hw_init::gpio_write(gpio, false);
        Self { gpio, high: false }
    }
}

impl ErrorType for FanPin {
    type Error = Infallible;
}

impl OutputPin for FanPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, false);
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, true);
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for FanPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}
