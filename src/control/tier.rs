//! Discrete fan tiers and the temperature bands that select them.

use core::fmt;

use crate::config::TierThresholds;

/// One of the three fan duty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanTier {
    Off,
    Half,
    Full,
}

impl FanTier {
    /// Pick the tier for a temperature. Bands are half-open with the lower
    /// bound inclusive. A NaN temperature matches no band and yields `Off`.
    pub fn select(celsius: f32, thresholds: &TierThresholds) -> Self {
        if celsius >= thresholds.full_speed_c {
            Self::Full
        } else if celsius >= thresholds.half_speed_c {
            Self::Half
        } else {
            Self::Off
        }
    }

    /// Duty cycle in percent (0, 50 or 100).
    pub const fn duty_percent(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Half => 50,
            Self::Full => 100,
        }
    }

    /// Label used in the status line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Half => "50%",
            Self::Full => "100%",
        }
    }
}

impl fmt::Display for FanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
