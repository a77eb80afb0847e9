//! Control policy: fan tier selection and the control-loop phases.
//!
//! The mapping from temperature to duty is a fixed step function, not a
//! feedback controller. Each cycle is independent of the previous one.

pub mod tier;

pub use tier::FanTier;

/// Phases of one control-loop cycle, in execution order.
///
/// ```text
///  Sampling ─▶ Estimating ─▶ TierSelecting ─▶ Actuating ─▶ Reporting
///     ▲                                                        │
///     └────────────────────────────────────────────────────────┘
/// ```
///
/// There is no terminal phase; the loop runs until power is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    Sampling = 0,
    Estimating = 1,
    TierSelecting = 2,
    Actuating = 3,
    Reporting = 4,
}

impl Phase {
    /// The phase that follows this one.
    pub const fn next(self) -> Self {
        match self {
            Self::Sampling => Self::Estimating,
            Self::Estimating => Self::TierSelecting,
            Self::TierSelecting => Self::Actuating,
            Self::Actuating => Self::Reporting,
            Self::Reporting => Self::Sampling,
        }
    }
}
