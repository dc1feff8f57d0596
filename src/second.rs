// src/second.rs

use crate::error::TimerError;
use core::convert::TryFrom;
use core::fmt;

/// Seconds component of a real-world clock reading, validated to `0..=59`.
///
/// Both the calibration and the target measurement carry one of these: the
/// second shown on the real-world clock at the moment the delay was
/// observed (or is desired).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct ClockSecond(u8);

impl ClockSecond {
    /// Creates a new `ClockSecond` if the value is in range.
    pub fn new(second: u8) -> Result<Self, TimerError> {
        if second < 60 {
            Ok(ClockSecond(second))
        } else {
            Err(TimerError::InvalidSecond(second))
        }
    }

    /// Skips range validation.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `second` is in `0..=59`; the calculator
    /// assumes the invariant holds.
    pub const unsafe fn new_unchecked(second: u8) -> Self {
        ClockSecond(second)
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ClockSecond {
    type Error = TimerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClockSecond> for u8 {
    fn from(value: ClockSecond) -> Self {
        value.0
    }
}

impl fmt::Display for ClockSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
