// src/error.rs

/// Errors reported by the checked calculator and the input validation
/// boundary.
///
/// All detection is local to a single call: there is nothing to retry and
/// no resource to roll back. The caller decides whether an invalid result
/// is fatal to its own workflow.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum TimerError {
    /// Seconds component of a clock reading outside `0..=59`.
    #[error("invalid clock second: {0} (must be 0-59)")]
    InvalidSecond(u8),

    /// The derived load time is not strictly positive: the target
    /// delay/second pair is not reachable from the calibration pair on a
    /// monotonically increasing frame counter.
    #[error("invalid calibration: derived load time {load_time} s is not positive")]
    InvalidCalibration { load_time: f64 },

    /// The whole-minute offset does not fit in a byte.
    #[error("offset overflow: {minutes} min exceeds the 255 min maximum")]
    OffsetOverflow { minutes: u64 },
}
