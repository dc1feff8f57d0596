// src/convert.rs

use crate::timing::NDS_FRAME_RATE;

/// A reading of the DS internal frame counter [frames].
///
/// Non-negative and bounded by the counter's rollover period; arithmetic on
/// raw readings wraps like any other `u32`.
pub type Delay = u32;

/// Converts a delay [frames] to seconds of real time.
#[inline]
pub fn delay_to_second(delay: Delay) -> f64 {
    f64::from(delay) / NDS_FRAME_RATE
}

/// Converts seconds of real time to a delay [frames].
///
/// The product is truncated toward zero, so for non-negative inputs this is
/// the floor of `seconds * NDS_FRAME_RATE`.
#[inline]
pub fn second_to_delay(seconds: f64) -> Delay {
    (seconds * NDS_FRAME_RATE) as u32
}
