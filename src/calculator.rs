// src/calculator.rs

use crate::convert::{delay_to_second, Delay};
use crate::error::TimerError;
use crate::second::ClockSecond;
use crate::timing::{BOOT_TIME_FUDGE, MINIMUM_BOOT_TIME, NDS_FRAME_RATE, SECONDS_PER_MINUTE};

/// The intervals needed to set the DS clock, boot the game and load the
/// save file so that a target delay is hit at a target second.
///
/// The `offset` (a.k.a. the "minutes before target") compensates for the
/// total elapsed time when pre-setting the clock.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct TimeData {
    /// Time elapsed between setting the clock and booting the game [s].
    /// The calculators return values in
    /// `MINIMUM_BOOT_TIME..MINIMUM_BOOT_TIME + SECONDS_PER_MINUTE`.
    pub boot_time: f64,
    /// Time elapsed between booting the game and loading the save file [s].
    pub load_time: f64,
    /// Total time elapsed between setting the clock and loading the save
    /// file [min]; the clock is set this many minutes before the target.
    pub offset: u8,
}

/// Computes the time data for hitting `target_delay` at `target_second`,
/// given a calibration measurement of `calibrated_delay` observed at
/// `calibrated_second`.
///
/// The computation is a pure function of its inputs and the constants in
/// [`crate::timing`]; repeated calls produce bit-identical results.
///
/// # Errors
///
/// * [`TimerError::InvalidCalibration`] if the derived load time is not
///   strictly positive. Unlike the wrapping frame arithmetic of the
///   original timers, the difference here is taken in signed arithmetic,
///   so a target delay behind the calibration is caught instead of
///   wrapping around the counter.
/// * [`TimerError::OffsetOverflow`] if the whole-minute offset exceeds
///   255. The permissive path truncates instead; see
///   [`get_time_data_unchecked`].
pub fn get_time_data(
    calibrated_delay: Delay,
    calibrated_second: ClockSecond,
    target_delay: Delay,
    target_second: ClockSecond,
) -> Result<TimeData, TimerError> {
    let frames = f64::from(target_delay) - f64::from(calibrated_delay);
    let load_time = frames / NDS_FRAME_RATE + f64::from(calibrated_second.get());
    if load_time <= 0.0 {
        return Err(TimerError::InvalidCalibration { load_time });
    }

    let boot_time = normalize_boot_time(raw_boot_time(target_second.get(), load_time));

    let minutes = ((boot_time + load_time) / SECONDS_PER_MINUTE) as u64;
    let offset =
        u8::try_from(minutes).map_err(|_| TimerError::OffsetOverflow { minutes })?;

    Ok(TimeData {
        boot_time,
        load_time,
        offset,
    })
}

/// Reference-faithful variant with the permissive behavior of the original
/// timers.
///
/// The frame difference wraps like unsigned 32-bit arithmetic, seconds are
/// not range-checked, and a non-positive load time flows into the result
/// unreported. The offset saturates at 255 minutes (`as` casts from float
/// saturate); callers are responsible for keeping the total under that
/// limit. Prefer [`get_time_data`] unless compatibility with the original
/// permissive behavior is required.
pub fn get_time_data_unchecked(
    calibrated_delay: u32,
    calibrated_second: u8,
    target_delay: u32,
    target_second: u8,
) -> TimeData {
    let load_time = delay_to_second(target_delay.wrapping_sub(calibrated_delay))
        + f64::from(calibrated_second);

    let boot_time = normalize_boot_time(raw_boot_time(target_second, load_time));

    let offset = ((boot_time + load_time) / SECONDS_PER_MINUTE) as u8;

    TimeData {
        boot_time,
        load_time,
        offset,
    }
}

/// Boot time before normalization.
///
/// `%` on `f64` is the IEEE-754 remainder with the dividend's sign (C
/// `fmod`), so a load time past the target second yields a negative value
/// here rather than wrapping into the positive range.
#[inline]
fn raw_boot_time(target_second: u8, load_time: f64) -> f64 {
    (f64::from(target_second) - load_time) % SECONDS_PER_MINUTE + BOOT_TIME_FUDGE
}

/// Pushes the boot time up by whole minutes until it clears
/// [`MINIMUM_BOOT_TIME`].
///
/// The input is within one modulo cycle of zero, so the loop runs at most
/// twice and the result lands in
/// `MINIMUM_BOOT_TIME..MINIMUM_BOOT_TIME + SECONDS_PER_MINUTE`.
#[inline]
fn normalize_boot_time(mut boot_time: f64) -> f64 {
    while boot_time < MINIMUM_BOOT_TIME {
        boot_time += SECONDS_PER_MINUTE;
    }
    boot_time
}
