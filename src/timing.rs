// src/timing.rs

//! Fixed timing constants of the DS clock domain.
//!
//! These are process-wide read-only configuration, shared by every timer
//! implementation in the community (EonTimer and friends). They are named
//! constants rather than inline literals so the transform stays auditable
//! against alternate hardware timing profiles.

/// Seconds in one minute, as used by the boot-time modulo and the offset
/// computation.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Nintendo DS frame rate [frames/s].
///
/// The DS frame counter does not tick at an even 60 Hz against the
/// real-time clock; this is the measured effective rate.
pub const NDS_FRAME_RATE: f64 = 59.8261;

/// Minimum boot time [s]. Boot times below this are pushed up by whole
/// minutes until they clear the threshold.
pub const MINIMUM_BOOT_TIME: f64 = 14.0;

/// Fixed compensation [s] added to the raw boot time, covering the
/// execution overhead of the calibration procedure itself.
pub const BOOT_TIME_FUDGE: f64 = 0.2;
