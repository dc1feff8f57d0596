// src/lib.rs

#![no_std] // Specify no_std at the crate root

//! Timer arithmetic for RNG manipulation on the Nintendo DS.
//!
//! This crate computes the "time data" used by DS RNG-manipulation timers:
//! given one calibration measurement (a frame-counter delay observed at a
//! known clock second) and a desired target delay/second pair, it derives
//!
//! * the **boot time** to wait between setting the DS clock and booting,
//! * the **load time** to wait between booting and loading the save file,
//! * the whole-minute **offset** by which the clock is pre-set before the
//!   real target time.
//!
//! The algorithm matches the established community timers (EonTimer and
//! friends). Everything is a pure function over `core`; no allocation, no
//! I/O, no shared state.
//!
//! ```
//! use dstime::{get_time_data, ClockSecond};
//!
//! let calibrated = ClockSecond::new(30)?;
//! let target = ClockSecond::new(45)?;
//! let td = get_time_data(1000, calibrated, 1598, target)?;
//! assert_eq!(td.offset, 1);
//! # Ok::<(), dstime::TimerError>(())
//! ```

pub mod calculator;
pub mod convert;
pub mod error;
pub mod second;
pub mod timing;

// Re-export key types for convenience
pub use calculator::{get_time_data, get_time_data_unchecked, TimeData};
pub use convert::{delay_to_second, second_to_delay, Delay};
pub use error::TimerError;
pub use second::ClockSecond;
