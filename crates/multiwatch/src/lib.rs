//! Accumulating stopwatch.
//!
//! Times repeated operations across many start/stop cycles and reports the
//! total, the run count and the mean, in clock ticks, `Duration` and
//! milliseconds.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`accumulator`] | `Accumulator`, the run-counting timer |
//! | [`stopwatch`] | `Stopwatch`, a plain timer that can be merged into an accumulator |
//! | [`time`] | `Clock`, `MonotonicClock`, `ManualClock`, tick conversions |
//! | [`error`] | `AverageError` |
//! | [`logging`] | logger setup for binaries |
//!
//! # Quick start
//!
//! ```rust
//! use multiwatch::{Accumulator, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut hot = Accumulator::with_clock(clock.clone());
//!
//! for _ in 0..4 {
//!     clock.advance(1_000); // setup, not timed
//!     hot.start();
//!     clock.advance(25_000); // 2.5 ms of work
//!     hot.stop();
//! }
//!
//! assert_eq!(hot.count(), 4);
//! assert_eq!(hot.elapsed_milliseconds(), 10);
//! assert_eq!(hot.average_ticks().unwrap(), 25_000);
//!
//! let mut total = Accumulator::with_clock(clock.clone());
//! total.add_from(&hot);
//! assert_eq!(total.count(), 1);
//! ```

pub mod accumulator;
pub mod error;
pub mod logging;
pub mod stopwatch;
pub mod summary;
pub mod time;

pub use accumulator::Accumulator;
pub use error::AverageError;
pub use stopwatch::Stopwatch;
pub use summary::Summary;
pub use time::{Clock, ManualClock, MonotonicClock};
