//! Time subsystem.
//!
//! Provides the tick sources that timers read and the conversions between
//! clock ticks and calendar ticks (fixed 100 ns units).
//! Intended usage:
//! - `MonotonicClock` for real measurements (the default everywhere)
//! - `ManualClock` when time has to be driven explicitly, e.g. in tests

mod clock;
mod convert;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use convert::{
    calendar_ticks, calendar_ticks_from_duration, clock_ticks, duration_from_calendar_ticks,
    CALENDAR_TICKS_PER_MILLISECOND, CALENDAR_TICKS_PER_SECOND,
};
