use std::time::Duration;

use super::Clock;

/// Calendar ticks are fixed 100 ns units.
pub const CALENDAR_TICKS_PER_SECOND: u64 = 10_000_000;
pub const CALENDAR_TICKS_PER_MILLISECOND: u64 = 10_000;

const NANOS_PER_CALENDAR_TICK: u32 = 100;

/// Converts clock ticks of `C` to calendar ticks, truncating.
///
/// Equivalent to `ticks * C::CALENDAR_TICK_FACTOR`, computed in integers so
/// whole multiples convert exactly.
#[inline]
pub fn calendar_ticks<C: Clock>(ticks: u64) -> u64 {
    if !C::IS_HIGH_RESOLUTION {
        return ticks;
    }
    let wide = u128::from(ticks) * u128::from(CALENDAR_TICKS_PER_SECOND) / u128::from(C::FREQUENCY);
    u64::try_from(wide).unwrap_or(u64::MAX)
}

/// Converts calendar ticks to clock ticks of `C`, truncating.
#[inline]
pub fn clock_ticks<C: Clock>(calendar: u64) -> u64 {
    if !C::IS_HIGH_RESOLUTION {
        return calendar;
    }
    let wide = u128::from(calendar) * u128::from(C::FREQUENCY) / u128::from(CALENDAR_TICKS_PER_SECOND);
    u64::try_from(wide).unwrap_or(u64::MAX)
}

#[inline]
pub fn duration_from_calendar_ticks(calendar: u64) -> Duration {
    let secs = calendar / CALENDAR_TICKS_PER_SECOND;
    // < 10_000_000, fits in u32
    let rem = (calendar % CALENDAR_TICKS_PER_SECOND) as u32;
    Duration::new(secs, rem * NANOS_PER_CALENDAR_TICK)
}

/// Truncates `d` to whole calendar ticks, saturating at `u64::MAX`.
#[inline]
pub fn calendar_ticks_from_duration(d: Duration) -> u64 {
    let ticks = d.as_nanos() / u128::from(NANOS_PER_CALENDAR_TICK);
    u64::try_from(ticks).unwrap_or(u64::MAX)
}
