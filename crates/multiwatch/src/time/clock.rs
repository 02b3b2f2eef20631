use std::cell::Cell;
use std::rc::Rc;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use super::convert::{calendar_ticks_from_duration, clock_ticks, CALENDAR_TICKS_PER_SECOND};

/// A monotonic tick source.
///
/// Readings never decrease. The unit of a tick is defined by `FREQUENCY`;
/// everything that reports durations converts through the associated
/// constants so they are resolved once per clock type.
pub trait Clock {
    /// Ticks per second.
    const FREQUENCY: u64;

    /// Whether the counter is a high-resolution counter.
    ///
    /// A low-resolution counter is expected to tick in calendar units
    /// already, so no conversion is applied to its readings.
    const IS_HIGH_RESOLUTION: bool = Self::FREQUENCY >= 1_000_000;

    /// Calendar ticks per clock tick.
    const CALENDAR_TICK_FACTOR: f64 = if Self::IS_HIGH_RESOLUTION {
        CALENDAR_TICKS_PER_SECOND as f64 / Self::FREQUENCY as f64
    } else {
        1.0
    };

    /// Current tick reading.
    fn now(&self) -> u64;
}

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// The process monotonic clock, in nanoseconds since first use.
///
/// Backed by `Instant`, so it is unaffected by wall-clock adjustments.
#[derive(Debug, Copy, Clone, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    const FREQUENCY: u64 = 1_000_000_000;

    #[inline]
    fn now(&self) -> u64 {
        let nanos = Instant::now().saturating_duration_since(*EPOCH).as_nanos();
        u64::try_from(nanos).unwrap_or(u64::MAX)
    }
}

/// A clock that only moves when told to.
///
/// Ticks in calendar units (100 ns). Clones share one counter, so a caller
/// can keep a handle and advance time under a timer that owns another clone.
///
/// Not `Send`: a `ManualClock` belongs to one thread, like the timers it drives.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ticks: u64) -> Self {
        Self {
            ticks: Rc::new(Cell::new(ticks)),
        }
    }

    /// Current reading.
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }

    /// Moves the clock forward by `ticks`.
    pub fn advance(&self, ticks: u64) {
        self.ticks.set(self.ticks.get().saturating_add(ticks));
    }

    /// Moves the clock forward by `d`, truncated to whole ticks.
    pub fn advance_by(&self, d: Duration) {
        self.advance(clock_ticks::<Self>(calendar_ticks_from_duration(d)));
    }

    /// Jumps to an absolute reading. Readings never go backwards; an earlier
    /// value is ignored.
    pub fn set(&self, ticks: u64) {
        if ticks > self.ticks.get() {
            self.ticks.set(ticks);
        }
    }
}

impl Clock for ManualClock {
    const FREQUENCY: u64 = CALENDAR_TICKS_PER_SECOND;

    #[inline]
    fn now(&self) -> u64 {
        self.ticks.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── MonotonicClock ────────────────────────────────────────────────────

    #[test]
    fn monotonic_is_high_resolution() {
        assert!(MonotonicClock::IS_HIGH_RESOLUTION);
        assert_eq!(MonotonicClock::CALENDAR_TICK_FACTOR, 0.01);
    }

    #[test]
    fn monotonic_never_decreases() {
        let clock = MonotonicClock;
        let mut last = clock.now();
        for _ in 0..1_000 {
            let now = clock.now();
            assert!(now >= last);
            last = now;
        }
    }

    // ── ManualClock ───────────────────────────────────────────────────────

    #[test]
    fn manual_factor_is_identity() {
        assert!(ManualClock::IS_HIGH_RESOLUTION);
        assert_eq!(ManualClock::CALENDAR_TICK_FACTOR, 1.0);
    }

    #[test]
    fn manual_starts_at_zero() {
        assert_eq!(ManualClock::new().now(), 0);
        assert_eq!(ManualClock::starting_at(42).now(), 42);
    }

    #[test]
    fn manual_clones_share_counter() {
        let a = ManualClock::new();
        let b = a.clone();
        a.advance(7);
        assert_eq!(b.now(), 7);
    }

    #[test]
    fn manual_advance_by_duration() {
        let clock = ManualClock::new();
        clock.advance_by(Duration::from_millis(3));
        assert_eq!(clock.now(), 30_000);
    }

    #[test]
    fn manual_set_ignores_earlier_value() {
        let clock = ManualClock::starting_at(100);
        clock.set(50);
        assert_eq!(clock.now(), 100);
        clock.set(150);
        assert_eq!(clock.now(), 150);
    }

    #[test]
    fn manual_advance_saturates() {
        let clock = ManualClock::starting_at(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now(), u64::MAX);
    }
}
