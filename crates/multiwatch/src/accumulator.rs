use std::time::Duration;

use crate::error::AverageError;
use crate::stopwatch::Stopwatch;
use crate::summary::Summary;
use crate::time::{
    calendar_ticks, calendar_ticks_from_duration, clock_ticks, duration_from_calendar_ticks, Clock,
    MonotonicClock, CALENDAR_TICKS_PER_MILLISECOND,
};

/// Accumulating stopwatch.
///
/// Sums the duration of every start/stop segment and counts the segments, so
/// the hot part of a loop can be timed while setup work is left out:
///
/// ```rust
/// use multiwatch::Accumulator;
///
/// let mut hot = Accumulator::new();
/// for _ in 0..3 {
///     // setup, not timed
///     hot.start();
///     // work, timed
///     hot.stop();
/// }
/// assert_eq!(hot.count(), 3);
/// assert!(!hot.is_running());
/// ```
///
/// Totals and averages are derived on every read. While running, reads
/// include the open segment and so move with the clock.
///
/// Not synchronized: an accumulator is owned by one thread at a time.
#[derive(Debug, Clone)]
pub struct Accumulator<C: Clock = MonotonicClock> {
    clock: C,
    /// Ticks of all closed segments and merged contributions.
    accumulated_ticks: u64,
    /// Clock reading at the start of the open segment. Only meaningful while running.
    run_start_tick: u64,
    is_running: bool,
    run_count: u64,
}

impl Accumulator<MonotonicClock> {
    /// Creates a stopped accumulator on the process monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }

    /// Creates an accumulator with its first run already started.
    pub fn start_new() -> Self {
        let mut acc = Self::new();
        acc.start();
        acc
    }
}

impl Default for Accumulator<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Accumulator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            accumulated_ticks: 0,
            run_start_tick: 0,
            is_running: false,
            run_count: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ── state changes ─────────────────────────────────────────────────────

    /// Discards all history and stops.
    pub fn reset(&mut self) {
        self.run_count = 0;
        self.accumulated_ticks = 0;
        self.is_running = false;
        self.run_start_tick = 0;
    }

    pub fn reset_and_start(&mut self) {
        self.reset();
        self.start();
    }

    /// Opens a new run. Does nothing while a run is open.
    pub fn start(&mut self) {
        if self.is_running {
            return;
        }
        self.run_start_tick = self.clock.now();
        self.is_running = true;
        self.run_count += 1;
    }

    /// Closes the open run and keeps its duration. Does nothing while stopped.
    pub fn stop(&mut self) {
        if !self.is_running {
            return;
        }
        let segment = self.clock.now().saturating_sub(self.run_start_tick);
        self.accumulated_ticks = self.accumulated_ticks.saturating_add(segment);
        self.is_running = false;
    }

    /// Folds in an externally measured duration, in clock ticks, as one run.
    ///
    /// An open run stays open.
    pub fn add_ticks(&mut self, ticks: u64) {
        self.accumulated_ticks = self.accumulated_ticks.saturating_add(ticks);
        self.run_count += 1;
    }

    /// Folds in the whole of another accumulator as one run, whatever its
    /// own run count. An open run in `other` is included up to now.
    pub fn add_from(&mut self, other: &Accumulator<C>) {
        self.add_ticks(other.elapsed_ticks());
    }

    /// Folds in a stopwatch's total as one run.
    pub fn add_stopwatch(&mut self, other: &Stopwatch<C>) {
        self.add_ticks(other.elapsed_ticks());
    }

    /// Folds in a `Duration` measured elsewhere as one run, truncated to
    /// whole clock ticks.
    pub fn add_duration(&mut self, d: Duration) {
        self.add_ticks(clock_ticks::<C>(calendar_ticks_from_duration(d)));
    }

    // ── reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn count(&self) -> u64 {
        self.run_count
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Total clock ticks, including the open run.
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks_at(self.clock.now())
    }

    pub fn elapsed(&self) -> Duration {
        duration_from_calendar_ticks(calendar_ticks::<C>(self.elapsed_ticks()))
    }

    /// Whole milliseconds elapsed, truncated.
    pub fn elapsed_milliseconds(&self) -> u64 {
        calendar_ticks::<C>(self.elapsed_ticks()) / CALENDAR_TICKS_PER_MILLISECOND
    }

    /// Mean duration per run.
    ///
    /// # Errors
    ///
    /// [`AverageError::NoRuns`] when the count is zero. Unlike
    /// [`average_milliseconds`](Self::average_milliseconds), which reports zero.
    pub fn average(&self) -> Result<Duration, AverageError> {
        let calendar = calendar_ticks::<C>(self.elapsed_ticks());
        let mean = calendar.checked_div(self.run_count).ok_or(AverageError::NoRuns)?;
        Ok(duration_from_calendar_ticks(mean))
    }

    /// Mean whole milliseconds per run, or zero when nothing has run.
    pub fn average_milliseconds(&self) -> u64 {
        self.elapsed_milliseconds()
            .checked_div(self.run_count)
            .unwrap_or(0)
    }

    /// Mean clock ticks per run.
    ///
    /// # Errors
    ///
    /// [`AverageError::NoRuns`] when the count is zero.
    pub fn average_ticks(&self) -> Result<u64, AverageError> {
        self.elapsed_ticks()
            .checked_div(self.run_count)
            .ok_or(AverageError::NoRuns)
    }

    /// Snapshot of every statistic from one clock reading.
    pub fn summary(&self) -> Summary {
        let elapsed_ticks = self.elapsed_ticks_at(self.clock.now());
        let calendar = calendar_ticks::<C>(elapsed_ticks);
        let elapsed_milliseconds = calendar / CALENDAR_TICKS_PER_MILLISECOND;

        Summary {
            count: self.run_count,
            is_running: self.is_running,
            elapsed_ticks,
            elapsed: duration_from_calendar_ticks(calendar),
            elapsed_milliseconds,
            average: calendar
                .checked_div(self.run_count)
                .map(duration_from_calendar_ticks),
            average_milliseconds: elapsed_milliseconds.checked_div(self.run_count).unwrap_or(0),
            average_ticks: elapsed_ticks.checked_div(self.run_count),
        }
    }

    #[inline]
    fn elapsed_ticks_at(&self, now: u64) -> u64 {
        if self.is_running {
            self.accumulated_ticks
                .saturating_add(now.saturating_sub(self.run_start_tick))
        } else {
            self.accumulated_ticks
        }
    }
}
