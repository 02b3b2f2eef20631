use std::time::Duration;

use crate::time::{
    calendar_ticks, duration_from_calendar_ticks, Clock, MonotonicClock,
    CALENDAR_TICKS_PER_MILLISECOND,
};

/// A plain stopwatch: accumulates time across start/stop cycles but keeps no
/// run count.
///
/// An [`Accumulator`](crate::Accumulator) can absorb a stopwatch's total as a
/// single run with [`add_stopwatch`](crate::Accumulator::add_stopwatch).
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    elapsed: u64,
    last_start: Option<u64>,
}

impl Stopwatch<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }

    /// Creates a stopwatch that is already running.
    pub fn start_new() -> Self {
        let mut sw = Self::new();
        sw.start();
        sw
    }
}

impl Default for Stopwatch<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            elapsed: 0,
            last_start: None,
        }
    }

    /// Starts or resumes timing. Does nothing while running.
    pub fn start(&mut self) {
        if self.last_start.is_none() {
            self.last_start = Some(self.clock.now());
        }
    }

    /// Stops timing and keeps the segment. Does nothing while stopped.
    pub fn stop(&mut self) {
        if let Some(t) = self.last_start.take() {
            let segment = self.clock.now().saturating_sub(t);
            self.elapsed = self.elapsed.saturating_add(segment);
        }
    }

    /// Stops and clears all elapsed time.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.last_start = None;
    }

    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.last_start.is_some()
    }

    /// Total clock ticks, including the segment in progress.
    pub fn elapsed_ticks(&self) -> u64 {
        let current = self
            .last_start
            .map(|t| self.clock.now().saturating_sub(t))
            .unwrap_or(0);
        self.elapsed.saturating_add(current)
    }

    pub fn elapsed(&self) -> Duration {
        duration_from_calendar_ticks(calendar_ticks::<C>(self.elapsed_ticks()))
    }

    pub fn elapsed_milliseconds(&self) -> u64 {
        calendar_ticks::<C>(self.elapsed_ticks()) / CALENDAR_TICKS_PER_MILLISECOND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn sw() -> (ManualClock, Stopwatch<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), Stopwatch::with_clock(clock))
    }

    #[test]
    fn fresh_is_stopped_and_zero() {
        let (_, sw) = sw();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_ticks(), 0);
    }

    #[test]
    fn accumulates_only_while_running() {
        let (clock, mut sw) = sw();
        sw.start();
        clock.advance(100);
        sw.stop();
        clock.advance(500); // stopped, not counted
        sw.start();
        clock.advance(100);
        sw.stop();
        assert_eq!(sw.elapsed_ticks(), 200);
    }

    #[test]
    fn elapsed_includes_running_segment() {
        let (clock, mut sw) = sw();
        sw.start();
        clock.advance(30);
        assert!(sw.is_running());
        assert_eq!(sw.elapsed_ticks(), 30);
    }

    #[test]
    fn double_start_keeps_first_start() {
        let (clock, mut sw) = sw();
        sw.start();
        clock.advance(10);
        sw.start();
        clock.advance(10);
        assert_eq!(sw.elapsed_ticks(), 20);
    }

    #[test]
    fn restart_discards_history() {
        let (clock, mut sw) = sw();
        sw.start();
        clock.advance(1_000);
        sw.restart();
        clock.advance(5);
        assert!(sw.is_running());
        assert_eq!(sw.elapsed_ticks(), 5);
    }

    #[test]
    fn reset_stops() {
        let (clock, mut sw) = sw();
        sw.start();
        clock.advance(10);
        sw.reset();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_ticks(), 0);
    }

    #[test]
    fn duration_views() {
        let (clock, mut sw) = sw();
        sw.start();
        clock.advance(25_000); // 2.5 ms in calendar ticks
        sw.stop();
        assert_eq!(sw.elapsed(), Duration::from_micros(2_500));
        assert_eq!(sw.elapsed_milliseconds(), 2);
    }
}
