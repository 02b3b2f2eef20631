use std::time::Duration;

/// Statistics of a timer taken from a single clock reading.
///
/// Reading the accessors of a running [`Accumulator`](crate::Accumulator) one
/// by one lets the clock move between reads; the fields here all agree with
/// each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of runs, including merged contributions.
    pub count: u64,

    /// Whether a run was in progress when the snapshot was taken.
    pub is_running: bool,

    /// Total elapsed time in clock ticks.
    pub elapsed_ticks: u64,

    pub elapsed: Duration,

    /// Whole milliseconds of `elapsed`, truncated.
    pub elapsed_milliseconds: u64,

    /// Mean duration per run; `None` without runs.
    pub average: Option<Duration>,

    /// Mean whole milliseconds per run; zero without runs.
    pub average_milliseconds: u64,

    /// Mean clock ticks per run; `None` without runs.
    pub average_ticks: Option<u64>,
}
