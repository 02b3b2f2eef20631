use std::fmt;

/// An average was requested from a timer that has recorded no runs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AverageError {
    /// The run count is zero, so the mean is undefined.
    NoRuns,
}

impl fmt::Display for AverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageError::NoRuns => write!(f, "average is undefined: no runs have been recorded"),
        }
    }
}

impl std::error::Error for AverageError {}
