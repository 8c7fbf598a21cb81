//! Error types for schedule conversion.

use thiserror::Error;

/// Errors that can occur while building a calendar event from a paper.
///
/// Malformed dates and times are never errors: unreadable parts count as 0
/// and out-of-range values roll over. Only leaving chrono's supported range
/// fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Date '{0}' is outside the supported range")]
    DateOutOfRange(String),

    #[error("Recurrence error: {0}")]
    Recurrence(String),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
