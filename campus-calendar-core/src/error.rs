//! Error types for the campus calendar.

use thiserror::Error;

/// Errors that can occur while building calendar views.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid date in '{field}': {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("End date {end} is before start date {start}")]
    InvertedRange { start: String, end: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CalendarError {
    /// True for errors caused by bad records from the event source,
    /// as opposed to bad arguments from the caller.
    pub fn is_data_quality(&self) -> bool {
        matches!(
            self,
            CalendarError::InvalidDate { .. }
                | CalendarError::MissingField(_)
                | CalendarError::UnknownCategory(_)
                | CalendarError::InvertedRange { .. }
        )
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(e: serde_json::Error) -> Self {
        CalendarError::Serialization(e.to_string())
    }
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
