use thiserror::Error;

/// Calendar parsing, expansion and validation errors
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Parse error: invalid {field} {value:?}")]
    ParseError { field: &'static str, value: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Recurrence error: {0}")]
    RecurrenceError(String),

    #[error(transparent)]
    CoreError(#[from] almanac_core::error::CoreError),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
