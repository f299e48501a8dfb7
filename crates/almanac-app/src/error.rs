use thiserror::Error;

/// Application-level errors (command line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] almanac_service::error::ServiceError),

    #[error(transparent)]
    CalendarError(#[from] almanac_calendar::error::CalendarError),

    #[error(transparent)]
    CoreError(#[from] almanac_core::error::CoreError),

    #[error("Failed to read payload: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed payload: {0}")]
    PayloadError(#[from] serde_json::Error),

    #[error("Usage: almanac <expand|check> <payload.json> ({0})")]
    UsageError(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
