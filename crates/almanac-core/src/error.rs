use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unrecognized {field}: {value:?}")]
    UnrecognizedValue { field: &'static str, value: String },
}

impl CoreError {
    #[must_use]
    pub fn unrecognized(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnrecognizedValue {
            field,
            value: value.into(),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
