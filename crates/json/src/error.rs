use thiserror::Error;

/// Errors returned by the JSON value model.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid cast: {0}")]
    InvalidCast(&'static str),
    #[error("format error: {0}")]
    Format(String),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl JsonError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

/// Result type for JSON operations
pub type JsonResult<T> = Result<T, JsonError>;
