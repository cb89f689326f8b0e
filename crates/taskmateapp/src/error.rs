use crate::model::TodoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskmateError {
    #[error("Todo not found: {0}")]
    TodoNotFound(TodoId),

    #[error("Todo text is too short ({len} characters, need more than 3)")]
    TooShort { len: usize },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl TaskmateError {
    /// True for lookups that missed; callers treat these as a no-op refresh.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskmateError::TodoNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, TaskmateError>;
