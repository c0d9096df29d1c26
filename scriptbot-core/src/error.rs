use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptbotError {
    #[error("producer failed: {0}")]
    Producer(String),
    #[error("malformed producer response '{output}': {reason}")]
    MalformedResponse { output: String, reason: String },
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("operation was cancelled")]
    Cancelled,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}
