use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ScriptbotError, Transcript};

/// Accumulated conversational input handed to a producer: the most recent
/// user entry plus the structured history so far.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProducerRequest {
    pub last_input: String,
    pub transcript: Transcript,
}

impl ProducerRequest {
    pub fn new(last_input: impl Into<String>, transcript: Transcript) -> Self {
        Self {
            last_input: last_input.into(),
            transcript,
        }
    }
}

/// External capability an asynchronous step delegates to for its result.
///
/// Implementations must be safe to invoke once per step activation; the
/// engine never calls `produce` twice for the same activation.
#[async_trait]
pub trait Producer: Send + Sync + 'static {
    async fn produce(&self, request: ProducerRequest) -> Result<String, ScriptbotError>;
}
