use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use scriptbot_core::{Producer, ProducerRequest, ScriptbotError};

/// Producer backed by the chat service's `/query` endpoint.
#[derive(Clone)]
pub struct ChatServiceClient {
    base_url: String,
    http: Client,
    full_transcript: bool,
}

// Legacy wire format: one field each way.
#[derive(Debug, Serialize)]
struct QueryRequest {
    #[serde(rename = "lastConversations")]
    last_conversations: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(rename = "botResponse")]
    bot_response: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: String,
}

impl ChatServiceClient {
    pub fn new(base_url: String) -> Result<Self, ScriptbotError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|err| ScriptbotError::Producer(err.to_string()))?;
        Ok(Self {
            base_url,
            http,
            full_transcript: false,
        })
    }

    /// Sends the rendered transcript instead of just the last user entry.
    pub fn with_full_transcript(mut self) -> Self {
        self.full_transcript = true;
        self
    }

    /// Probes the service index route.
    pub async fn health(&self) -> Result<ServiceStatus, ScriptbotError> {
        let url = format!("{}/", self.base_url);
        let status: ServiceStatus = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ScriptbotError::Producer(err.to_string()))?
            .error_for_status()
            .map_err(|err| ScriptbotError::Producer(err.to_string()))?
            .json()
            .await
            .map_err(|err| ScriptbotError::Producer(err.to_string()))?;
        if status.status != "OK" {
            tracing::warn!(status = %status.status, "chat service reported degraded status");
        }
        Ok(status)
    }
}

#[async_trait::async_trait]
impl Producer for ChatServiceClient {
    async fn produce(&self, request: ProducerRequest) -> Result<String, ScriptbotError> {
        let last_conversations = if self.full_transcript {
            request.transcript.rendered()
        } else {
            request.last_input
        };
        let url = format!("{}/query", self.base_url);
        tracing::debug!(%url, "querying chat service");

        let body = self
            .http
            .post(url)
            .json(&QueryRequest { last_conversations })
            .send()
            .await
            .map_err(|err| ScriptbotError::Producer(err.to_string()))?
            .error_for_status()
            .map_err(|err| ScriptbotError::Producer(err.to_string()))?
            .text()
            .await
            .map_err(|err| ScriptbotError::Producer(err.to_string()))?;

        let response: QueryResponse =
            serde_json::from_str(&body).map_err(|err| ScriptbotError::MalformedResponse {
                output: body.clone(),
                reason: err.to_string(),
            })?;

        Ok(response.bot_response)
    }
}
