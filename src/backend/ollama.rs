//! Ollama backend implementation.
//!
//! Ollama is a local LLM server; the worker uses its non-streaming
//! `/api/chat` endpoint.

use super::{BackendError, ChatBackend};
use crate::protocol::{ChatMessage, ChatRequest, ChatResponse, ErrorBody, Role};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

const CONNECT_ERROR: &str = "Failed to connect to Ollama. Please check that Ollama is downloaded, running and accessible. https://ollama.com/download";

/// HTTP client for a local Ollama server.
pub struct OllamaClient {
    host: String,
    client: Client,
}

impl OllamaClient {
    /// Create a client for `host` (a normalized base URL).
    ///
    /// No request timeout is set: generation on a local model can take
    /// arbitrarily long and the caller waits for the full reply.
    pub fn new(host: impl Into<String>) -> Result<Self, BackendError> {
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::Client(e.to_string()))?;

        Ok(Self {
            host: host.into(),
            client,
        })
    }

    /// Base URL requests are sent to.
    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatResponse, BackendError> {
        let url = format!("{}/api/chat", self.host);
        let request = ChatRequest::new(model, messages);
        debug!("POST {} (model: {}, messages: {})", url, model, messages.len());

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!("Ollama answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatResponse =
            serde_json::from_str(&body).map_err(|e| BackendError::Malformed(e.to_string()))?;
        if reply.message.role != Role::Assistant {
            debug!("Reply carries role {:?}", reply.message.role);
        }
        debug!(
            "Reply from {} ({} chars)",
            reply.model.as_deref().unwrap_or(model),
            reply.content().len()
        );
        Ok(reply)
    }
}

fn transport_error(err: reqwest::Error) -> BackendError {
    if err.is_connect() {
        BackendError::Connection(CONNECT_ERROR.to_string())
    } else {
        BackendError::Connection(err.to_string())
    }
}
