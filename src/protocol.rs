//! Wire types for the Ollama chat API.
//!
//! Only the fields the worker actually sends or reads are modelled; anything
//! else the server returns (token counts, timings) is ignored on decode.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Message text. Servers may omit it on an empty reply.
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    /// Always false: the whole reply is buffered before printing.
    pub stream: bool,
}

impl<'a> ChatRequest<'a> {
    /// Create a non-streaming request.
    pub fn new(model: &'a str, messages: &'a [ChatMessage]) -> Self {
        Self {
            model,
            messages,
            stream: false,
        }
    }
}

/// Non-streaming reply from `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub message: ChatMessage,
    #[allow(dead_code)]
    #[serde(default)]
    pub done: bool,
}

impl ChatResponse {
    /// The generated text.
    pub fn content(&self) -> &str {
        &self.message.content
    }
}

/// Error body the server sends alongside a non-success status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
