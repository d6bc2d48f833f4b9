//! Chat backend seam.
//!
//! The dispatcher talks to the model server only through [`ChatBackend`], so
//! tests can swap the HTTP client for an in-memory stub.

pub mod ollama;

use crate::protocol::{ChatMessage, ChatResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Failure surfaced by a chat backend.
///
/// Every variant displays as the bare message so it can be embedded in the
/// `Error in ollama_chat: ...` line unchanged.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The server could not be reached.
    #[error("{0}")]
    Connection(String),
    /// The server answered with a non-success status.
    #[error("{message} (status code: {status})")]
    Rejected { status: u16, message: String },
    /// The server answered but the body was not a chat reply.
    #[error("{0}")]
    Malformed(String),
    /// The HTTP client itself could not be set up.
    #[error("{0}")]
    Client(String),
}

/// A service that turns a conversation into one reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Submit `messages` to `model` and wait for the complete reply.
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatResponse, BackendError>;
}
