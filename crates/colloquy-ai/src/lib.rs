//! Chat engine for Colloquy.
//!
//! Provides:
//! - A role-tagged [`Message`] model that round-trips unknown fields
//! - The [`CompletionClient`] transport seam and its GLM implementation
//! - A [`Session`] that owns one transcript and sends it for completion
//! - A [`ConversationStore`] keeping one JSON file per saved conversation

pub mod glm;
pub mod session;
pub mod store;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use glm::{GlmClient, GlmConfig};
pub use session::Session;
pub use store::{ConversationStore, ConversationSummary};

pub use colloquy_common::ConversationId;

/// Tool definitions are opaque to the client and forwarded verbatim.
pub type ToolDefinition = serde_json::Value;

/// A single request/response exchange with a completion service.
///
/// Implementations hold no conversation state: every call carries the
/// whole transcript.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<Completion, ChatError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Absent for replies that only carry tool calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Fields this client does not interpret (`tool_calls`, `tool_call_id`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            extra: serde_json::Map::new(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// The `{role, content}` pair kept in a transcript for a reply.
    pub(crate) fn transcript_entry(&self) -> Self {
        Self {
            role: self.role,
            content: self.content.clone(),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// Outcome of one completion call that reached the service.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// HTTP 200: the first choice's message.
    Reply(Message),
    /// Any other status, surfaced verbatim.
    Rejected(RemoteError),
}

impl Completion {
    pub fn reply(&self) -> Option<&Message> {
        match self {
            Completion::Reply(message) => Some(message),
            Completion::Rejected(_) => None,
        }
    }

    pub fn into_result(self) -> Result<Message, RemoteError> {
        match self {
            Completion::Reply(message) => Ok(message),
            Completion::Rejected(err) => Err(err),
        }
    }
}

/// Non-200 response from the completion service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("HTTP {status}: {body}")]
pub struct RemoteError {
    pub status: u16,
    /// Parsed JSON error body, or the raw text as a JSON string.
    pub body: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("conversation not found: {0}")]
    NotFound(String),
    #[error("conversation {id} is corrupt: {reason}")]
    CorruptData { id: String, reason: String },
    #[error("invalid conversation id: {0}")]
    InvalidId(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}
