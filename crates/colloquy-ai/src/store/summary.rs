//! Listing entries derived from saved transcripts.

use std::time::SystemTime;

use crate::{ConversationId, Message, Role};

/// Number of characters of the first user message used as a title.
pub const TITLE_CHARS: usize = 10;

/// Read-only view of one saved conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    /// First characters of the first user message, if there is one.
    pub title: Option<String>,
    pub id: ConversationId,
    /// File creation time (modification time where birth time is unavailable).
    pub created_at: SystemTime,
}

/// Title for a transcript: the first `TITLE_CHARS` characters of its first
/// user message. `None` when no user message exists or it has no content.
pub fn title_for(messages: &[Message]) -> Option<String> {
    messages
        .iter()
        .find(|m| m.role == Role::User)
        .and_then(Message::text)
        .map(|text| text.chars().take(TITLE_CHARS).collect())
}
