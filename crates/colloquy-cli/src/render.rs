//! Plain-text rendering of messages, replies, and conversation listings.

use chrono::{DateTime, Local};
use colloquy_ai::{Completion, ConversationSummary, Message, Role};

const UNTITLED: &str = "(untitled)";

fn role_label(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    }
}

/// One listing row: local creation time, id, title.
pub fn summary_line(summary: &ConversationSummary) -> String {
    let created: DateTime<Local> = summary.created_at.into();
    format!(
        "{}  {}  {}",
        created.format("%Y-%m-%d %H:%M:%S"),
        summary.id,
        summary.title.as_deref().unwrap_or(UNTITLED)
    )
}

/// A transcript entry as `[role] content`, with uninterpreted fields as JSON.
pub fn message_block(message: &Message) -> String {
    let mut out = format!("[{}]", role_label(message.role));
    if let Some(text) = message.text() {
        out.push(' ');
        out.push_str(text);
    }
    for (key, value) in &message.extra {
        out.push_str(&format!("\n  {key}: {value}"));
    }
    out
}

/// What the user sees after a send.
pub fn completion_text(completion: &Completion) -> String {
    match completion {
        Completion::Reply(reply) if reply.has_content() => {
            reply.text().unwrap_or_default().to_string()
        }
        Completion::Reply(reply) => match reply.extra.get("tool_calls") {
            Some(calls) => format!("(tool calls) {calls}"),
            None => "(empty reply)".to_string(),
        },
        Completion::Rejected(err) => format!("request rejected: {err}"),
    }
}
