//! Async send for Session.

use tracing::{debug, warn};

use crate::{ChatError, Completion, Message};

use super::manager::Session;

impl Session {
    /// Append `message`, send the whole transcript, and return the outcome.
    ///
    /// A reply is appended as `{role, content}` only when it has non-empty
    /// content; tool-call-only replies are returned but not recorded. A
    /// rejection leaves just `message` appended. Transport failures are
    /// `Err`, also with `message` already appended.
    pub async fn send(&mut self, message: Message) -> Result<Completion, ChatError> {
        self.messages.push(message);

        let completion = self
            .client
            .complete(&self.model, &self.messages, &self.tools)
            .await?;

        match &completion {
            Completion::Reply(reply) if reply.has_content() => {
                self.messages.push(reply.transcript_entry());
            }
            Completion::Reply(_) => {
                debug!("Reply has no content, not added to transcript");
            }
            Completion::Rejected(err) => {
                warn!(status = err.status, "Completion rejected");
            }
        }

        Ok(completion)
    }

    /// Send a user message with the given text.
    pub async fn send_user(&mut self, text: impl Into<String>) -> Result<Completion, ChatError> {
        self.send(Message::user(text)).await
    }
}
