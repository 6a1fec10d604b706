//! Saving and restoring a Session's transcript.

use crate::store::ConversationSummary;
use crate::{ChatError, ConversationId};

use super::manager::Session;

impl Session {
    /// Save the current transcript under a fresh id.
    pub fn save(&self) -> Result<ConversationId, ChatError> {
        self.store.save(&self.messages)
    }

    /// Replace the transcript with the one saved as `id`.
    ///
    /// The in-memory transcript is untouched if loading fails.
    pub fn load(&mut self, id: impl AsRef<str>) -> Result<(), ChatError> {
        self.messages = self.store.load(id.as_ref())?;
        Ok(())
    }

    /// Summaries of all saved conversations, newest first.
    pub fn list_conversations(&self) -> Result<Vec<ConversationSummary>, ChatError> {
        self.store.list()
    }

    /// Delete a saved conversation. `false` if it did not exist.
    pub fn delete_conversation(&self, id: impl AsRef<str>) -> Result<bool, ChatError> {
        self.store.delete(id.as_ref())
    }
}
