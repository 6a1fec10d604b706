//! Session struct, construction, and transcript access.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::glm::{GlmClient, GlmConfig};
use crate::store::ConversationStore;
use crate::{ChatError, CompletionClient, Message, Role, ToolDefinition};

/// A conversation bound to a model, a storage directory, and a client.
///
/// Calls take `&mut self`; share a session across tasks only behind a lock.
pub struct Session {
    /// Transport used by `send`.
    pub(super) client: Box<dyn CompletionClient>,
    /// Model identifier sent with every request.
    pub(super) model: String,
    /// Where `save`/`load`/list/delete operate.
    pub(super) store: ConversationStore,
    /// Tool definitions, forwarded verbatim.
    pub(super) tools: Vec<ToolDefinition>,
    /// Seeded as the first message of a fresh transcript.
    pub(super) system_prompt: Option<String>,
    /// Conversation transcript.
    pub(super) messages: Vec<Message>,
}

impl Session {
    /// Open a session that talks to the default GLM endpoint with `api_key`.
    ///
    /// Fails with `ChatError::Configuration` if `storage` is not an
    /// existing directory.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        storage: impl Into<PathBuf>,
    ) -> Result<Self, ChatError> {
        let client = GlmClient::new(GlmConfig::new(api_key))?;
        Self::with_client(client, model, storage)
    }

    /// Open a session over any completion client.
    pub fn with_client(
        client: impl CompletionClient + 'static,
        model: impl Into<String>,
        storage: impl Into<PathBuf>,
    ) -> Result<Self, ChatError> {
        let store = ConversationStore::open(storage)?;
        let model = model.into();
        debug!(model = %model, storage = %store.dir().display(), "Session opened");
        Ok(Self {
            client: Box::new(client),
            model,
            store,
            tools: Vec::new(),
            system_prompt: None,
            messages: Vec::new(),
        })
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Seed the transcript with a system message.
    ///
    /// Replaces an already seeded system message rather than adding a
    /// second one.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        let seed = Message::system(prompt.clone());
        let seeded = matches!(self.messages.first(), Some(m) if m.role == Role::System);
        if seeded {
            self.messages[0] = seed;
        } else {
            self.messages.insert(0, seed);
        }
        self.system_prompt = Some(prompt);
        self
    }

    /// Start over with only the system prompt (if any) in the transcript.
    pub fn reset(&mut self) {
        self.messages.clear();
        if let Some(ref prompt) = self.system_prompt {
            self.messages.push(Message::system(prompt.clone()));
        }
    }

    /// Get the full conversation transcript.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn storage_dir(&self) -> &Path {
        self.store.dir()
    }
}
