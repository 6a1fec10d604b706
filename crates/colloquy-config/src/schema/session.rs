use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Per-conversation defaults applied when a session is opened.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionSettings {
    /// Seeded as the first (system) message of every new transcript.
    pub system_prompt: Option<String>,
    /// JSON file holding an array of tool definitions, sent verbatim.
    pub tools_file: Option<PathBuf>,
}
