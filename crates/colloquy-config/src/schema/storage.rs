use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where conversation records are kept.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one `<uuid>.json` per saved conversation.
    /// Empty means `<data dir>/colloquy/conversations`.
    pub directory: Option<PathBuf>,
}
