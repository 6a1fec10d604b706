//! Turn raw config values into what a session needs.

use std::path::{Path, PathBuf};

use colloquy_common::ConfigError;
use tracing::debug;

use crate::schema::ColloquyConfig;
use crate::toml_loader::default_storage_dir;

impl ColloquyConfig {
    /// Conversation directory: the configured one, or the platform default.
    pub fn storage_dir(&self) -> Result<PathBuf, ConfigError> {
        match self.storage.directory.as_deref() {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
            _ => default_storage_dir(),
        }
    }

    /// System prompt, treating a blank string as unset.
    pub fn system_prompt(&self) -> Option<&str> {
        self.session
            .system_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }

    /// Read the tool definitions file, if one is configured.
    ///
    /// The file must hold a JSON array; its elements are passed to the
    /// completion service verbatim.
    pub fn load_tools(&self) -> Result<Vec<serde_json::Value>, ConfigError> {
        match self.session.tools_file.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => load_tools_file(path),
            _ => Ok(Vec::new()),
        }
    }
}

fn load_tools_file(path: &Path) -> Result<Vec<serde_json::Value>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let tools: Vec<serde_json::Value> = serde_json::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "tools file {} is not a JSON array: {e}",
            path.display()
        ))
    })?;

    debug!(count = tools.len(), path = %path.display(), "Loaded tool definitions");
    Ok(tools)
}
