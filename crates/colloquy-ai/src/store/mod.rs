//! File-backed conversation store.
//!
//! Each saved conversation is `{dir}/{uuid}.json`: the full transcript as
//! a pretty-printed JSON array, UTF-8, non-ASCII kept literal. The file
//! stem is the conversation's identity. Files are not locked; concurrent
//! writers in other processes can race with listing or deletion.

mod summary;


pub use summary::{title_for, ConversationSummary, TITLE_CHARS};

use std::cmp::Reverse;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{ChatError, ConversationId, Message};

const RECORD_EXTENSION: &str = "json";

/// Directory of conversation records.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    dir: PathBuf,
}

impl ConversationStore {
    /// Bind to an existing directory. The directory is not created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ChatError> {
        let dir = dir.into();
        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => Ok(Self { dir }),
            Ok(_) => Err(ChatError::Configuration(format!(
                "storage path is not a directory: {}",
                dir.display()
            ))),
            Err(e) => Err(ChatError::Configuration(format!(
                "storage path is not valid: {}: {e}",
                dir.display()
            ))),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `messages` under a fresh id and return it.
    pub fn save(&self, messages: &[Message]) -> Result<ConversationId, ChatError> {
        let id = ConversationId::new();
        let path = self.record_path(id.as_str())?;
        write_record(&path, messages)?;
        debug!(id = %id, messages = messages.len(), "Saved conversation");
        Ok(id)
    }

    /// Read the transcript saved as `id`.
    pub fn load(&self, id: &str) -> Result<Vec<Message>, ChatError> {
        let path = self.record_path(id)?;
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ChatError::NotFound(id.to_string()),
            _ => ChatError::Io(e),
        })?;
        let messages = parse_record(id, &content)?;
        debug!(id, messages = messages.len(), "Loaded conversation");
        Ok(messages)
    }

    /// Summaries of every record, newest first.
    ///
    /// Ordering uses file creation time; equal timestamps keep directory
    /// enumeration order. A record that vanishes mid-listing is skipped.
    pub fn list(&self) -> Result<Vec<ConversationSummary>, ChatError> {
        let mut summaries = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "Skipping record with non-UTF-8 name");
                continue;
            };

            let meta = match entry.metadata() {
                Ok(meta) => meta,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(ChatError::Io(e)),
            };
            if !meta.is_file() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(id, "Record removed while listing");
                    continue;
                }
                Err(e) => return Err(ChatError::Io(e)),
            };

            let messages = parse_record(id, &content)?;
            summaries.push(ConversationSummary {
                title: title_for(&messages),
                id: ConversationId::from(id),
                created_at: created_at(&meta),
            });
        }

        summaries.sort_by_key(|s| Reverse(s.created_at));
        Ok(summaries)
    }

    /// Remove the record for `id`. Returns `false` when there was none.
    pub fn delete(&self, id: &str) -> Result<bool, ChatError> {
        let path = self.record_path(id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(id, "Deleted conversation");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ChatError::Io(e)),
        }
    }

    fn record_path(&self, id: &str) -> Result<PathBuf, ChatError> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.{RECORD_EXTENSION}")))
    }
}

/// Reject ids that could escape the storage directory.
fn validate_id(id: &str) -> Result<(), ChatError> {
    if id.is_empty() {
        return Err(ChatError::InvalidId("id cannot be empty".to_string()));
    }
    if id.contains('/') || id.contains('\\') || id.contains("..") {
        return Err(ChatError::InvalidId(format!(
            "id contains path characters: {id:?}"
        )));
    }
    if id.chars().any(|c| c.is_control()) {
        return Err(ChatError::InvalidId(format!(
            "id contains control characters: {id:?}"
        )));
    }
    Ok(())
}

fn parse_record(id: &str, content: &str) -> Result<Vec<Message>, ChatError> {
    serde_json::from_str(content).map_err(|e| ChatError::CorruptData {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

/// Serialize with four-space indentation. serde_json leaves non-ASCII
/// characters unescaped.
fn encode_record(messages: &[Message]) -> Result<Vec<u8>, ChatError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    messages
        .serialize(&mut serializer)
        .map_err(std::io::Error::from)?;
    Ok(buf)
}

/// Atomic write: write to `.json.tmp`, then rename over the record.
fn write_record(path: &Path, messages: &[Message]) -> Result<(), ChatError> {
    let bytes = encode_record(messages)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &bytes)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        warn!("atomic rename failed ({}), falling back to direct write", e);
        fs::write(path, &bytes)?;
        let _ = fs::remove_file(&tmp_path);
    }
    Ok(())
}

fn created_at(meta: &fs::Metadata) -> SystemTime {
    meta.created()
        .or_else(|_| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
