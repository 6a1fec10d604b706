//! Configuration schema types for Colloquy.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that talk to the public GLM
//! endpoint and store conversations under the platform data directory.

mod api;
mod session;
mod storage;
mod system;

pub use api::*;
pub use session::*;
pub use storage::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Colloquy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ColloquyConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub session: SessionSettings,
    pub logging: LoggingConfig,
}
