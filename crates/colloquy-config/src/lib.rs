//! Colloquy configuration system.
//!
//! Provides TOML-based configuration for the chat client: credential and
//! endpoint, conversation storage directory, session defaults, and
//! logging. All sections use defaults so partial configs work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use colloquy_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.api.model);
//! ```

pub mod resolve;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ColloquyConfig, LogLevel, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, default_storage_dir};
pub use validation::validate;

use std::path::Path;

use colloquy_common::ConfigError;

/// Environment variable that overrides `[api].api_key`.
pub const API_KEY_ENV: &str = "COLLOQUY_API_KEY";

/// Load, override, and validate the config.
pub fn load_config(path: Option<&Path>) -> Result<ColloquyConfig, ConfigError> {
    let config = read_config(path)?;
    validate(&config)?;
    Ok(config)
}

/// Load the config and apply the environment override without validating.
///
/// Reads `path` when given, otherwise the platform default (creating a
/// commented default file if none exists). `COLLOQUY_API_KEY` replaces the
/// file's credential when set. Callers decide whether [`validate`] failures
/// are fatal.
pub fn read_config(path: Option<&Path>) -> Result<ColloquyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_api_key_override(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

/// Replace the configured credential with `key` unless it is blank.
pub fn apply_api_key_override(config: &mut ColloquyConfig, key: Option<String>) {
    if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
        tracing::debug!("using API key from {API_KEY_ENV}");
        config.api.api_key = key;
    }
}
