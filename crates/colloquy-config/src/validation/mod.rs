//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod api;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ColloquyConfig;
use colloquy_common::ConfigError;

/// Run all validations on a config, collecting all errors.
///
/// A missing API key is not a validation error: listing and deleting
/// saved conversations work without one.
pub fn validate(config: &ColloquyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
