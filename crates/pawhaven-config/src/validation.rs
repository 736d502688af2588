// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as URL schemes, non-empty names, and positive limits.

use crate::diagnostic::ConfigError;
use crate::model::PawhavenConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PawhavenConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let url = config.backend.url.trim();
    if url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "backend.url must not be empty".to_string(),
        });
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("backend.url `{url}` must start with http:// or https://"),
        });
    }

    if config.storage.photo_bucket.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.photo_bucket must not be empty".to_string(),
        });
    }

    if config.storage.max_photo_bytes == 0 {
        errors.push(ConfigError::Validation {
            message: "storage.max_photo_bytes must be positive".to_string(),
        });
    }

    if config.registry.pets_table.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "registry.pets_table must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
