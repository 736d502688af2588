// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pawhaven.toml` > `~/.config/pawhaven/pawhaven.toml`
//! > `/etc/pawhaven/pawhaven.toml` with environment variable overrides via the
//! `PAWHAVEN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PawhavenConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pawhaven/pawhaven.toml` (system-wide)
/// 3. `~/.config/pawhaven/pawhaven.toml` (user XDG config)
/// 4. `./pawhaven.toml` (local directory)
/// 5. `PAWHAVEN_*` environment variables
pub fn load_config() -> Result<PawhavenConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PawhavenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PawhavenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::file("/etc/pawhaven/pawhaven.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pawhaven/pawhaven.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pawhaven.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `PAWHAVEN_BACKEND_ANON_KEY` must map to
/// `backend.anon_key`, not `backend.anon.key`.
fn env_provider() -> Env {
    Env::prefixed("PAWHAVEN_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: PAWHAVEN_STORAGE_PHOTO_BUCKET -> "storage_photo_bucket"
        let mapped = key
            .as_str()
            .replacen("backend_", "backend.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("registry_", "registry.", 1)
            .replacen("app_", "app.", 1);
        mapped.into()
    })
}
