// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Pawhaven client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Pawhaven configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values,
/// except that a real deployment must supply `backend.anon_key`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PawhavenConfig {
    /// Backend service endpoint and credentials.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Photo object-storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Pet registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Client behavior settings.
    #[serde(default)]
    pub app: AppConfig,
}

/// Backend service endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the backend project (auth, storage, and REST share it).
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Publishable anon API key sent with every request. `None` is only
    /// usable against a local development stack with auth disabled.
    #[serde(default)]
    pub anon_key: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            anon_key: None,
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:54321".to_string()
}

/// Photo object-storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Bucket that holds submitted pet photos.
    #[serde(default = "default_photo_bucket")]
    pub photo_bucket: String,

    /// Client-enforced photo size ceiling in bytes.
    #[serde(default = "default_max_photo_bytes")]
    pub max_photo_bytes: usize,

    /// Path of the persisted-session file. Defaults to
    /// `<XDG data dir>/pawhaven/session.json` when unset.
    #[serde(default)]
    pub session_file: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            photo_bucket: default_photo_bucket(),
            max_photo_bytes: default_max_photo_bytes(),
            session_file: None,
        }
    }
}

fn default_photo_bucket() -> String {
    "pet-photos".to_string()
}

fn default_max_photo_bytes() -> usize {
    2 * 1024 * 1024
}

/// Pet registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Table that pet submissions are inserted into.
    #[serde(default = "default_pets_table")]
    pub pets_table: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            pets_table: default_pets_table(),
        }
    }
}

fn default_pets_table() -> String {
    "pets".to_string()
}

/// Client behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
