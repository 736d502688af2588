// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared HTTP client for the Supabase-compatible backend.
//!
//! One [`SupabaseClient`] serves all three capability contracts (auth,
//! object storage, records). It tracks the signed-in session internally,
//! the way the browser SDK does, so storage and record calls are
//! authorized with the current user's token automatically.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use pawhaven_config::PawhavenConfig;
use pawhaven_core::{AuthEvent, PawhavenError, Session};
use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the auth-event broadcast channel. Events are small and
/// consumers react immediately; a lagging receiver only misses stale state.
const AUTH_EVENT_CAPACITY: usize = 16;

/// HTTP client for a Supabase-compatible backend project.
///
/// Holds the base URL shared by the auth (`/auth/v1`), object storage
/// (`/storage/v1`), and record (`/rest/v1`) APIs, plus the persisted
/// session and the auth-event broadcast sender.
pub struct SupabaseClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) anon_key: Option<String>,
    pub(crate) pets_table: String,
    pub(crate) session_file: PathBuf,
    pub(crate) current: ArcSwapOption<Session>,
    pub(crate) events: broadcast::Sender<AuthEvent>,
}

impl SupabaseClient {
    /// Creates a client from the loaded configuration.
    ///
    /// The session file defaults to `<XDG data dir>/pawhaven/session.json`
    /// when not configured.
    pub fn new(config: &PawhavenConfig) -> Result<Self, PawhavenError> {
        let session_file = match &config.storage.session_file {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("pawhaven/session.json"),
        };

        Self::from_parts(
            &config.backend.url,
            config.backend.anon_key.clone(),
            &config.registry.pets_table,
            session_file,
        )
    }

    /// Creates a client from explicit parts (used by tests to point at a
    /// mock server and a temp session file).
    pub fn from_parts(
        base_url: &str,
        anon_key: Option<String>,
        pets_table: &str,
        session_file: PathBuf,
    ) -> Result<Self, PawhavenError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &anon_key {
            headers.insert(
                "apikey",
                HeaderValue::from_str(key).map_err(|e| {
                    PawhavenError::Config(format!("invalid anon key header value: {e}"))
                })?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PawhavenError::Internal(format!("failed to build HTTP client: {e}")))?;

        let (events, _) = broadcast::channel(AUTH_EVENT_CAPACITY);

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            pets_table: pets_table.to_string(),
            session_file,
            current: ArcSwapOption::empty(),
            events,
        })
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The Bearer token for authorized calls: the signed-in user's access
    /// token when present, otherwise the anon key.
    pub(crate) fn bearer(&self) -> Option<String> {
        if let Some(session) = self.current.load_full() {
            return Some(session.access_token.clone());
        }
        self.anon_key.clone()
    }

    /// Replaces the tracked session and publishes the corresponding event.
    ///
    /// Every auth-state mutation flows through here so that local state,
    /// the persisted file, and subscribers never observe different orders.
    pub(crate) fn replace_session(&self, session: Option<Session>, event: AuthEvent) {
        self.current.store(session.map(Arc::new));
        // No receivers is fine: events are advisory.
        let _ = self.events.send(event);
    }

    /// Checks the auth subsystem's health endpoint.
    pub async fn health_check(&self) -> Result<(), PawhavenError> {
        let url = format!("{}/auth/v1/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PawhavenError::Auth {
                message: format!("health check request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "health check response received");
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PawhavenError::Auth {
                message: crate::types::error_message(status, &body),
                source: None,
            })
        }
    }
}
