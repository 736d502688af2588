// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GoTrue implementation of the [`AuthBackend`] capability.
//!
//! Sessions are persisted to disk after every successful token exchange
//! and removed on sign-out. State changes publish an [`AuthEvent`] on the
//! client's broadcast channel; the session store is the intended consumer.

use async_trait::async_trait;
use pawhaven_core::{AuthBackend, AuthEvent, PawhavenError, Session};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::client::SupabaseClient;
use crate::persist;
use crate::types::{error_message, TokenResponse};

impl SupabaseClient {
    /// Posts to a GoTrue endpoint and parses a [`TokenResponse`].
    async fn auth_post(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        body: serde_json::Value,
    ) -> Result<TokenResponse, PawhavenError> {
        let url = format!("{}/auth/v1/{endpoint}", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(query)
            .json(&body)
            .send()
            .await
            .map_err(|e| PawhavenError::Auth {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(endpoint, status = %status, "auth response received");

        let body = response.text().await.map_err(|e| PawhavenError::Auth {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            return Err(PawhavenError::Auth {
                message: error_message(status, &body),
                source: None,
            });
        }

        serde_json::from_str(&body).map_err(|_| PawhavenError::Auth {
            message: "no session in auth response (email confirmation may be required)".into(),
            source: None,
        })
    }

    /// Exchanges a refresh token for a fresh session.
    async fn refresh(&self, refresh_token: &str) -> Result<Session, PawhavenError> {
        let response = self
            .auth_post(
                "token",
                &[("grant_type", "refresh_token")],
                serde_json::json!({ "refresh_token": refresh_token }),
            )
            .await?;
        Ok(response.into_session(chrono::Utc::now().timestamp()))
    }
}

#[async_trait]
impl AuthBackend for SupabaseClient {
    async fn current_session(&self) -> Result<Option<Session>, PawhavenError> {
        let Some(session) = persist::read_session(&self.session_file) else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        if !session.is_expired(now) {
            // Plain restore: no state change happened, so no event.
            self.current.store(Some(std::sync::Arc::new(session.clone())));
            debug!(user = %session.user.id, "restored persisted session");
            return Ok(Some(session));
        }

        debug!(user = %session.user.id, "persisted session expired, refreshing");
        match self.refresh(&session.refresh_token).await {
            Ok(fresh) => {
                persist::write_session(&self.session_file, &fresh)?;
                self.replace_session(Some(fresh.clone()), AuthEvent::TokenRefreshed(fresh.clone()));
                Ok(Some(fresh))
            }
            Err(e) => {
                // Restore failures mean signed-out, never a hard error.
                warn!(error = %e, "session refresh failed, treating as signed out");
                persist::remove_session(&self.session_file);
                Ok(None)
            }
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, PawhavenError> {
        let response = self
            .auth_post(
                "token",
                &[("grant_type", "password")],
                serde_json::json!({ "email": email, "password": password }),
            )
            .await?;

        let session = response.into_session(chrono::Utc::now().timestamp());
        persist::write_session(&self.session_file, &session)?;
        self.replace_session(Some(session.clone()), AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, PawhavenError> {
        let response = self
            .auth_post(
                "signup",
                &[],
                serde_json::json!({ "email": email, "password": password }),
            )
            .await?;

        let session = response.into_session(chrono::Utc::now().timestamp());
        persist::write_session(&self.session_file, &session)?;
        self.replace_session(Some(session.clone()), AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), PawhavenError> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| PawhavenError::Auth {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PawhavenError::Auth {
                message: error_message(status, &body),
                source: None,
            });
        }

        persist::remove_session(&self.session_file);
        self.replace_session(None, AuthEvent::SignedOut);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
