// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication capability trait.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::error::PawhavenError;
use crate::types::{AuthEvent, Session};

/// Capability contract for the backend's authentication subsystem.
///
/// Implementations own session persistence and publish an [`AuthEvent`] on
/// every state change (sign-in, sign-up, token refresh, sign-out), which is
/// the only channel through which the session store mutates its state.
#[async_trait]
pub trait AuthBackend: Send + Sync + 'static {
    /// Restores the persisted session, refreshing it if expired.
    ///
    /// Returns `Ok(None)` when no session is persisted.
    async fn current_session(&self) -> Result<Option<Session>, PawhavenError>;

    /// Authenticates with email and password, persisting the new session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, PawhavenError>;

    /// Creates an account and signs it in, persisting the new session.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, PawhavenError>;

    /// Revokes the session on the backend and removes the persisted copy.
    ///
    /// Does not touch any consumer state directly: the published
    /// [`AuthEvent::SignedOut`] does that.
    async fn sign_out(&self, access_token: &str) -> Result<(), PawhavenError>;

    /// Registers for the auth-state change stream.
    ///
    /// Dropping the receiver unsubscribes.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
