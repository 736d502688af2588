// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reactive session store: the single source of truth for "who is
//! logged in".
//!
//! The store is populated two ways:
//! - **Initialize**: one async fetch of the persisted session at startup.
//!   While it runs the store reports a loading state, and consumers must
//!   not treat protected content as renderable.
//! - **Event pump**: a background task consuming the auth backend's
//!   [`AuthEvent`] stream. Every event replaces or clears the stored
//!   session; no other code path mutates it.
//!
//! Sign-out deliberately does not clear local state: the backend's
//! `SignedOut` event does. There is a brief window where the local session
//! is stale; callers observe it only as a slightly delayed UI update.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwapOption;
use pawhaven_core::{AuthBackend, AuthEvent, AuthUser, PawhavenError, Session};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Capacity of the store's re-broadcast channel.
const STORE_EVENT_CAPACITY: usize = 16;

/// Observable holder of the current session.
///
/// Cheap to share: clone the surrounding `Arc`. All state lives behind
/// lock-free cells except the pump handle, which is touched only on
/// initialize and shutdown.
pub struct SessionStore {
    auth: Arc<dyn AuthBackend>,
    current: Arc<ArcSwapOption<Session>>,
    loading: AtomicBool,
    events: broadcast::Sender<AuthEvent>,
    pump: Mutex<Option<JoinHandle<()>>>,
}

impl SessionStore {
    /// Creates a store in the loading state. Call [`initialize`] before
    /// consulting it.
    ///
    /// [`initialize`]: SessionStore::initialize
    pub fn new(auth: Arc<dyn AuthBackend>) -> Self {
        let (events, _) = broadcast::channel(STORE_EVENT_CAPACITY);
        Self {
            auth,
            current: Arc::new(ArcSwapOption::empty()),
            loading: AtomicBool::new(true),
            events,
            pump: Mutex::new(None),
        }
    }

    /// Restores the persisted session and starts the event pump.
    ///
    /// The pump subscribes before the restore fetch so no event emitted
    /// during the fetch is lost. A restore failure is treated as
    /// signed-out, not propagated: the store always leaves loading.
    pub async fn initialize(&self) {
        let rx = self.auth.subscribe();
        let handle = tokio::spawn(pump_events(rx, Arc::clone(&self.current), self.events.clone()));
        {
            let mut pump = self.pump.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(old) = pump.replace(handle) {
                old.abort();
            }
        }

        match self.auth.current_session().await {
            Ok(Some(session)) => {
                debug!(user = %session.user.id, "session restored");
                self.current.store(Some(Arc::new(session)));
            }
            Ok(None) => {
                debug!("no persisted session");
                self.current.store(None);
            }
            Err(e) => {
                warn!(error = %e, "session restore failed, treating as signed out");
                self.current.store(None);
            }
        }

        self.loading.store(false, Ordering::Release);
    }

    /// True until [`initialize`] has resolved, in success or failure.
    ///
    /// [`initialize`]: SessionStore::initialize
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.current.load_full().map(|s| s.user.clone())
    }

    /// The full current session, if any.
    pub fn session(&self) -> Option<Arc<Session>> {
        self.current.load_full()
    }

    /// Registers for the store's auth-change stream. Dropping the
    /// receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Signs the current user out on the backend.
    ///
    /// Local state is not cleared here; the `SignedOut` event delivered
    /// through the pump clears it.
    pub async fn sign_out(&self) -> Result<(), PawhavenError> {
        let session = self.session().ok_or(PawhavenError::AuthRequired)?;
        self.auth.sign_out(&session.access_token).await
    }

    /// Stops the event pump. Idempotent; safe to call without initialize.
    pub fn shutdown(&self) {
        let mut pump = self.pump.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pump.take() {
            handle.abort();
            debug!("session event pump stopped");
        }
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Applies each auth event to the shared cell, then re-broadcasts it to
/// store subscribers.
async fn pump_events(
    mut rx: broadcast::Receiver<AuthEvent>,
    current: Arc<ArcSwapOption<Session>>,
    events: broadcast::Sender<AuthEvent>,
) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                match &event {
                    AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => {
                        current.store(Some(Arc::new(session.clone())));
                    }
                    AuthEvent::SignedOut => {
                        current.store(None);
                    }
                }
                let _ = events.send(event);
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                // Each event carries full state, so only the latest matters.
                warn!(missed, "auth event pump lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
