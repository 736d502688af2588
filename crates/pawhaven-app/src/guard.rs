// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access guard for protected views.
//!
//! The guard is a pure decision over session-store state: while the store
//! is loading it yields [`GuardDecision::Pending`] rather than redirecting
//! prematurely; once loaded, no user means a redirect to the public entry
//! route and a present user means the protected content renders unchanged.

use pawhaven_core::AuthUser;

use crate::session::SessionStore;

/// The application's route surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard,
    RegisterPet,
}

impl Route {
    /// URL path for the route. Unmatched paths resolve to [`Route::Home`].
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::RegisterPet => "/register-pet",
        }
    }

    /// True for routes gated behind the access guard.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::RegisterPet)
    }
}

/// Outcome of evaluating the guard for a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session state is still loading: render nothing yet.
    Pending,
    /// No authenticated user: navigate to the public entry route.
    Redirect(Route),
    /// Authenticated: render the protected content unchanged.
    Allow(AuthUser),
}

/// Evaluates the guard against the current store state.
pub fn evaluate(store: &SessionStore) -> GuardDecision {
    decide(store.is_loading(), store.current_user())
}

/// The guard decision as a pure function of `(loading, user)`.
pub fn decide(loading: bool, user: Option<AuthUser>) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    match user {
        Some(user) => GuardDecision::Allow(user),
        None => GuardDecision::Redirect(Route::Home),
    }
}
