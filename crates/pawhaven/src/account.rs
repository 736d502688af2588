// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawhaven login`, `signup`, and `logout` command implementations.

use std::sync::Arc;

use pawhaven_app::SessionStore;
use pawhaven_core::{AuthBackend, PawhavenError};
use pawhaven_supabase::SupabaseClient;

/// Run the `pawhaven login` command.
pub async fn login(
    client: Arc<SupabaseClient>,
    email: &str,
    password: &str,
) -> Result<(), PawhavenError> {
    let session = client.sign_in(email, password).await?;
    println!("Signed in as {} ({})", session.user.email, session.user.id);
    Ok(())
}

/// Run the `pawhaven signup` command.
pub async fn signup(
    client: Arc<SupabaseClient>,
    email: &str,
    password: &str,
) -> Result<(), PawhavenError> {
    let session = client.sign_up(email, password).await?;
    println!(
        "Account created; signed in as {} ({})",
        session.user.email, session.user.id
    );
    Ok(())
}

/// Run the `pawhaven logout` command.
///
/// Goes through the session store so sign-out follows the same
/// delegate-then-observe path the rest of the application uses.
pub async fn logout(client: Arc<SupabaseClient>) -> Result<(), PawhavenError> {
    let store = SessionStore::new(client as Arc<dyn AuthBackend>);
    store.initialize().await;

    if store.current_user().is_none() {
        println!("Not signed in.");
        return Ok(());
    }

    store.sign_out().await?;
    store.shutdown();
    println!("Signed out.");
    Ok(())
}
