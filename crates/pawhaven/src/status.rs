// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawhaven status` command implementation.

use std::sync::Arc;

use pawhaven_config::PawhavenConfig;
use pawhaven_core::{AuthBackend, PawhavenError};
use pawhaven_supabase::SupabaseClient;

/// Run the `pawhaven status` command: show the configured backend, whether
/// it is reachable, and whether a persisted session restores to a user.
pub async fn status(
    client: Arc<SupabaseClient>,
    config: &PawhavenConfig,
) -> Result<(), PawhavenError> {
    println!("Backend:      {}", config.backend.url);
    println!("Photo bucket: {}", config.storage.photo_bucket);
    println!("Pets table:   {}", config.registry.pets_table);

    match client.health_check().await {
        Ok(()) => println!("Auth service: reachable"),
        Err(e) => println!("Auth service: unreachable ({e})"),
    }

    match client.current_session().await? {
        Some(session) => {
            println!("Session:      signed in as {}", session.user.email);
        }
        None => println!("Session:      signed out"),
    }
    Ok(())
}
