// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawhaven dashboard` command implementation.

use std::sync::Arc;

use pawhaven_app::{evaluate, GuardDecision, SessionStore};
use pawhaven_core::{AuthBackend, PawhavenError, RecordStore};
use pawhaven_supabase::SupabaseClient;

/// Run the `pawhaven dashboard` command: list the signed-in user's pets
/// together with their approval state.
pub async fn dashboard(client: Arc<SupabaseClient>) -> Result<(), PawhavenError> {
    let store = SessionStore::new(Arc::clone(&client) as Arc<dyn AuthBackend>);
    store.initialize().await;

    let user = match evaluate(&store) {
        GuardDecision::Allow(user) => user,
        GuardDecision::Redirect(_) | GuardDecision::Pending => {
            store.shutdown();
            return Err(PawhavenError::AuthRequired);
        }
    };

    let pets = client.list_pets(&user.id).await?;
    store.shutdown();

    if pets.is_empty() {
        println!("No pets registered yet.");
        return Ok(());
    }

    println!("Pets registered by {}:", user.email);
    for pet in &pets {
        let status = if pet.is_approved {
            "approved"
        } else {
            "pending approval"
        };
        let breed = pet.breed.as_deref().unwrap_or("unknown breed");
        let age = pet
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "unknown age".to_string());
        println!("  {} ({}, {}, {}) [{}]", pet.name, pet.species, breed, age, status);
        if !pet.photo_url.is_empty() {
            println!("    photo: {}", pet.photo_url);
        }
    }
    Ok(())
}
