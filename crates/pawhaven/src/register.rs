// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawhaven register-pet` command implementation.

use std::path::Path;
use std::sync::Arc;

use pawhaven_app::{evaluate, GuardDecision, RegistrationFlow, SessionStore};
use pawhaven_config::PawhavenConfig;
use pawhaven_core::{
    AuthBackend, ObjectStore, PawhavenError, PetDraft, PhotoAttachment, RecordStore,
};
use pawhaven_supabase::SupabaseClient;

/// Run the `pawhaven register-pet` command.
///
/// Requires a signed-in session; the access guard decides, exactly as it
/// would for the protected registration view.
pub async fn register_pet(
    client: Arc<SupabaseClient>,
    config: &PawhavenConfig,
    draft: PetDraft,
    photo_path: Option<&Path>,
) -> Result<(), PawhavenError> {
    let store = SessionStore::new(Arc::clone(&client) as Arc<dyn AuthBackend>);
    store.initialize().await;

    let user = match evaluate(&store) {
        GuardDecision::Allow(user) => user,
        GuardDecision::Redirect(_) | GuardDecision::Pending => {
            store.shutdown();
            return Err(PawhavenError::AuthRequired);
        }
    };

    let photo = photo_path.map(read_photo).transpose()?;

    let flow = RegistrationFlow::new(
        Arc::clone(&client) as Arc<dyn ObjectStore>,
        Arc::clone(&client) as Arc<dyn RecordStore>,
        config.storage.photo_bucket.clone(),
        config.storage.max_photo_bytes,
    );

    let receipt = flow.submit(&user.id, draft, photo).await?;
    store.shutdown();

    println!("Pet submitted; an administrator will review your request.");
    if !receipt.photo_url.is_empty() {
        println!("Photo: {}", receipt.photo_url);
    }
    Ok(())
}

/// Reads a photo from disk, deriving the content type from the extension.
fn read_photo(path: &Path) -> Result<PhotoAttachment, PawhavenError> {
    let bytes = std::fs::read(path).map_err(|e| {
        PawhavenError::Validation(format!("cannot read photo {}: {e}", path.display()))
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());

    Ok(PhotoAttachment {
        content_type: content_type_for(&file_name).to_string(),
        file_name,
        bytes,
    })
}

/// MIME type by file extension. Unknown extensions fall through to a
/// non-image type and fail photo validation with a clear message.
fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
