// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across capability traits and the Pawhaven client.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::PawhavenError;

/// Upper bound for a pet's age in years, enforced at draft validation.
pub const MAX_PET_AGE: u8 = 30;

/// Unique identifier for a backend user, opaque to this client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated identity inside a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
}

/// An authenticated session issued by the backend.
///
/// The tokens are opaque; the client only inspects `expires_at` to decide
/// whether a restored session needs a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: AuthUser,
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as unix seconds.
    pub expires_at: i64,
}

impl Session {
    /// Returns true when the access token has expired relative to `now`
    /// (unix seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

/// Auth-state change events broadcast by the auth capability.
///
/// Each event carries the full replacement state: consumers store the
/// session it contains (or clear on [`AuthEvent::SignedOut`]) rather than
/// applying deltas.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

/// Species of a submitted pet, serialized lowercase for the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Other,
}

/// A client-side pet submission before any backend call.
///
/// System-assigned fields (`owner_id`, `photo_url`, `is_approved`) are
/// deliberately absent: they are set by the submission flow and cannot be
/// supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetDraft {
    pub name: String,
    pub species: Option<Species>,
    pub breed: Option<String>,
    /// Age in years, bounded by [`MAX_PET_AGE`]. Absent means unknown and
    /// persists as null.
    pub age: Option<u8>,
    pub care_notes: Option<String>,
    pub medical_notes: Option<String>,
}

impl PetDraft {
    /// Validates required fields: non-empty name, species selected, age in
    /// bounds. Optional text fields are accepted as-is.
    pub fn validate(&self) -> Result<(), PawhavenError> {
        if self.name.trim().is_empty() {
            return Err(PawhavenError::Validation("pet name is required".into()));
        }
        if self.species.is_none() {
            return Err(PawhavenError::Validation("species is required".into()));
        }
        if let Some(age) = self.age {
            if age > MAX_PET_AGE {
                return Err(PawhavenError::Validation(format!(
                    "age {age} exceeds maximum of {MAX_PET_AGE}"
                )));
            }
        }
        Ok(())
    }
}

/// A photo selected for upload, held in memory until the flow uploads it.
///
/// No independent entity survives the upload: only the resolved public URL
/// is retained on the persisted record.
#[derive(Debug, Clone)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoAttachment {
    /// Validates the client-enforced limits: `image/*` content type and a
    /// byte-size ceiling.
    pub fn validate(&self, max_bytes: usize) -> Result<(), PawhavenError> {
        if !self.content_type.starts_with("image/") {
            return Err(PawhavenError::Validation(format!(
                "photo must be an image, got content type {}",
                self.content_type
            )));
        }
        if self.bytes.len() > max_bytes {
            return Err(PawhavenError::Validation(format!(
                "photo is {} bytes, limit is {max_bytes}",
                self.bytes.len()
            )));
        }
        Ok(())
    }

    /// Extension of the original file name, used to derive the storage key.
    /// Falls back to `bin` for extension-less names.
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .unwrap_or("bin")
    }
}

/// The persisted pet row, shaped exactly as the backend table expects.
///
/// Absent optional fields serialize as JSON null, never as zero or the
/// empty string. `photo_url` is the empty string when no photo was
/// uploaded. `is_approved` is false at creation; nothing in this client
/// ever sets it true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    pub owner_id: UserId,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub age: Option<u8>,
    pub care_notes: Option<String>,
    pub medical_notes: Option<String>,
    pub photo_url: String,
    pub is_approved: bool,
}
