// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pet submission flow: upload the photo, then insert the record.
//!
//! This is a two-step saga with no rollback across steps. An upload
//! failure aborts the flow before any insert; an insert failure after a
//! successful upload leaves the photo orphaned in object storage, which is
//! a documented gap of the system, not a silent failure of the operation.
//!
//! Exactly one outcome is reported per invocation. Invocations are not
//! queued or deduplicated: two concurrent submissions run two independent
//! upload/insert pairs.

use std::sync::Arc;

use pawhaven_core::{
    ObjectStore, PawhavenError, PetDraft, PetRecord, PhotoAttachment, RecordStore, UserId,
};
use tracing::{debug, info};

/// Orchestrates pet profile submission against the backend capabilities.
pub struct RegistrationFlow {
    objects: Arc<dyn ObjectStore>,
    records: Arc<dyn RecordStore>,
    photo_bucket: String,
    max_photo_bytes: usize,
}

/// Successful submission summary for the caller's confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Public URL of the stored photo, or empty when none was submitted.
    pub photo_url: String,
    /// Storage key of the uploaded photo, when one was uploaded.
    pub photo_key: Option<String>,
}

impl RegistrationFlow {
    pub fn new(
        objects: Arc<dyn ObjectStore>,
        records: Arc<dyn RecordStore>,
        photo_bucket: impl Into<String>,
        max_photo_bytes: usize,
    ) -> Self {
        Self {
            objects,
            records,
            photo_bucket: photo_bucket.into(),
            max_photo_bytes,
        }
    }

    /// Submits one pet profile for the given user.
    ///
    /// Validates the draft and photo, uploads the photo if present, then
    /// inserts the record with `owner_id` forced to `owner` and
    /// `is_approved` forced to false. Each backend error is surfaced
    /// verbatim; nothing is retried.
    pub async fn submit(
        &self,
        owner: &UserId,
        draft: PetDraft,
        photo: Option<PhotoAttachment>,
    ) -> Result<SubmissionReceipt, PawhavenError> {
        draft.validate()?;
        if let Some(photo) = &photo {
            photo.validate(self.max_photo_bytes)?;
        }
        let species = draft
            .species
            .ok_or_else(|| PawhavenError::Validation("species is required".into()))?;

        // Step 1: upload, only when a photo was attached. Failure aborts
        // the whole flow before any record exists.
        let (photo_url, photo_key) = match photo {
            Some(photo) => {
                let key = format!(
                    "{owner}-{}.{}",
                    chrono::Utc::now().timestamp_millis(),
                    photo.extension()
                );
                debug!(bucket = %self.photo_bucket, key = %key, size = photo.bytes.len(), "uploading pet photo");
                self.objects
                    .upload(&self.photo_bucket, &key, photo.bytes, &photo.content_type)
                    .await?;
                (self.objects.public_url(&self.photo_bucket, &key), Some(key))
            }
            None => (String::new(), None),
        };

        // Step 2: insert. A failure here orphans the uploaded photo; there
        // is no compensating delete.
        let record = PetRecord {
            owner_id: owner.clone(),
            name: draft.name,
            species,
            breed: draft.breed,
            age: draft.age,
            care_notes: draft.care_notes,
            medical_notes: draft.medical_notes,
            photo_url: photo_url.clone(),
            // Moderation gate: every submission waits for an administrator.
            is_approved: false,
        };
        self.records.insert_pet(&record).await?;

        info!(owner = %owner, name = %record.name, "pet submitted for approval");
        Ok(SubmissionReceipt {
            photo_url,
            photo_key,
        })
    }
}
