// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record storage capability trait for the pets table.

use async_trait::async_trait;

use crate::error::PawhavenError;
use crate::types::{PetRecord, UserId};

/// Capability contract for the backend's relational storage.
///
/// The backend assigns nothing beyond a row id: every field the client
/// cares about is part of the inserted record.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Inserts one pet row as a single atomic creation call.
    async fn insert_pet(&self, record: &PetRecord) -> Result<(), PawhavenError>;

    /// Lists all pet rows owned by the given user, unpaginated.
    async fn list_pets(&self, owner: &UserId) -> Result<Vec<PetRecord>, PawhavenError>;
}
