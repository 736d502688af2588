// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend capability trait definitions.
//!
//! The backend-as-a-service is opaque to this client and is modeled as
//! three capability contracts, all using `#[async_trait]` for dynamic
//! dispatch compatibility.

pub mod auth;
pub mod object_store;
pub mod records;

// Re-export all traits at the traits module level for convenience.
pub use auth::AuthBackend;
pub use object_store::ObjectStore;
pub use records::RecordStore;
