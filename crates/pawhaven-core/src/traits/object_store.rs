// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object storage capability trait for binary files (pet photos).

use async_trait::async_trait;

use crate::error::PawhavenError;

/// Capability contract for the backend's object storage.
///
/// Objects are addressed by bucket and key. Public URLs are derived
/// locally from the address, without a network round trip.
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Uploads the bytes to `bucket/key` with the given content type.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), PawhavenError>;

    /// Returns the public URL for an object address.
    fn public_url(&self, bucket: &str, key: &str) -> String;
}
