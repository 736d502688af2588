// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object-storage implementation of the [`ObjectStore`] capability.

use async_trait::async_trait;
use pawhaven_core::{ObjectStore, PawhavenError};
use tracing::debug;

use crate::client::SupabaseClient;
use crate::types::error_message;

#[async_trait]
impl ObjectStore for SupabaseClient {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), PawhavenError> {
        let url = format!("{}/storage/v1/object/{bucket}/{key}", self.base_url);
        let size = bytes.len();

        let mut request = self
            .http
            .post(&url)
            .header("content-type", content_type.to_string())
            .body(bytes);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| PawhavenError::Upload {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(bucket, key, size, status = %status, "upload response received");

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PawhavenError::Upload {
            message: error_message(status, &body),
            source: None,
        })
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{key}", self.base_url)
    }
}
