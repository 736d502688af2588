// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PostgREST implementation of the [`RecordStore`] capability.

use async_trait::async_trait;
use pawhaven_core::{PawhavenError, PetRecord, RecordStore, UserId};
use tracing::debug;

use crate::client::SupabaseClient;
use crate::types::error_message;

#[async_trait]
impl RecordStore for SupabaseClient {
    async fn insert_pet(&self, record: &PetRecord) -> Result<(), PawhavenError> {
        let url = format!("{}/rest/v1/{}", self.base_url, self.pets_table);

        // PostgREST takes an array of rows; we always insert exactly one.
        let mut request = self
            .http
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(&[record]);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| PawhavenError::Insert {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(table = %self.pets_table, owner = %record.owner_id, status = %status, "insert response received");

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PawhavenError::Insert {
            message: error_message(status, &body),
            source: None,
        })
    }

    async fn list_pets(&self, owner: &UserId) -> Result<Vec<PetRecord>, PawhavenError> {
        let url = format!("{}/rest/v1/{}", self.base_url, self.pets_table);

        let mut request = self
            .http
            .get(&url)
            .query(&[("owner_id", format!("eq.{owner}")), ("select", "*".into())]);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| PawhavenError::Insert {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PawhavenError::Insert {
                message: error_message(status, &body),
                source: None,
            });
        }

        response.json().await.map_err(|e| PawhavenError::Insert {
            message: format!("failed to parse pet rows: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawhaven_core::Species;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str, dir: &tempfile::TempDir) -> SupabaseClient {
        SupabaseClient::from_parts(
            base_url,
            Some("anon-test-key".into()),
            "pets",
            dir.path().join("session.json"),
        )
        .unwrap()
    }

    fn rex_record() -> PetRecord {
        PetRecord {
            owner_id: UserId("u1".into()),
            name: "Rex".into(),
            species: Species::Dog,
            breed: None,
            age: Some(3),
            care_notes: None,
            medical_notes: None,
            photo_url: String::new(),
            is_approved: false,
        }
    }

    #[tokio::test]
    async fn insert_sends_single_row_array() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("POST"))
            .and(path("/rest/v1/pets"))
            .and(header("Prefer", "return=minimal"))
            .and(body_json(serde_json::json!([{
                "owner_id": "u1",
                "name": "Rex",
                "species": "dog",
                "breed": null,
                "age": 3,
                "care_notes": null,
                "medical_notes": null,
                "photo_url": "",
                "is_approved": false
            }])))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), &dir);
        client.insert_pet(&rex_record()).await.unwrap();
    }

    #[tokio::test]
    async fn insert_surfaces_postgrest_error_verbatim() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("POST"))
            .and(path("/rest/v1/pets"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "code": "42501",
                "message": "new row violates row-level security policy"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), &dir);
        let err = client.insert_pet(&rex_record()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "insert error: new row violates row-level security policy"
        );
    }

    #[tokio::test]
    async fn list_filters_by_owner() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/rest/v1/pets"))
            .and(query_param("owner_id", "eq.u1"))
            .and(query_param("select", "*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 7,
                    "created_at": "2026-08-01T00:00:00Z",
                    "owner_id": "u1",
                    "name": "Rex",
                    "species": "dog",
                    "breed": null,
                    "age": 3,
                    "care_notes": null,
                    "medical_notes": null,
                    "photo_url": "",
                    "is_approved": false
                }
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), &dir);
        let pets = client.list_pets(&UserId("u1".into())).await.unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].name, "Rex");
        assert!(!pets[0].is_approved);
    }

    #[tokio::test]
    async fn list_returns_empty_for_new_user() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/rest/v1/pets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), &dir);
        let pets = client.list_pets(&UserId("u2".into())).await.unwrap();
        assert!(pets.is_empty());
    }
}
