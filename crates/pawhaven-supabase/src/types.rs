// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Supabase-compatible HTTP APIs.

use pawhaven_core::{AuthUser, Session, UserId};
use serde::Deserialize;

/// Response from the GoTrue token and signup endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: ApiUser,
}

impl TokenResponse {
    /// Converts the wire response into a [`Session`], resolving the
    /// relative expiry against `now` (unix seconds).
    pub fn into_session(self, now: i64) -> Session {
        Session {
            user: AuthUser {
                id: UserId(self.user.id),
                email: self.user.email.unwrap_or_default(),
            },
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: now + self.expires_in,
        }
    }
}

/// User object embedded in GoTrue responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub id: String,
    pub email: Option<String>,
}

/// Error body shapes used across the auth, storage, and REST APIs.
///
/// The three subsystems disagree on field names, so every known spelling
/// is optional and the first one present wins.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error_description: Option<String>,
    pub msg: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Extracts the most specific error message from a response body.
///
/// Falls back to the raw body with the status code when no known error
/// shape matches, so backend messages always surface verbatim.
pub fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(msg) = err
            .error_description
            .or(err.msg)
            .or(err.message)
            .or(err.error)
        {
            return msg;
        }
    }
    format!("API returned {status}: {body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_resolves_expiry_against_now() {
        let response: TokenResponse = serde_json::from_str(
            r#"{
                "access_token": "at",
                "refresh_token": "rt",
                "expires_in": 3600,
                "user": {"id": "u1", "email": "u1@example.com"}
            }"#,
        )
        .unwrap();

        let session = response.into_session(1_000);
        assert_eq!(session.expires_at, 4_600);
        assert_eq!(session.user.id.0, "u1");
        assert_eq!(session.user.email, "u1@example.com");
    }

    #[test]
    fn error_message_prefers_known_fields() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(status, r#"{"error_description": "bad creds"}"#),
            "bad creds"
        );
        assert_eq!(error_message(status, r#"{"msg": "no user"}"#), "no user");
        assert_eq!(
            error_message(status, r#"{"message": "bucket not found"}"#),
            "bucket not found"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        let msg = error_message(status, "gateway exploded");
        assert!(msg.contains("500"));
        assert!(msg.contains("gateway exploded"));
    }
}
