// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pawhaven client.

use thiserror::Error;

/// The primary error type used across all Pawhaven capability traits and
/// core operations.
///
/// Backend messages are carried verbatim in the `message` fields: the flow
/// layer never translates, classifies, or retries them.
#[derive(Debug, Error)]
pub enum PawhavenError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Client-side draft or photo validation failed before any backend call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Authentication backend errors (sign-in rejected, session restore, network).
    #[error("auth error: {message}")]
    Auth {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Object storage rejected the photo upload or the request failed.
    #[error("upload error: {message}")]
    Upload {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Record storage rejected the row insertion or the request failed.
    #[error("insert error: {message}")]
    Insert {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An operation that requires an authenticated user was invoked without one.
    #[error("no authenticated user")]
    AuthRequired,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
