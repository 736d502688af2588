// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pawhaven pet-adoption registration client.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Pawhaven workspace. The backend
//! implementation crate implements the capability traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PawhavenError;
pub use types::{
    AuthEvent, AuthUser, PetDraft, PetRecord, PhotoAttachment, Session, Species, UserId,
};

// Re-export all capability traits at crate root.
pub use traits::{AuthBackend, ObjectStore, RecordStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawhaven_error_has_all_variants() {
        // Verify all 7 error variants exist and can be constructed.
        let _config = PawhavenError::Config("test".into());
        let _validation = PawhavenError::Validation("test".into());
        let _auth = PawhavenError::Auth {
            message: "test".into(),
            source: None,
        };
        let _upload = PawhavenError::Upload {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _insert = PawhavenError::Insert {
            message: "test".into(),
            source: None,
        };
        let _required = PawhavenError::AuthRequired;
        let _internal = PawhavenError::Internal("test".into());
    }

    #[test]
    fn error_messages_carry_backend_text_verbatim() {
        let err = PawhavenError::Upload {
            message: "bucket quota exceeded".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "upload error: bucket quota exceeded");

        let err = PawhavenError::Insert {
            message: "duplicate key".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "insert error: duplicate key");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // This test verifies that the three capability traits compile and
        // are accessible through the public API. If any module is missing
        // or has a compile error, this test won't compile.
        fn _assert_auth_backend<T: AuthBackend>() {}
        fn _assert_object_store<T: ObjectStore>() {}
        fn _assert_record_store<T: RecordStore>() {}
    }

    #[test]
    fn auth_event_is_broadcastable() {
        // AuthEvent must be Clone to fan out over a broadcast channel.
        let (tx, mut rx1) = tokio::sync::broadcast::channel::<AuthEvent>(4);
        let mut rx2 = tx.subscribe();
        tx.send(AuthEvent::SignedOut).unwrap();
        assert!(matches!(rx1.try_recv().unwrap(), AuthEvent::SignedOut));
        assert!(matches!(rx2.try_recv().unwrap(), AuthEvent::SignedOut));
    }
}
