// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Pawhaven configuration system.

use pawhaven_config::diagnostic::{suggest_key, ConfigError};
use pawhaven_config::model::PawhavenConfig;
use pawhaven_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_pawhaven_config() {
    let toml = r#"
[backend]
url = "https://abc.supabase.co"
anon_key = "eyJ-test-key"

[storage]
photo_bucket = "photos"
max_photo_bytes = 1048576
session_file = "/tmp/session.json"

[registry]
pets_table = "adoptable_pets"

[app]
log_level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.backend.url, "https://abc.supabase.co");
    assert_eq!(config.backend.anon_key.as_deref(), Some("eyJ-test-key"));
    assert_eq!(config.storage.photo_bucket, "photos");
    assert_eq!(config.storage.max_photo_bytes, 1_048_576);
    assert_eq!(
        config.storage.session_file.as_deref(),
        Some("/tmp/session.json")
    );
    assert_eq!(config.registry.pets_table, "adoptable_pets");
    assert_eq!(config.app.log_level, "debug");
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.backend.url, "http://localhost:54321");
    assert!(config.backend.anon_key.is_none());
    assert_eq!(config.storage.photo_bucket, "pet-photos");
    assert_eq!(config.storage.max_photo_bytes, 2 * 1024 * 1024);
    assert!(config.storage.session_file.is_none());
    assert_eq!(config.registry.pets_table, "pets");
    assert_eq!(config.app.log_level, "info");
}

/// Unknown field in [backend] section is rejected by deny_unknown_fields.
#[test]
fn unknown_field_in_backend_produces_error() {
    let toml = r#"
[backend]
ano_key = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("ano_key"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[supabase]
url = "https://abc.supabase.co"
"#;

    let err =
        load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("supabase"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation override takes precedence over TOML values (the mechanism
/// behind PAWHAVEN_* env vars).
#[test]
fn override_takes_precedence_over_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[backend]
url = "https://from-toml.example"
"#;

    let config: PawhavenConfig = Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("backend.url", "https://from-env.example"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.backend.url, "https://from-env.example");
}

/// backend.anon_key maps as a single key, not backend.anon.key.
#[test]
fn anon_key_maps_as_single_key() {
    use figment::{providers::Serialized, Figment};

    let config: PawhavenConfig = Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(("backend.anon_key", "key-from-env"))
        .extract()
        .expect("should set anon_key via dot notation");

    assert_eq!(config.backend.anon_key.as_deref(), Some("key-from-env"));
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: PawhavenConfig = Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::file("/nonexistent/path/pawhaven.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.backend.url, "http://localhost:54321");
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[backend]
ano_key = "abc"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "ano_key"
                && suggestion.as_deref() == Some("anon_key")
                && valid_keys.contains("url")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'ano_key' with suggestion 'anon_key', got: {errors:?}"
    );
}

/// Invalid type (string where number expected) produces a clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[storage]
max_photo_bytes = "two megabytes"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("max_photo_bytes"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic with help text.
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "ano_key".to_string(),
        suggestion: Some("anon_key".to_string()),
        valid_keys: "url, anon_key".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some(), "should have diagnostic code");

    let help = error.help().expect("should have help text").to_string();
    assert!(
        help.contains("did you mean `anon_key`"),
        "help should contain suggestion, got: {help}"
    );
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::UnknownKey {
        key: "ano_key".to_string(),
        suggestion: Some("anon_key".to_string()),
        valid_keys: "url, anon_key".to_string(),
        span: None,
        src: None,
    };

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("ano_key"), "rendered report should mention the key");
}

/// Fuzzy suggestions work for the config's actual key set.
#[test]
fn diagnostic_suggestions_for_known_keys() {
    assert_eq!(
        suggest_key("pets_tabel", &["pets_table"]),
        Some("pets_table".to_string())
    );
    assert!(suggest_key("qqqq", &["pets_table"]).is_none());
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[backend]
url = "https://abc.supabase.co"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.backend.url, "https://abc.supabase.co");
}

/// Validation catches a zero photo limit through the high-level entry point.
#[test]
fn validation_catches_zero_photo_limit() {
    let toml = r#"
[storage]
max_photo_bytes = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero limit should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("max_photo_bytes"))
    });
    assert!(has_validation_error, "should have validation error for zero limit");
}
