//! Integration tests for configuration loading and the warning registry.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use weft_common::config::{Config, ConfigError, load};
use weft_common::warning::{clear_warnings, warn_once, was_warned};

fn temp_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{nanos}.json"))
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.options.attributify_pseudo);
    assert!(config.theme.transform_rules.is_empty());
}

#[test]
fn test_reads_options_and_theme() {
    let config = Config::from_json_str(
        r#"{
            "attributifyPseudo": true,
            "theme": { "transformRules": { ":": "-c-" } }
        }"#,
    )
    .unwrap();
    assert!(config.options.attributify_pseudo);
    assert_eq!(config.theme.transform_rules.restore("hover-c-x"), "hover:x");
}

#[test]
fn test_transform_rules_keep_document_order() {
    // "-c" is a prefix of "-c-"; the rule declared first must be restored
    // first even though ":" sorts after "!".
    let config = Config::from_json_str(
        r#"{ "theme": { "transformRules": { ":": "-c-", "!": "-c" } } }"#,
    )
    .unwrap();
    let rules = &config.theme.transform_rules;
    assert_eq!(rules.restore("hover-c-y"), "hover:y");
    assert_eq!(rules.restore("hover-cy"), "hover!y");

    let reversed = Config::from_json_str(
        r#"{ "theme": { "transformRules": { "!": "-c", ":": "-c-" } } }"#,
    )
    .unwrap();
    assert_eq!(reversed.theme.transform_rules.restore("hover-c-y"), "hover!-y");
}

#[test]
fn test_wrong_field_type_is_invalid() {
    let err = Config::from_json_str(r#"{ "attributifyPseudo": "yes" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_load_from_file() {
    let path = temp_path("weft_config");
    fs::write(&path, r#"{ "attributifyPseudo": true }"#).unwrap();
    let config = load(&path).unwrap();
    assert!(config.options.attributify_pseudo);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_missing_file_reports_path() {
    let path = temp_path("weft_config_missing");
    let err = load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn test_load_malformed_file() {
    let path = temp_path("weft_config_malformed");
    fs::write(&path, "{ not json").unwrap();
    let err = load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    let _ = fs::remove_file(&path);
}

#[test]
fn test_warning_prints_once_until_cleared() {
    let message = "config test notice";
    assert!(warn_once("Config", message));
    assert!(was_warned("Config", message));
    assert!(!warn_once("Config", message));

    clear_warnings();
    assert!(!was_warned("Config", message));
    assert!(warn_once("Config", message));
}
