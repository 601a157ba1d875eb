//! Integration tests for config load/save.

use qa_menu_client::config::{self, DEFAULT_BASE_URL, DEFAULT_GREETING};
use qa_menu_client::{Config, ConfigError};
use predicates::prelude::*;

#[test]
fn load_existing_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        r#"
api:
  base_url: "https://qa.example.com"
chat:
  greeting: "Hi there."
"#,
    )
    .unwrap();

    let cfg = config::load(&config_path).expect("load should succeed");
    assert_eq!(cfg.api.base_url.as_deref(), Some("https://qa.example.com"));
    assert_eq!(cfg.base_url(), "https://qa.example.com");
    assert_eq!(cfg.greeting(), "Hi there.");
}

#[test]
fn empty_sections_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "api: {}\n").unwrap();

    let cfg = config::load(&config_path).expect("load should succeed");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    assert_eq!(cfg.greeting(), DEFAULT_GREETING);
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "api: [unclosed\n").unwrap();

    let err = config::load(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got {:?}", err);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let err = config::load_or_default(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn save_creates_directory_and_file_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("qa-menu");
    let config_path = config_dir.join("config.yaml");
    assert!(!config_dir.exists(), "config dir should not exist yet");

    let mut config = Config::default();
    config.api.base_url = Some("http://localhost:8000".into());

    config::save(&config_path, &config).expect("save should succeed");
    let pred = predicates::path::exists();
    assert!(pred.eval(&config_path), "config file should exist after save");

    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(predicates::str::contains("base_url").eval(&contents));
    // Unset options are not written.
    assert!(!predicates::str::contains("greeting").eval(&contents));

    let reloaded = config::load(&config_path).expect("reload should succeed");
    assert_eq!(reloaded, config);
}

/// Default path resolution and the missing-default fallback both read HOME,
/// so they share one test to avoid racing on the environment.
#[test]
fn default_config_path_uses_home_directory() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().to_str().unwrap().to_string();

    let key = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    let original = std::env::var(key).ok();

    std::env::set_var(key, &home);
    let path = config::default_config_path();
    let fallback = config::load_or_default(None);
    match original {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }

    let path = path.expect("should resolve a config path");
    assert_eq!(path, dir.path().join(".qa-menu").join("config.yaml"));
    assert_eq!(fallback.expect("missing default is not an error"), Config::default());
}
