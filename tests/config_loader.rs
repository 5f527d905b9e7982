use std::fs;

use clap::Parser;
use moviedeck::args::Args;
use moviedeck::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn default_values() {
    let config = Config::default();
    assert!(config.catalog.api_key.is_empty());
    assert_eq!(config.catalog.base_url, "https://api.themoviedb.org/3");
    assert_eq!(config.catalog.connect_timeout_seconds, 5);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("moviedeck/config.toml"));
}

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("load");
    assert!(config.catalog.api_key.is_empty());
}

#[test]
fn file_values_override_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[catalog]
api_key = "abc123"
connect_timeout_seconds = 9
"#,
    )
    .expect("write config");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.catalog.api_key, "abc123");
    assert_eq!(config.catalog.connect_timeout_seconds, 9);
    // Unset fields keep their defaults.
    assert_eq!(config.catalog.base_url, "https://api.themoviedb.org/3");
}

#[test]
fn unparseable_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "not = [valid").expect("write config");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn empty_base_url_fails_validation() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog]\nbase_url = \"\"\n").expect("write config");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn cli_overrides_replace_file_values() {
    let mut config = Config::default();
    config.catalog.api_key = "from-file".to_string();

    let args = Args::parse_from([
        "moviedeck",
        "--api-key",
        "from-cli",
        "--base-url",
        "http://localhost:9000",
    ]);
    args.apply(&mut config);

    assert_eq!(config.catalog.api_key, "from-cli");
    assert_eq!(config.catalog.base_url, "http://localhost:9000");
}

#[test]
fn absent_cli_flags_keep_file_values() {
    let mut config = Config::default();
    config.catalog.api_key = "from-file".to_string();

    let args = Args::parse_from(["moviedeck"]);
    args.apply(&mut config);

    assert_eq!(config.catalog.api_key, "from-file");
}
