use clap::Parser;
use dog_gallery::cli::Cli;
use dog_gallery::config::{Config, ConfigError};
use dog_gallery::store::OrderingPolicy;
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "https://api.thedogapi.com/v1");
    assert_eq!(config.api.page_size, 10);
    assert_eq!(config.store.ordering, OrderingPolicy::LatestDispatched);
    assert_eq!(config.ui.toast_duration_ms, 1000);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
page_size = 25
api_key = "live_abc"

[store]
ordering = "latest_settled"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.page_size, 25);
    assert_eq!(config.api.api_key.as_deref(), Some("live_abc"));
    assert_eq!(config.api.base_url, "https://api.thedogapi.com/v1");
    assert_eq!(config.store.ordering, OrderingPolicy::LatestSettled);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn unknown_ordering_is_parse_error() {
    let (_dir, path) = write_config("[store]\nordering = \"first_come\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn zero_page_size_fails_validation() {
    let (_dir, path) = write_config("[api]\npage_size = 0\n");
    let config = Config::load_from(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn non_http_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://dogs.example\"\n");
    let config = Config::load_from(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("http"));
}

#[test]
fn flag_overrides_invalid_file_value() {
    let (_dir, path) = write_config("[api]\npage_size = 0\n");
    let cli = Cli::try_parse_from(["dog-gallery", "--page-size", "5"]).unwrap();

    let mut config = Config::load_from(&path).unwrap();
    cli.apply_to(&mut config);

    assert!(config.validate().is_ok());
    assert_eq!(config.api.page_size, 5);
}

#[test]
fn file_value_survives_when_flag_absent() {
    let (_dir, path) = write_config("[api]\npage_size = 7\n");
    let cli = Cli::try_parse_from(["dog-gallery"]).unwrap();

    let mut config = Config::load_from(&path).unwrap();
    cli.apply_to(&mut config);

    assert_eq!(config.api.page_size, 7);
}

#[test]
fn directory_path_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
