use mortal_config::{resolve_config_path, Config, ConfigError, CONFIG_ENV};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_from_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[control]\nversion = 4\n").unwrap();

    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.path(), path);
    assert_eq!(config.get_i64("control.version"), Some(4));
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Config::from_path(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "version = = 4\n").unwrap();

    let err = Config::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_empty_override_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.toml"), "[control]\nversion = 4\n").unwrap();

    let path = resolve_config_path(Some(""), temp_dir.path());
    assert!(matches!(Config::from_path(path), Err(ConfigError::Read { .. })));
}

// Only test in this binary that touches the environment.
#[test]
fn test_load_follows_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("override.toml");
    fs::write(&path, "[dataset]\nenable_augmentation = false\n").unwrap();

    std::env::set_var(CONFIG_ENV, &path);
    let config = Config::load().unwrap();
    assert_eq!(config.get_bool("dataset.enable_augmentation"), Some(false));

    std::env::set_var(CONFIG_ENV, temp_dir.path().join("nonexistent.toml"));
    assert!(matches!(Config::load(), Err(ConfigError::Read { .. })));

    std::env::remove_var(CONFIG_ENV);
}
