use layerkit_settings::{Config, SettingsError};
use std::fs;
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::default();
    config.canvas.width = 1080.0;
    config.canvas.height = 1350.0;
    config.canvas.background = "#0f172a".to_string();
    config.snap.snap_to_grid = true;
    config.snap.grid_size = 8.0;
    config.history.max_entries = 40;
    config
}

#[test]
fn test_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layerkit.json");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layerkit.toml");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[snap]"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.toml");
    fs::write(&path, "[history]\nmax_entries = 20\n").unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.history.max_entries, 20);
    assert_eq!(loaded.canvas.width, 800.0);
    assert_eq!(loaded.snap.guide_tolerance, 10.0);
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layerkit.yaml");

    let err = Config::default().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"{"snap": {"grid_size": 0}}"#).unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}

#[test]
fn test_invalid_config_not_saved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    let mut config = Config::default();
    config.history.max_entries = 0;

    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from_file(&temp_dir.path().join("none.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}
