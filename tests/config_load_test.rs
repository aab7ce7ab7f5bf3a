use dsviz::config::{ConfigError, DsvizConfig};
use dsviz::structures::TraversalStrategy;
use std::fs;
use tempfile::TempDir;

// No test in this binary touches `DSVIZ_*`; the overrides live in
// config_env_test.rs so loading here sees only the file.
#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dsviz.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"
ansi = false

[tree]
traversal = "iterative"
max_snapshot_height = 8
"#,
    )
    .unwrap();

    let config = DsvizConfig::load_from_file(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.ansi);
    assert!(!config.logging.with_target);
    assert_eq!(config.tree.traversal, TraversalStrategy::Iterative);
    assert_eq!(config.tree.max_snapshot_height, 8);
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");

    let mut config = DsvizConfig::default();
    config.tree.max_snapshot_height = 9;
    config.logging.with_target = true;
    config.save_to_file(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("max_snapshot_height = 9"));

    let reloaded = DsvizConfig::from_toml_str(&text).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = DsvizConfig::load_from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "[tree]\ntraversal = \"sideways\"\n").unwrap();
    let err = DsvizConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::TomlParse(_)));
}
