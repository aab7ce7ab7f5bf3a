use dsviz::config::{ConfigError, DsvizConfig};
use dsviz::structures::TraversalStrategy;
use dsviz::Session;
use std::fs;
use tempfile::TempDir;

// Every environment variable is exercised in this single test, alone in its
// own binary, so no other test observes the overrides.
#[test]
fn test_env_overrides_when_loading() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("env.toml");
    fs::write(&path, "[tree]\nmax_snapshot_height = 5\n").unwrap();

    std::env::set_var("DSVIZ_LOG_LEVEL", "trace");
    std::env::set_var("DSVIZ_LOG_ANSI", "false");
    std::env::set_var("DSVIZ_TREE_TRAVERSAL", "Iterative");
    std::env::set_var("DSVIZ_TREE_MAX_SNAPSHOT_HEIGHT", "not-a-number");

    let config = DsvizConfig::load_from_file(&path).unwrap();
    assert_eq!(config.logging.level, "trace");
    assert!(!config.logging.ansi);
    assert_eq!(config.tree.traversal, TraversalStrategy::Iterative);
    // unparsable override is ignored
    assert_eq!(config.tree.max_snapshot_height, 5);

    // an override that parses but is out of range fails validation
    std::env::set_var("DSVIZ_TREE_MAX_SNAPSHOT_HEIGHT", "99");
    let err = DsvizConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    for key in [
        "DSVIZ_LOG_LEVEL",
        "DSVIZ_LOG_ANSI",
        "DSVIZ_TREE_TRAVERSAL",
        "DSVIZ_TREE_MAX_SNAPSHOT_HEIGHT",
    ] {
        std::env::remove_var(key);
    }

    let session: Session<u8> = Session::new(config);
    assert_eq!(session.tree().strategy(), TraversalStrategy::Iterative);
}
