use relgraph_core::config::{AppConfig, SettingsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_loads_default_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[data]\nfile_path = \"data/graph.json\"\n",
    )
    .unwrap();

    let config = AppConfig::from_sources(dir.path(), "development").unwrap();
    assert_eq!(config.data.file_path, "data/graph.json");
}

#[test]
fn test_run_mode_file_overrides_default() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[data]\nfile_path = \"data/graph.json\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("staging.toml"),
        "[data]\nfile_path = \"/srv/relations.json\"\n",
    )
    .unwrap();

    let config = AppConfig::from_sources(dir.path(), "staging").unwrap();
    assert_eq!(config.data.file_path, "/srv/relations.json");
}

#[test]
fn test_empty_data_path_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("default.toml"), "[data]\nfile_path = \"  \"\n").unwrap();

    let result = AppConfig::from_sources(dir.path(), "development");
    assert!(matches!(result, Err(SettingsError::EmptyDataPath)));
}

#[test]
fn test_missing_default_file_fails() {
    let dir = tempdir().unwrap();
    let result = AppConfig::from_sources(dir.path(), "development");
    assert!(matches!(result, Err(SettingsError::Load(_))));
}
