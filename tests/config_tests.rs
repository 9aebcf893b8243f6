// Integration tests for configuration loading

mod common;

use edgecache::config::structs::configuration::Configuration;

#[test]
fn test_load_file_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    let config = Configuration::init();
    let serialized = toml::to_string(&config).unwrap();
    Configuration::save_file(path_str, serialized).unwrap();

    let loaded = Configuration::load_file(path_str).unwrap();
    assert_eq!(loaded.regions.len(), 2);
    assert_eq!(loaded.routing.default_region, "eu-central");
    assert_eq!(loaded.health.failure_threshold, 3);
}

#[test]
fn test_load_file_missing_is_io_error() {
    let result = Configuration::load_file("/nonexistent/config.toml");
    assert!(result.is_err());
}

#[test]
fn test_load_file_corrupt_is_parse_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    Configuration::save_file(path_str, String::from("not = [valid")).unwrap();
    let result = Configuration::load_file(path_str);
    assert!(result.is_err());
}

#[test]
fn test_load_from_file_creates_default_when_asked() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    // first call writes the default file and reports it
    assert!(Configuration::load_from_file(path_str, true).is_err());
    // second call loads the file it just wrote
    let loaded = Configuration::load_from_file(path_str, false).unwrap();
    assert_eq!(loaded.regions.len(), 2);
}
