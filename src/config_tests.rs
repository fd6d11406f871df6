use super::{load_settings, Settings};
use crate::sort::SortMode;
use std::fs;
use tempfile::TempDir;

fn write_settings(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).expect("write settings file");
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("does_not_exist.json");

    let settings = load_settings(Some(&path)).expect("defaults for missing file");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.sort, SortMode::Input);
    assert!(settings.confirm_clear);
}

#[test]
fn fields_are_individually_optional() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_settings(&dir, r#"{ "sort": "packed" }"#);

    let settings = load_settings(Some(&path)).expect("partial settings");
    assert_eq!(settings.sort, SortMode::Packed);
    assert!(settings.confirm_clear);

    let path = write_settings(&dir, r#"{ "confirm_clear": false }"#);
    let settings = load_settings(Some(&path)).expect("partial settings");
    assert_eq!(settings.sort, SortMode::Input);
    assert!(!settings.confirm_clear);
}

#[test]
fn unknown_sort_mode_degrades_to_input() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_settings(&dir, r#"{ "sort": "alphabetical" }"#);

    let settings = load_settings(Some(&path)).expect("degrading parse");
    assert_eq!(settings.sort, SortMode::Input);
}

#[test]
fn malformed_json_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_settings(&dir, "{ not json");

    let err = load_settings(Some(&path)).expect_err("malformed settings");
    assert!(err.to_string().contains("parse settings JSON"));
}
