//! Tests for loading settings from disk.

use std::io::Write;

use tictactoe_history::{Settings, SortOrder};

#[test]
fn test_load_without_path_uses_defaults() {
    let settings = Settings::load(None).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(*settings.sort(), SortOrder::Ascending);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sort = \"descending\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(*settings.sort(), SortOrder::Descending);
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(
        settings.log_file(),
        Settings::default().log_file()
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read settings file"));
}
