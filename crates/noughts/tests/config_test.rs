//! Tests for loading the TOML configuration.

use noughts::AppConfig;
use std::io::Write;
use std::path::PathBuf;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
cell_width = 7
cell_height = 5
show_cell_numbers = false
log_file = "/tmp/noughts-test.log"
log_filter = "debug"
"#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.cell_width(), 7);
    assert_eq!(*config.cell_height(), 5);
    assert!(!config.show_cell_numbers());
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/noughts-test.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("cell_width = 11\n");
    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.cell_width(), 11);
    assert_eq!(*config.cell_height(), 3);
    assert!(*config.show_cell_numbers());
}

#[test]
fn test_out_of_range_cell_size_is_rejected() {
    let file = write_config("cell_height = 0\n");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("cell_height"));
}

#[test]
fn test_invalid_toml_is_rejected() {
    let file = write_config("cell_width = \"wide\"\n");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_rejected() {
    let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_load_without_path_gives_defaults() {
    assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
}
