//! Tests for configuration resolution error types.

use super::*;

/// Verify the malformed-config message names the offending source path.
#[test]
fn test_malformed_config_names_path() {
    let error = ConfigError::MalformedConfig {
        path: PathBuf::from("/work/.release-it.json"),
    };

    assert_eq!(
        error.to_string(),
        "Invalid configuration file at /work/.release-it.json"
    );
}

/// Verify the parse error carries the path and the parser's reason.
#[test]
fn test_parse_error_carries_reason() {
    let error = ConfigError::Parse {
        path: PathBuf::from(".release-it.toml"),
        reason: "expected `=`".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains(".release-it.toml"), "message: {message}");
    assert!(message.contains("expected `=`"), "message: {message}");
}

/// Verify the read error keeps the underlying I/O error as its source.
#[test]
fn test_file_read_error_preserves_source() {
    use std::error::Error as _;

    let error = ConfigError::FileRead {
        path: PathBuf::from("missing.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };

    assert!(error.source().is_some(), "I/O cause must be preserved");
    assert!(error.to_string().contains("missing.json"));
}

/// Verify the unsupported-format message names the file.
#[test]
fn test_unsupported_format_names_path() {
    let error = ConfigError::UnsupportedFormat {
        path: PathBuf::from("release.ini"),
    };

    assert_eq!(error.to_string(), "Unsupported configuration format: release.ini");
}
