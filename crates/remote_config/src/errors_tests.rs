//! Tests for remote configuration error types.

use super::*;

/// Verify the invalid-reference message echoes the reference and points at
/// the documentation.
#[test]
fn test_invalid_reference_message() {
    let error = Error::InvalidReference {
        reference: "github:oops".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("github:oops"), "message: {message}");
    assert!(message.contains(CONFIGURATION_DOCS), "message: {message}");
}

/// Verify the fetch-failure message carries the URL and status text.
#[test]
fn test_fetch_failed_message() {
    let error = Error::FetchFailed {
        url: "https://raw.githubusercontent.com/foo/bar/HEAD/.release-it.json".to_string(),
        status: "404 Not Found".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("/foo/bar/HEAD/.release-it.json"), "message: {message}");
    assert!(message.contains("404 Not Found"), "message: {message}");
}

/// Verify the non-mapping fragment message names the URL.
#[test]
fn test_fragment_not_object_message() {
    let error = Error::FragmentNotObject {
        url: "https://raw.githubusercontent.com/foo/bar/HEAD/.release-it.json".to_string(),
    };

    assert!(error.to_string().contains("is not a structured mapping"));
}
