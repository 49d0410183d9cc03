//! Error types for remote configuration fetching.
//!
//! Every failure propagates to the caller; there are no internal retries and
//! no silent fallback to an empty fragment. Reference and fetch errors carry
//! a pointer to the configuration documentation so users can fix the
//! extended-configuration string they wrote.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Where the extended-configuration syntax is documented.
pub const CONFIGURATION_DOCS: &str =
    "https://github.com/pvandervelde/release-it-rs/blob/main/docs/configuration.md";

/// Errors that can occur while fetching remote configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The compact reference string does not match
    /// `github:<owner>/<repo>[:<file>][#<tag>]`.
    #[error("Invalid extended configuration from GitHub: {reference} (see https://github.com/pvandervelde/release-it-rs/blob/main/docs/configuration.md)")]
    InvalidReference { reference: String },

    /// The raw-content host answered with a non-success status.
    #[error("Failed to fetch {url}: {status} (see https://github.com/pvandervelde/release-it-rs/blob/main/docs/configuration.md)")]
    FetchFailed { url: String, status: String },

    /// The response body was valid JSON but not a configuration mapping.
    #[error("Remote configuration at {url} is not a structured mapping")]
    FragmentNotObject { url: String },

    /// The resolved owner/repo/ref/file parts do not form a valid URL.
    #[error("Failed to build raw content URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The network transport failed before a response arrived.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("Failed to deserialize remote configuration: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Result type alias for remote configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
