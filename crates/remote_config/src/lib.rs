//! Crate for fetching extended ("remote") release configuration.
//!
//! A configuration file can extend a fragment hosted in another GitHub
//! repository, named by a compact reference like
//! `github:my-org/release-presets#v1.2.3`. This crate parses the reference,
//! builds the raw-content URL, issues one HTTP request, and returns the
//! parsed fragment. Merging the fragment into the live options is the
//! caller's responsibility (`config_resolver::ConfigResolver::merge_remote_options`).
//!
//! One fetch is one awaited network call; there are no internal retries,
//! timeouts, or concurrent-fetch coordination. Cancellation belongs to the
//! caller.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

pub mod errors;
pub use errors::{Error, Result, CONFIGURATION_DOCS};

pub mod reference;
pub use reference::{RemoteReference, DEFAULT_REMOTE_FILE};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The raw-content host remote fragments are fetched from.
pub const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com";

/// A client for retrieving extended configuration fragments.
///
/// Wraps a [`reqwest::Client`]; cheap to construct and clone. The
/// raw-content host is fixed in production and overridable for tests.
///
/// # Examples
///
/// ```no_run
/// use remote_config::RemoteConfigClient;
///
/// # async fn example() -> remote_config::Result<()> {
/// let client = RemoteConfigClient::new();
/// let fragment = client.fetch("github:my-org/release-presets").await?;
/// println!("fetched {} top-level options", fragment.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RemoteConfigClient {
    http: Client,
    raw_host: String,
}

impl RemoteConfigClient {
    /// Creates a client against the production raw-content host.
    pub fn new() -> Self {
        Self::with_raw_host(RAW_CONTENT_HOST)
    }

    /// Creates a client against a custom raw-content host.
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_raw_host(raw_host: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            raw_host: raw_host.into(),
        }
    }

    /// Fetches and parses the fragment named by a compact reference.
    ///
    /// # Arguments
    ///
    /// * `reference` - A `github:<owner>/<repo>[:<file>][#<tag>]` string.
    ///
    /// # Returns
    ///
    /// The parsed configuration fragment. The fragment is not merged here;
    /// feed it to the resolver's remote merge.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReference`] when the reference does not match the
    ///   expected pattern.
    /// * [`Error::FetchFailed`] when the host answers with a non-success
    ///   status; the error carries the resolved URL and the status text.
    /// * [`Error::FragmentNotObject`] when the body is valid JSON but not a
    ///   mapping.
    /// * [`Error::Transport`] / [`Error::Deserialization`] for transport and
    ///   body-parse failures.
    pub async fn fetch(&self, reference: &str) -> Result<Map<String, Value>> {
        let reference = RemoteReference::parse(reference)?;
        let url = reference.raw_content_url(&self.raw_host)?;
        debug!(url = %url, "Fetching extended configuration");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchFailed {
                url: url.to_string(),
                status: format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let body = response.text().await?;
        let fragment: Value = serde_json::from_str(&body)?;
        match fragment {
            Value::Object(mapping) => Ok(mapping),
            _ => Err(Error::FragmentNotObject {
                url: url.to_string(),
            }),
        }
    }
}

impl Default for RemoteConfigClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches an extended configuration fragment with a one-off client.
///
/// Convenience wrapper over [`RemoteConfigClient::fetch`] for callers that
/// fetch at most once per run.
///
/// # Errors
///
/// Same conditions as [`RemoteConfigClient::fetch`].
pub async fn fetch_remote_config(reference: &str) -> Result<Map<String, Value>> {
    RemoteConfigClient::new().fetch(reference).await
}
