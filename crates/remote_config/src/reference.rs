//! Compact remote configuration references.
//!
//! An extended configuration is named by a compact string of the form
//! `github:<owner>/<repo>[:<file>][#<tag>]`. The file defaults to
//! `.release-it.json`; an absent tag means the repository's default branch
//! (`HEAD`), a present tag names a specific tag ref.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

use crate::errors::{Error, Result};

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;

/// File fetched when the reference names none.
pub const DEFAULT_REMOTE_FILE: &str = ".release-it.json";

/// The reference grammar: owner, repo, optional `:file`, optional `#tag`.
const REFERENCE_PATTERN: &str = r"^github:([^/]+)/([^#:]+)(?::([^#]+))?(?:#(.+))?$";

fn reference_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(REFERENCE_PATTERN).expect("reference pattern must be a valid regex")
    })
}

/// A parsed remote configuration reference.
///
/// Parsed once per fetch call and discarded after the fragment is retrieved.
///
/// # Examples
///
/// ```rust
/// use remote_config::RemoteReference;
///
/// let reference = RemoteReference::parse("github:release-tools/presets:shared.json#v1.2.3")?;
///
/// assert_eq!(reference.owner, "release-tools");
/// assert_eq!(reference.repo, "presets");
/// assert_eq!(reference.file, "shared.json");
/// assert_eq!(reference.tag.as_deref(), Some("v1.2.3"));
/// assert_eq!(reference.git_ref(), "refs/tags/v1.2.3");
/// # Ok::<(), remote_config::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReference {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Path of the configuration file inside the repository.
    pub file: String,

    /// Tag to fetch from; `None` means the default branch.
    pub tag: Option<String>,
}

impl RemoteReference {
    /// Parses a compact reference string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] when the string does not match
    /// `github:<owner>/<repo>[:<file>][#<tag>]`.
    pub fn parse(reference: &str) -> Result<Self> {
        let captures =
            reference_regex()
                .captures(reference)
                .ok_or_else(|| Error::InvalidReference {
                    reference: reference.to_string(),
                })?;

        Ok(Self {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            file: captures
                .get(3)
                .map_or(DEFAULT_REMOTE_FILE, |file| file.as_str())
                .to_string(),
            tag: captures.get(4).map(|tag| tag.as_str().to_string()),
        })
    }

    /// The git ref the reference resolves to: a tag ref when a tag is named,
    /// the symbolic `HEAD` of the default branch otherwise.
    pub fn git_ref(&self) -> String {
        match &self.tag {
            Some(tag) => format!("refs/tags/{tag}"),
            None => "HEAD".to_string(),
        }
    }

    /// Builds the raw-content URL for this reference against `host`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the combined parts do not form a
    /// valid URL.
    pub fn raw_content_url(&self, host: &str) -> Result<Url> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            host.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.git_ref(),
            self.file
        );
        Ok(Url::parse(&url)?)
    }
}
