//! Local configuration source loader.
//!
//! Locates and parses at most one local configuration source. Candidates are
//! probed in a fixed order inside the search directory and the first
//! existing, matching file wins. "No local config" is a valid, silent
//! outcome; a config that exists but is malformed is fatal.
//!
//! Supported formats are JSON, YAML, and TOML, dispatched by file extension,
//! plus the `release-it` member of a `package.json` manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{ConfigError, ConfigResult};

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;

/// Candidate file names probed, in order, when no explicit path is given.
///
/// `package.json` contributes only its `release-it` member; a manifest
/// without that member is skipped and the search continues.
pub const SEARCH_PLACES: [&str; 5] = [
    "package.json",
    ".release-it.json",
    ".release-it.yaml",
    ".release-it.yml",
    ".release-it.toml",
];

/// The manifest member that may hold embedded configuration.
const MANIFEST_MEMBER: &str = "release-it";

/// How the local configuration source should be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalConfigFile {
    /// Probe [`SEARCH_PLACES`] in the search directory.
    Discover,

    /// Skip local configuration entirely; no filesystem access happens.
    Disabled,

    /// Load exactly this file. A missing or unreadable file is an error.
    Explicit(PathBuf),
}

/// Loads the local configuration source into an option mapping.
///
/// # Arguments
///
/// * `file` - Source selection: discover, disabled, or an explicit path.
/// * `dir` - The directory searched in discovery mode.
///
/// # Returns
///
/// The parsed option mapping, or an empty mapping when no source is found,
/// lookup is disabled, or the content is a non-mapping other than a bare
/// string.
///
/// # Errors
///
/// * [`ConfigError::MalformedConfig`] when the source parses to a bare
///   string.
/// * [`ConfigError::FileRead`] when an explicit file cannot be read.
/// * [`ConfigError::Parse`] when the selected source has invalid syntax.
/// * [`ConfigError::UnsupportedFormat`] when an explicit file has an
///   extension no parser handles.
pub fn load_local_config(file: &LocalConfigFile, dir: &Path) -> ConfigResult<Map<String, Value>> {
    let loaded = match file {
        LocalConfigFile::Disabled => return Ok(Map::new()),
        LocalConfigFile::Explicit(path) => {
            parse_candidate(path)?.map(|content| (path.clone(), content))
        }
        LocalConfigFile::Discover => discover(dir)?,
    };

    let Some((path, content)) = loaded else {
        debug!("No local configuration source found");
        return Ok(Map::new());
    };

    debug!(path = %path.display(), "Loaded local configuration source");
    coerce_to_mapping(content, &path)
}

/// Probes the search places in order and parses the first match.
///
/// Returns `None` when no candidate exists, or when the only candidate is a
/// manifest without an embedded configuration member.
fn discover(dir: &Path) -> ConfigResult<Option<(PathBuf, Value)>> {
    for candidate in SEARCH_PLACES {
        let path = dir.join(candidate);
        if !path.is_file() {
            continue;
        }
        let Some(content) = parse_candidate(&path)? else {
            continue;
        };
        return Ok(Some((path, content)));
    }
    Ok(None)
}

/// Parses one candidate file according to its extension.
///
/// For a `package.json` manifest the result is its `release-it` member;
/// `None` means the manifest carries no configuration.
fn parse_candidate(path: &Path) -> ConfigResult<Option<Value>> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if path.file_name().is_some_and(|name| name == "package.json") {
        let manifest: Value = parse_json(&content, path)?;
        return Ok(manifest.get(MANIFEST_MEMBER).cloned());
    }

    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let parsed = match extension.as_str() {
        "json" => parse_json(&content, path)?,
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|error| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?
        }
        "toml" => {
            let table: toml::Value =
                toml::from_str(&content).map_err(|error| ConfigError::Parse {
                    path: path.to_path_buf(),
                    reason: error.to_string(),
                })?;
            serde_json::to_value(table).map_err(|error| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?
        }
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    Ok(Some(parsed))
}

fn parse_json(content: &str, path: &Path) -> ConfigResult<Value> {
    serde_json::from_str(content).map_err(|error| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}

/// Applies the malformed-content policy to a parsed source.
///
/// A bare string is fatal; any other non-mapping (array, number, bool, null)
/// silently yields the empty mapping, the same outcome as no source at all.
fn coerce_to_mapping(content: Value, path: &Path) -> ConfigResult<Map<String, Value>> {
    match content {
        Value::String(_) => Err(ConfigError::MalformedConfig {
            path: path.to_path_buf(),
        }),
        Value::Object(mapping) => Ok(mapping),
        _ => Ok(Map::new()),
    }
}
