//! Release-type shorthand normalization.
//!
//! Users express version-bump intent through several overlapping shorthand
//! options: `increment`, `preRelease`, `preReleaseId`, `snapshot`, and
//! `preReleaseBase`. This module collapses them into the single canonical
//! `version` intent object that all downstream stages read, and applies the
//! snapshot guard rails. It runs exactly once, immediately after the
//! precedence merge and before any other component reads the options.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::merge::is_truthy;

#[cfg(test)]
#[path = "shorthand_tests.rs"]
mod tests;

/// Canonical version-bump intent, stored under the `version` key.
///
/// Replaces the raw shorthand fields as the source of truth once the
/// resolver is constructed.
///
/// # Examples
///
/// ```rust
/// use config_resolver::ConfigResolver;
/// use serde_json::json;
///
/// let raw = json!({ "config": false, "preRelease": "beta" });
/// let resolver = ConfigResolver::new(raw.as_object().unwrap().clone()).unwrap();
///
/// let intent = resolver.version_intent();
/// assert!(intent.is_pre_release);
/// assert_eq!(intent.pre_release_id.as_deref(), Some("beta"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionIntent {
    /// The semver increment keyword, e.g. `"minor"` or `"prerelease"`.
    pub increment: Option<String>,

    /// Whether this run produces a pre-release version.
    pub is_pre_release: bool,

    /// The pre-release identifier, e.g. `"beta"` in `1.2.0-beta.0`.
    pub pre_release_id: Option<String>,

    /// The base number the pre-release counter starts from (`0` or `1`).
    pub pre_release_base: Option<Value>,
}

/// Expands the release-type shorthand fields into the `version` intent.
///
/// Rules:
/// - `isPreRelease` is true iff `preRelease` or `snapshot` is truthy.
/// - A truthy `snapshot` forces the increment keyword to `"prerelease"`.
/// - The pre-release identifier comes from `preRelease` when it is a string,
///   else from `snapshot` when it is a string, else from `preReleaseId`.
///
/// When `snapshot` is a non-empty string and a `git` sub-object is present,
/// a fixed set of downstream options is overwritten unconditionally (see
/// [`apply_snapshot_guard_rails`]); snapshot releases must not move real
/// tags or touch upstream state.
pub(crate) fn expand_pre_release_shorthand(options: &mut Map<String, Value>) {
    let increment = options.get("increment").cloned().unwrap_or(Value::Null);
    let pre_release = options.get("preRelease").cloned().unwrap_or(Value::Null);
    let pre_release_id = options.get("preReleaseId").cloned().unwrap_or(Value::Null);
    let snapshot = options.get("snapshot").cloned().unwrap_or(Value::Null);
    let pre_release_base = options
        .get("preReleaseBase")
        .cloned()
        .unwrap_or(Value::Null);

    let is_pre_release = is_truthy(&pre_release) || is_truthy(&snapshot);
    let resolved_increment = if is_truthy(&snapshot) {
        json!("prerelease")
    } else {
        increment
    };
    let resolved_id = if pre_release.is_string() {
        pre_release.clone()
    } else if snapshot.is_string() {
        snapshot.clone()
    } else {
        pre_release_id
    };

    options.insert(
        "version".to_string(),
        json!({
            "increment": resolved_increment,
            "isPreRelease": is_pre_release,
            "preReleaseId": resolved_id,
            "preReleaseBase": pre_release_base,
        }),
    );

    if let Some(snapshot_id) = snapshot.as_str().filter(|id| !id.is_empty()) {
        apply_snapshot_guard_rails(options, snapshot_id);
    }
}

/// Hard-codes the options a snapshot release must run with.
///
/// Overwrites, not merges: user-supplied values in these specific fields are
/// replaced. Requires a `git` sub-object to be present; the `npm` sub-object
/// is created when missing.
fn apply_snapshot_guard_rails(options: &mut Map<String, Value>, snapshot_id: &str) {
    let Some(Value::Object(git)) = options.get_mut("git") else {
        return;
    };

    git.insert(
        "tagMatch".to_string(),
        json!(format!("0.0.0-{snapshot_id}.[0-9]*")),
    );
    git.insert("getLatestTagFromAllRefs".to_string(), json!(true));
    git.insert("requireBranch".to_string(), json!("!main"));
    git.insert("requireUpstream".to_string(), json!(false));

    match options.get_mut("npm") {
        Some(Value::Object(npm)) => {
            npm.insert("ignoreVersion".to_string(), json!(true));
        }
        _ => {
            options.insert("npm".to_string(), json!({ "ignoreVersion": true }));
        }
    }
}
