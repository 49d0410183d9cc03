//! Tests for release-type shorthand normalization.

use super::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// Builds an option mapping from a JSON literal and runs the normalizer.
fn expand(options: Value) -> Map<String, Value> {
    let mut options = options
        .as_object()
        .expect("test literal must be an object")
        .clone();
    expand_pre_release_shorthand(&mut options);
    options
}

// ============================================================================
// Version intent computation
// ============================================================================

/// Verify a plain increment passes through without pre-release flags.
#[test]
fn test_plain_increment() {
    let options = expand(json!({ "increment": "minor" }));

    assert_eq!(options["version"]["increment"], json!("minor"));
    assert_eq!(options["version"]["isPreRelease"], json!(false));
    assert_eq!(options["version"]["preReleaseId"], json!(null));
}

/// Verify a pre-release string sets the flag and the identifier.
#[test]
fn test_pre_release_string() {
    let options = expand(json!({ "preRelease": "beta", "git": { "tagMatch": "x" } }));

    assert_eq!(options["version"]["isPreRelease"], json!(true));
    assert_eq!(options["version"]["preReleaseId"], json!("beta"));
    assert_eq!(
        options["git"],
        json!({ "tagMatch": "x" }),
        "no guard rails outside snapshot mode"
    );
}

/// Verify a boolean pre-release keeps the separate identifier option.
#[test]
fn test_pre_release_boolean_uses_explicit_id() {
    let options = expand(json!({ "preRelease": true, "preReleaseId": "rc" }));

    assert_eq!(options["version"]["isPreRelease"], json!(true));
    assert_eq!(options["version"]["preReleaseId"], json!("rc"));
}

/// Verify snapshot mode forces the prerelease increment keyword.
#[test]
fn test_snapshot_forces_prerelease_increment() {
    let options = expand(json!({ "increment": "major", "snapshot": "canary" }));

    assert_eq!(options["version"]["increment"], json!("prerelease"));
    assert_eq!(options["version"]["isPreRelease"], json!(true));
    assert_eq!(options["version"]["preReleaseId"], json!("canary"));
}

/// Verify an explicit pre-release string outranks the snapshot identifier.
#[test]
fn test_pre_release_string_outranks_snapshot_id() {
    let options = expand(json!({ "preRelease": "beta", "snapshot": "canary" }));

    assert_eq!(options["version"]["preReleaseId"], json!("beta"));
    assert_eq!(options["version"]["increment"], json!("prerelease"));
}

/// Verify the pre-release base passes through to the intent.
#[test]
fn test_pre_release_base_passes_through() {
    let options = expand(json!({ "preRelease": "beta", "preReleaseBase": "1" }));

    assert_eq!(options["version"]["preReleaseBase"], json!("1"));
}

/// Verify no shorthand at all yields an inert intent.
#[test]
fn test_no_shorthand() {
    let options = expand(json!({}));

    assert_eq!(
        options["version"],
        json!({
            "increment": null,
            "isPreRelease": false,
            "preReleaseId": null,
            "preReleaseBase": null,
        })
    );
}

// ============================================================================
// Snapshot guard rails
// ============================================================================

/// Verify the fixed overwrites applied in snapshot mode, regardless of
/// user-supplied values in those fields.
#[test]
fn test_snapshot_guard_rails_overwrite() {
    let options = expand(json!({
        "snapshot": "canary",
        "preReleaseId": "ignored",
        "git": { "tagMatch": "x", "requireUpstream": true },
        "npm": { "ignoreVersion": false },
    }));

    let git = options["git"].as_object().unwrap();
    assert_eq!(git["tagMatch"], json!("0.0.0-canary.[0-9]*"));
    assert_eq!(git["getLatestTagFromAllRefs"], json!(true));
    assert_eq!(git["requireBranch"], json!("!main"));
    assert_eq!(git["requireUpstream"], json!(false));

    assert_eq!(options["npm"]["ignoreVersion"], json!(true));

    assert_eq!(options["version"]["increment"], json!("prerelease"));
    assert_eq!(options["version"]["preReleaseId"], json!("canary"));
    assert_eq!(options["version"]["isPreRelease"], json!(true));
}

/// Verify guard rails require a git sub-object.
#[test]
fn test_snapshot_without_git_object() {
    let options = expand(json!({ "snapshot": "canary", "npm": { "ignoreVersion": false } }));

    assert!(!options.contains_key("git"), "no git object is conjured up");
    assert_eq!(
        options["npm"]["ignoreVersion"],
        json!(false),
        "npm guard rail is tied to the git sub-object"
    );
    assert_eq!(options["version"]["preReleaseId"], json!("canary"));
}

/// Verify the npm sub-object is created when missing.
#[test]
fn test_snapshot_creates_npm_object() {
    let options = expand(json!({ "snapshot": "canary", "git": {} }));

    assert_eq!(options["npm"], json!({ "ignoreVersion": true }));
}

/// Verify a boolean snapshot enables pre-release mode without guard rails.
#[test]
fn test_boolean_snapshot_skips_guard_rails() {
    let options = expand(json!({ "snapshot": true, "git": { "tagMatch": "x" } }));

    assert_eq!(options["version"]["increment"], json!("prerelease"));
    assert_eq!(options["version"]["isPreRelease"], json!(true));
    assert_eq!(options["git"]["tagMatch"], json!("x"), "guard rails need a string id");
}

/// Verify an empty-string snapshot is not a snapshot release.
#[test]
fn test_empty_snapshot_string_is_inert() {
    let options = expand(json!({ "snapshot": "", "git": { "tagMatch": "x" } }));

    assert_eq!(options["version"]["isPreRelease"], json!(false));
    assert_eq!(options["git"]["tagMatch"], json!("x"));
}

// ============================================================================
// Typed intent
// ============================================================================

/// Verify the intent round-trips through the typed struct.
#[test]
fn test_version_intent_deserializes() {
    let options = expand(json!({ "snapshot": "canary" }));

    let intent: VersionIntent =
        serde_json::from_value(options["version"].clone()).expect("intent must deserialize");

    assert_eq!(intent.increment.as_deref(), Some("prerelease"));
    assert!(intent.is_pre_release);
    assert_eq!(intent.pre_release_id.as_deref(), Some("canary"));
    assert_eq!(intent.pre_release_base, None);
}
