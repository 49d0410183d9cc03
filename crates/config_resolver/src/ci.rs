//! Continuous-integration environment probe.
//!
//! The detected flag becomes the synthetic `{ "ci": <bool> }` layer of the
//! precedence merge, sitting between caller-supplied options and the local
//! configuration file. Callers can always override it explicitly, and
//! [`ConfigResolver::set_ci`](crate::ConfigResolver::set_ci) can flip it
//! after construction.

use std::env;

#[cfg(test)]
#[path = "ci_tests.rs"]
mod tests;

/// Vendor-specific environment variables that imply a CI environment even
/// when the generic `CI` variable is not set.
const CI_VENDOR_VARS: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILD_NUMBER",
    "TEAMCITY_VERSION",
    "TF_BUILD",
];

/// Detects whether the current process appears to run on a CI server.
///
/// The generic `CI` variable wins when set to a non-empty value: anything
/// other than `"false"` means CI, and an explicit `CI=false` suppresses
/// detection regardless of vendor variables. Otherwise any known vendor
/// variable being set counts as CI.
pub fn detect_ci() -> bool {
    if let Ok(value) = env::var("CI") {
        if !value.is_empty() {
            return value != "false";
        }
    }
    CI_VENDOR_VARS.iter().any(|name| env::var_os(name).is_some())
}
