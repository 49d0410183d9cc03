//! Bundled default configuration.
//!
//! Every known option has a pinned default here, which guarantees the
//! resolved options object is total over the known option set: downstream
//! stages can read any documented key without checking for absence.
//!
//! The defaults are compiled into the binary from `config/defaults.json` and
//! handed to [`ConfigResolver`](crate::ConfigResolver) as an explicit
//! constructor input, so the precedence merge stays a pure function of its
//! inputs and tests can substitute their own baseline.

use serde_json::{Map, Value};

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;

/// The bundled default configuration document.
const DEFAULT_CONFIG_JSON: &str = include_str!("../config/defaults.json");

/// A read-only default configuration mapping.
///
/// The lowest-precedence layer of the merge. Wraps a plain option mapping so
/// constructor signatures distinguish "the baseline" from the other,
/// partial, layers.
///
/// # Examples
///
/// ```rust
/// use config_resolver::DefaultConfig;
///
/// let defaults = DefaultConfig::bundled();
/// assert_eq!(defaults.as_map()["git"]["push"], serde_json::json!(true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultConfig(Map<String, Value>);

impl DefaultConfig {
    /// Returns the defaults bundled with this crate.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in `config/defaults.json` asset is not a valid
    /// JSON mapping; that is a build defect, not a runtime condition.
    pub fn bundled() -> Self {
        let defaults = serde_json::from_str(DEFAULT_CONFIG_JSON)
            .expect("bundled config/defaults.json must be a valid JSON mapping");
        Self(defaults)
    }

    /// Wraps a caller-supplied baseline mapping.
    ///
    /// Used by tests and by embedders that ship their own defaults.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Read access to the underlying mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the wrapper and returns the mapping.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self::bundled()
    }
}
