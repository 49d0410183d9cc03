//! Canonical option resolution and read surface.
//!
//! [`ConfigResolver`] combines the caller-supplied options, the CI probe,
//! the local configuration source, and the bundled defaults into one
//! canonical options object, then answers every configuration question the
//! release stages ask. The canonical options are immutable by convention
//! after construction; the only named mutation sites are [`set_ci`] and the
//! shorthand normalization that runs inside the constructor.
//!
//! [`set_ci`]: ConfigResolver::set_ci

use std::env;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::debug;

use crate::ci::detect_ci;
use crate::defaults::DefaultConfig;
use crate::errors::ConfigResult;
use crate::local::{load_local_config, LocalConfigFile};
use crate::merge::{get_path, is_truthy, merge_defaults, merge_into};
use crate::shorthand::{expand_pre_release_shorthand, VersionIntent};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Constructor option key naming an explicit config file, or `false` to
/// disable local lookup.
const CONFIG_KEY: &str = "config";

/// Constructor option key naming the local config search directory.
const CONFIG_DIR_KEY: &str = "configDir";

/// Resolves and serves the effective run configuration.
///
/// Construction merges, in strictly decreasing precedence: the
/// caller-supplied options, the synthetic `{ "ci": <detected> }` fragment,
/// the local configuration source, and the pinned defaults. The shorthand
/// normalizer then runs exactly once over the merged result. Everything
/// downstream reads through the accessor methods or [`get_context`].
///
/// [`get_context`]: ConfigResolver::get_context
///
/// # Examples
///
/// ```rust
/// use config_resolver::ConfigResolver;
/// use serde_json::json;
///
/// let raw = json!({
///     "config": false,
///     "dry-run": true,
///     "git": { "push": false },
/// });
/// let resolver = ConfigResolver::new(raw.as_object().unwrap().clone())?;
///
/// assert!(resolver.is_dry_run());
/// assert_eq!(resolver.options()["git"]["push"], json!(false));
/// assert_eq!(resolver.options()["git"]["tag"], json!(true)); // default
/// # Ok::<(), config_resolver::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// The caller-supplied options exactly as passed in; kept so the
    /// original static options survive later overlays.
    constructor_options: Map<String, Value>,

    /// The parsed local configuration source, empty when none contributed.
    local_config: Map<String, Value>,

    /// The canonical options: merged, normalized, total over the known
    /// option set.
    options: Map<String, Value>,

    /// Runtime-computed overrides, merged over the canonical options on
    /// read. Append-only within one run.
    context_options: Map<String, Value>,
}

impl ConfigResolver {
    /// Builds a resolver from caller-supplied options and bundled defaults.
    ///
    /// Two keys of `constructor_options` are consumed before the merge:
    /// `config` (explicit local file path, or `false` to disable lookup) and
    /// `configDir` (search directory, default: the process working
    /// directory).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::ConfigError) when the local
    /// configuration source exists but cannot be read or parsed, or parses
    /// to a bare string.
    pub fn new(constructor_options: Map<String, Value>) -> ConfigResult<Self> {
        Self::with_defaults(constructor_options, DefaultConfig::bundled())
    }

    /// Builds a resolver with an injected baseline instead of the bundled
    /// defaults.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ConfigResolver::new`].
    pub fn with_defaults(
        constructor_options: Map<String, Value>,
        defaults: DefaultConfig,
    ) -> ConfigResult<Self> {
        let file = local_config_file(&constructor_options);
        let dir = local_config_dir(&constructor_options);
        let local_config = load_local_config(&file, &dir)?;

        let mut options = merge_options(&constructor_options, &local_config, &defaults);
        expand_pre_release_shorthand(&mut options);
        let resolved_options = Value::Object(options.clone());
        debug!(options = %resolved_options, "Resolved run configuration");

        Ok(Self {
            constructor_options,
            local_config,
            options,
            context_options: Map::new(),
        })
    }

    /// The canonical options object.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// The options the caller supplied at construction, unmodified.
    pub fn constructor_options(&self) -> &Map<String, Value> {
        &self.constructor_options
    }

    /// The local configuration source's contribution, empty when none.
    pub fn local_config(&self) -> &Map<String, Value> {
        &self.local_config
    }

    /// Returns the canonical options with a remote fragment merged on top.
    ///
    /// The fragment wins on conflict; mappings merge recursively, everything
    /// else replaces. The resolver itself is not modified; what to do with
    /// the merged result is the caller's decision.
    pub fn merge_remote_options(&self, remote: &Map<String, Value>) -> Map<String, Value> {
        let mut merged = self.options.clone();
        merge_into(&mut merged, remote);
        merged
    }

    /// Accumulates runtime-computed values into the context overlay.
    ///
    /// Deep-merges `context` into the overlay; repeated calls accumulate.
    /// The canonical options are never touched.
    pub fn set_context(&mut self, context: &Map<String, Value>) {
        let context_value = Value::Object(context.clone());
        debug!(context = %context_value, "Extending run context");
        merge_into(&mut self.context_options, context);
    }

    /// Returns the canonical options overlaid with the run context.
    ///
    /// Computed freshly on every call: the canonical options are cloned and
    /// the context overlay wins on conflict.
    pub fn get_context(&self) -> Map<String, Value> {
        let mut context = self.options.clone();
        merge_into(&mut context, &self.context_options);
        context
    }

    /// Looks up one overlaid value by dotted key path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_resolver::ConfigResolver;
    /// use serde_json::json;
    ///
    /// let raw = json!({ "config": false });
    /// let mut resolver = ConfigResolver::new(raw.as_object().unwrap().clone())?;
    ///
    /// let context = json!({ "latestVersion": "1.4.0" });
    /// resolver.set_context(context.as_object().unwrap());
    ///
    /// assert_eq!(
    ///     resolver.get_context_value("latestVersion"),
    ///     Some(json!("1.4.0"))
    /// );
    /// assert_eq!(resolver.get_context_value("git.tag"), Some(json!(true)));
    /// # Ok::<(), config_resolver::ConfigError>(())
    /// ```
    pub fn get_context_value(&self, path: &str) -> Option<Value> {
        let context = self.get_context();
        get_path(&context, path).cloned()
    }

    /// Overwrites the canonical `ci` flag.
    ///
    /// Mutates the canonical options directly rather than going through the
    /// overlay; CI status feeds the accessor derivations below.
    pub fn set_ci(&mut self, value: bool) {
        self.options.insert("ci".to_string(), Value::Bool(value));
    }

    /// Whether this run only prints what it would do.
    pub fn is_dry_run(&self) -> bool {
        self.truthy("dry-run")
    }

    /// Whether version incrementing is enabled (`increment` not explicitly
    /// disabled).
    pub fn is_increment(&self) -> bool {
        self.options.get("increment") != Some(&Value::Bool(false))
    }

    /// Whether verbose output was requested.
    pub fn is_verbose(&self) -> bool {
        self.truthy("verbose")
    }

    /// The raw verbosity value; numeric levels pass through unchanged.
    pub fn verbosity_level(&self) -> Option<&Value> {
        self.options.get("verbose")
    }

    /// Whether diagnostic tracing is active for this crate.
    pub fn is_debug(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }

    /// Whether the run should behave as non-interactive CI.
    ///
    /// Printing only the release version or only the changelog implies
    /// machine-readable output, so both modes count as CI regardless of the
    /// detected flag.
    pub fn is_ci(&self) -> bool {
        self.truthy("ci") || self.is_release_version() || self.is_changelog()
    }

    /// Whether only the version prompt should run.
    pub fn is_prompt_only_version(&self) -> bool {
        self.truthy("only-version")
    }

    /// Whether the run only prints the next release version.
    pub fn is_release_version(&self) -> bool {
        self.truthy("release-version")
    }

    /// Whether the run only prints the changelog.
    pub fn is_changelog(&self) -> bool {
        self.truthy("changelog")
    }

    /// The canonical version-bump intent computed by the shorthand
    /// normalizer.
    pub fn version_intent(&self) -> VersionIntent {
        self.options
            .get("version")
            .cloned()
            .and_then(|version| serde_json::from_value(version).ok())
            .unwrap_or_default()
    }

    fn truthy(&self, key: &str) -> bool {
        self.options.get(key).is_some_and(is_truthy)
    }
}

/// Merges the four layers in strictly decreasing precedence.
///
/// The `config` and `configDir` keys are consumed by source selection and do
/// not participate in the merge.
fn merge_options(
    constructor_options: &Map<String, Value>,
    local_config: &Map<String, Value>,
    defaults: &DefaultConfig,
) -> Map<String, Value> {
    let mut raw = constructor_options.clone();
    raw.remove(CONFIG_KEY);
    raw.remove(CONFIG_DIR_KEY);

    let mut ci_fragment = Map::new();
    ci_fragment.insert("ci".to_string(), Value::Bool(detect_ci()));

    merge_defaults(&[&raw, &ci_fragment, local_config, defaults.as_map()])
}

/// Interprets the `config` constructor key.
fn local_config_file(constructor_options: &Map<String, Value>) -> LocalConfigFile {
    match constructor_options.get(CONFIG_KEY) {
        Some(Value::Bool(false)) => LocalConfigFile::Disabled,
        Some(Value::String(path)) => LocalConfigFile::Explicit(PathBuf::from(path)),
        _ => LocalConfigFile::Discover,
    }
}

/// Interprets the `configDir` constructor key, defaulting to the process
/// working directory.
fn local_config_dir(constructor_options: &Map<String, Value>) -> PathBuf {
    constructor_options
        .get(CONFIG_DIR_KEY)
        .and_then(Value::as_str)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
