//! Configuration resolution error types.
//!
//! Domain-specific errors for locating, parsing, and validating local
//! configuration sources. A missing source is never an error (callers get an
//! empty mapping instead), but a source that exists and is malformed aborts
//! resolution.

use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while resolving the local configuration source.
///
/// These errors occur during construction of a
/// [`ConfigResolver`](crate::ConfigResolver), before any release stage runs.
/// All of them are fatal for the run; there are no internal retries or
/// silent fallbacks to defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The discovered or explicitly named source parsed to a bare string
    /// rather than a structured mapping.
    #[error("Invalid configuration file at {}", .path.display())]
    MalformedConfig { path: PathBuf },

    /// The configuration file could not be read from disk.
    ///
    /// Discovery skips candidates that do not exist, so this mostly
    /// surfaces for explicitly named files.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but its content is not valid
    /// JSON/YAML/TOML.
    #[error("Failed to parse configuration file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// An explicitly named configuration file has an extension none of the
    /// supported parsers handle.
    #[error("Unsupported configuration format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Result type alias for configuration resolution operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
