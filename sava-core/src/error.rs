/// Structured error types for sava-core.
///
/// Uses `thiserror` so the CLI (and any other host) can match on what went
/// wrong. The binary crate wraps these in `anyhow` with extra context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sava-core operations
#[derive(Error, Debug)]
pub enum SavaError {
    /// Target date-time literal could not be turned into an instant
    #[error("Invalid target '{value}': {reason}")]
    InvalidTarget { value: String, reason: String },

    /// Timezone name is neither "local", "utc", nor a known IANA zone
    #[error("Unknown timezone '{name}'")]
    UnknownTimezone { name: String },

    /// Refresh period is unusable
    #[error("Invalid refresh interval: {reason}")]
    InvalidInterval { reason: String },

    /// Ticker started outside a tokio runtime
    #[error("No async runtime available: {reason}")]
    Runtime { reason: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("Failed to parse config file {path:?}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be written back out as TOML
    #[error("Failed to serialize config: {source}")]
    TomlSerialize {
        #[from]
        source: toml::ser::Error,
    },
}

/// Result type alias for sava-core operations
pub type Result<T> = std::result::Result<T, SavaError>;

impl SavaError {
    /// Create an invalid target error
    pub fn invalid_target(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown timezone error
    pub fn unknown_timezone(name: impl Into<String>) -> Self {
        Self::UnknownTimezone { name: name.into() }
    }

    /// Create an invalid interval error
    pub fn invalid_interval(reason: impl Into<String>) -> Self {
        Self::InvalidInterval {
            reason: reason.into(),
        }
    }

    /// Create a runtime error
    pub fn runtime(reason: impl Into<String>) -> Self {
        Self::Runtime {
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error for the given file
    pub fn toml_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::TomlParse {
            path: path.into(),
            source,
        }
    }
}
