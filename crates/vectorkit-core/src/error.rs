//! Error handling for VectorKit
//!
//! Geometric degeneracy is never an error in the kernel: collinear arcs,
//! empty boolean results, and short point streams all have fallback values.
//! The types here cover the remaining genuine failures:
//! - Configuration errors (loading/validating `KernelConfig`)
//! - I/O and serialization errors at the edges of the system
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Raised when a `KernelConfig` fails validation or cannot be read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric setting is outside its valid range
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// The setting name.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configuration file extension is not understood
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for VectorKit
///
/// A unified error type for everything outside the pure kernel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
