//! Error taxonomy for configuration loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

use super::models::ValueType;

/// Errors raised while building a [`StackConfig`](crate::StackConfig) or
/// reading values through it.
///
/// Construction-time variants (everything except `MissingKey` and `TypeCoercion`)
/// are fatal for the facade; `MissingKey` and `TypeCoercion` are fatal for the
/// single accessor call that produced them.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The stack name does not split into exactly `stage` and `tenant`.
    #[error(
        "Stack name '{identity}' must have the format {{stage}}{separator}{{tenant}} (found {parts} part(s))"
    )]
    MalformedIdentity {
        /// The stack name as reported by the context
        identity: String,
        /// Separator the name was split on
        separator: String,
        /// Number of non-empty parts found
        parts: usize,
    },

    /// The configuration root directory does not exist.
    #[error("Customer config path at {} does not exist", .0.display())]
    MissingRootPath(PathBuf),

    /// The layout requires a stack document and it is absent.
    #[error("Required stack configuration file {} does not exist", .0.display())]
    MissingMandatoryDocument(PathBuf),

    /// A document exists but could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    DocumentRead {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid YAML or not a mapping.
    #[error("Failed to parse configuration file {}: {reason}", .path.display())]
    DocumentParse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A required key resolved in no source.
    #[error("Key {0} is missing from configuration")]
    MissingKey(String),

    /// A stored value cannot be read as the requested type.
    #[error("Configuration {key} value '{value}' is not a valid {target}")]
    TypeCoercion {
        /// Fully-qualified key
        key: String,
        /// Stored value as text
        value: String,
        /// Requested type
        target: ValueType,
    },

    /// The deployment engine context could not be read.
    #[error("Ambient context unavailable: {0}")]
    AmbientUnavailable(String),

    /// Loader settings failed to load or validate.
    #[error("Invalid loader settings: {0}")]
    InvalidSettings(String),
}

/// Result alias used across the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;
