// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VidshelfError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<VidshelfError>,
    },

    #[error("Decode error: {0}")]
    Codec(#[from] CodecError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, VidshelfError>;

/// Failure to interpret a wire value as a domain value.
///
/// Decoding never panics and never aborts; every malformed input surfaces as
/// one of these variants for the caller to inspect or fall back from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("'{input}' is not a number: {reason}")]
    NotANumber { input: String, reason: String },

    #[error("'{input}' is not a finite number")]
    NonFinite { input: String },

    #[error("'{input}' is below zero")]
    Negative { input: String },

    #[error("computation panicked: {message}")]
    Panicked { message: String },
}

impl CodecError {
    pub fn not_a_number(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::NotANumber {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors raised while loading slider and filter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {format} configuration: {details}")]
    Parse { format: String, details: String },

    #[error("Invalid configuration: {field} {reason}")]
    Invalid { field: String, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<VidshelfError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VidshelfError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| VidshelfError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
