//! Error types for Adapta.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Location classification and cross-origin denial are not errors; they are
//! modelled as ordinary enum variants in [`crate::navigation`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Adapta operations.
pub type Result<T> = std::result::Result<T, AdaptaError>;

/// Errors that can occur in Adapta.
#[derive(Debug, Error)]
pub enum AdaptaError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::config::Config`].
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Host controller called an entry point that does not exist.
    #[error("Unknown entry point: {name}")]
    UnknownEntryPoint {
        /// Name that failed to resolve.
        name: String,
    },

    /// Entry point got an argument it cannot use.
    #[error("Invalid argument for {entry}: {value:?}")]
    InvalidArgument {
        /// Entry point name.
        entry: String,
        /// Rejected argument.
        value: String,
    },
}

impl AdaptaError {
    /// Create a ConfigRead error.
    pub fn config_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::ConfigRead { path, source }
    }

    /// Create an UnknownEntryPoint error.
    pub fn unknown_entry_point(name: impl Into<String>) -> Self {
        Self::UnknownEntryPoint { name: name.into() }
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(entry: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            entry: entry.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_read_names_the_path() {
        let err = AdaptaError::config_read(
            PathBuf::from("/nope/adapta.toml"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "Failed to read config file: /nope/adapta.toml");
    }

    #[test]
    fn unknown_entry_point_message() {
        let err = AdaptaError::unknown_entry_point("openTab");
        assert_eq!(err.to_string(), "Unknown entry point: openTab");
    }
}
