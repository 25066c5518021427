//! Errors raised while loading, saving, or checking a capture config.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Failure to load, save, or accept a [`CaptureConfig`](crate::CaptureConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read capture config '{path}': {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written.
    #[error("failed to write capture config '{path}': {source}")]
    Write {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The directory that should hold the config file could not be created.
    #[error("cannot create config directory '{path}': {source}")]
    CreateParent {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid capture config document.
    #[error("malformed capture config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("cannot encode capture config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config parsed but describes an impossible capture.
    #[error("invalid capture config: {0}")]
    Invalid(#[from] ValidationError),
}

impl ConfigError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create_parent(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateParent {
            path: path.into(),
            source,
        }
    }
}
