//! Error types for schema conversion and configuration loading
//!
//! The describing operations themselves are total and never fail. Errors only
//! surface at the edges: turning raw JSON into a [`Schema`](crate::Schema) and
//! loading a [`SchemaDocConfig`](crate::SchemaDocConfig) from disk.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fallible schemadoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for schema conversion and configuration handling
#[derive(Error, Debug)]
pub enum Error {
    /// Raw JSON could not be interpreted as a schema node
    #[error("Invalid schema: {message}")]
    InvalidSchema {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },

    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration values that cannot be used
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid schema error
    pub fn invalid_schema<M: Into<String>>(message: M, source: Option<serde_json::Error>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error bound to a path
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Create a configuration error
    pub fn configuration<M: Into<String>>(message: M) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
