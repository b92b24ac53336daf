//! Error types for loading and reading target groups

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a targets file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or could not be read
    #[error("could not read targets file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or a value has the wrong JSON type
    #[error("could not parse targets file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised when a target group lacks a key it is used for
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("target group '{group}' has no '{key}' key")]
    MissingKey { group: String, key: &'static str },
}

impl SchemaError {
    pub fn missing(group: &str, key: &'static str) -> Self {
        Self::MissingKey {
            group: group.to_string(),
            key,
        }
    }
}
