//! Error types for Entity Access Core

#[cfg(feature = "definitions")]
use std::path::PathBuf;
use thiserror::Error;

/// Error raised while building condition trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Operator outside the supported set
    #[error("Unrecognized operator \"{operator}\".")]
    InvalidOperator { operator: String },

    /// Conjunction other than AND/OR
    #[error("Unrecognized conjunction \"{conjunction}\".")]
    InvalidConjunction { conjunction: String },
}

impl AccessError {
    pub(crate) fn invalid_operator(operator: impl Into<String>) -> Self {
        AccessError::InvalidOperator {
            operator: operator.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors that can occur while loading or building condition group definitions
#[cfg(feature = "definitions")]
#[derive(Error, Debug)]
pub enum DefinitionError {
    /// Definition file could not be read
    #[error("Failed to read definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither YAML nor JSON
    #[error("Unsupported definition format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The definition describes an invalid tree
    #[error(transparent)]
    Access(#[from] AccessError),
}
