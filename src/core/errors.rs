//! WRB-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, WrbError>;

/// Top-level error type for World Reboot.
///
/// Filesystem failures inside the eraser never propagate as values of this
/// type; they are absorbed at the component boundary into a boolean result
/// plus one log record. Config load/save failures do propagate, since they
/// happen in the host adapter before/after the run loop.
#[derive(Debug, Error)]
pub enum WrbError {
    #[error("[WRB-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[WRB-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[WRB-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[WRB-2001] cannot enumerate {path}: {source}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[WRB-2002] failed to delete {path}: {source}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[WRB-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[WRB-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WrbError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "WRB-1001",
            Self::MissingConfig { .. } => "WRB-1002",
            Self::ConfigParse { .. } => "WRB-1003",
            Self::Enumeration { .. } => "WRB-2001",
            Self::Deletion { .. } => "WRB-2002",
            Self::Serialization { .. } => "WRB-2101",
            Self::Io { .. } => "WRB-3001",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for per-node deletion failures.
    #[must_use]
    pub fn deletion(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Deletion {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for directory-listing / walk failures.
    #[must_use]
    pub fn enumeration(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Enumeration {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<toml::de::Error> for WrbError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

impl From<toml::ser::Error> for WrbError {
    fn from(value: toml::ser::Error) -> Self {
        Self::Serialization {
            context: "toml",
            details: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for WrbError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}
