//! Error types for knitwork-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving the list of documents to render.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The discovery pattern is not a valid glob.
    #[error("invalid discovery pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Discovery is non-recursive, so a pattern may only name a file.
    #[error("discovery pattern '{pattern}' must not contain a path separator")]
    NestedPattern { pattern: String },

    /// Default discovery matched nothing.
    #[error("no files matching '{pattern}' found in {dir}")]
    NoFilesFound { dir: PathBuf, pattern: String },

    /// Listing the discovery directory failed.
    #[error("failed to read directory {dir}")]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading `knitwork.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure other than the file being absent.
    #[error("failed to read config at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with serde_yaml's line context.
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
