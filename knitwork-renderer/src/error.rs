//! Error types for knitwork-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// The external rendering capability could not be resolved.
///
/// Raised once, before any document is touched.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The renderer program could not be started at all.
    #[error("renderer program '{program}' is not available")]
    ProgramUnavailable {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The program runs but the R package is not installed.
    #[error(
        "R package '{package}' is not installed for {program} \
         (install it with install.packages(\"{package}\"))"
    )]
    PackageMissing {
        program: PathBuf,
        package: &'static str,
    },
}

/// A single document failed to render.
///
/// Display is the renderer's own message, so callers can print it as-is.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer ran and reported an error.
    #[error("{message}")]
    Failed { message: String },

    /// The renderer process could not be started or waited on.
    #[error("failed to run {program}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}
