//! The [`DocumentRenderer`] capability and its one-time resolution.

use std::path::Path;

use knitwork_core::RendererSettings;

use crate::error::{CapabilityError, RenderError};
use crate::rscript::RscriptRenderer;

// ---------------------------------------------------------------------------
// DocumentRenderer
// ---------------------------------------------------------------------------

/// Something that turns one source document into its rendered artifacts.
///
/// Output format and location are governed by the document itself; the
/// caller only learns whether the render succeeded.
pub trait DocumentRenderer {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Render `input`, blocking until the renderer finishes.
    ///
    /// `quiet` asks the renderer to suppress its own diagnostic output.
    fn render(&self, input: &Path, quiet: bool) -> Result<(), RenderError>;
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the external renderer described by `settings`.
///
/// Call once at startup. Failure means no document can be rendered.
pub fn resolve(settings: &RendererSettings) -> Result<Box<dyn DocumentRenderer>, CapabilityError> {
    let renderer = RscriptRenderer::resolve(&settings.program)?;
    tracing::info!(
        renderer = renderer.name(),
        program = %renderer.program().display(),
        "resolved renderer"
    );
    Ok(Box::new(renderer))
}
