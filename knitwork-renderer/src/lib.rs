//! # knitwork-renderer
//!
//! The external document renderer as a capability: a [`DocumentRenderer`]
//! trait, the R Markdown backend that drives `Rscript`, and the one-time
//! [`resolve`] step that turns configuration into a usable renderer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use knitwork_core::RendererSettings;
//! use knitwork_renderer::resolve;
//!
//! fn render_one() {
//!     match resolve(&RendererSettings::default()) {
//!         Ok(renderer) => {
//!             if let Err(e) = renderer.render(Path::new("report.Rmd"), true) {
//!                 eprintln!("failed: {e}");
//!             }
//!         }
//!         Err(e) => eprintln!("no renderer: {e}"),
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod rscript;

pub use engine::{resolve, DocumentRenderer};
pub use error::{CapabilityError, RenderError};
pub use rscript::RscriptRenderer;
