//! Sequential batch render entrypoint used by the CLI.
//!
//! Every document is attempted, in input order, regardless of earlier
//! failures. The caller observes progress through [`BatchEvent`]s and gets
//! the verdict from [`BatchReport::succeeded`].

use std::path::Path;
use std::time::{Duration, Instant};

use knitwork_core::InputList;
use knitwork_renderer::{DocumentRenderer, RenderError};

use crate::report::{BatchReport, FileOutcome};

/// Knobs for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Ask the renderer to suppress its own diagnostics.
    pub quiet: bool,
    /// List the documents without rendering them.
    pub dry_run: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            quiet: true,
            dry_run: false,
        }
    }
}

/// Progress notifications, in the order they happen.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// About to render `path` (zero-based `index` of `total`).
    Rendering {
        path: &'a Path,
        index: usize,
        total: usize,
    },
    /// `path` rendered without error.
    Rendered { path: &'a Path, elapsed: Duration },
    /// `path` failed; the batch carries on.
    Failed {
        path: &'a Path,
        error: &'a RenderError,
    },
    /// Dry run: `path` would have been rendered.
    WouldRender { path: &'a Path },
}

/// Render every document in `inputs` with `renderer`.
///
/// Never stops early: each per-document error is recorded in the report and
/// the loop moves on to the next document.
pub fn run<R, F>(
    renderer: &R,
    inputs: &InputList,
    options: &BatchOptions,
    mut on_event: F,
) -> BatchReport
where
    R: DocumentRenderer + ?Sized,
    F: FnMut(BatchEvent<'_>),
{
    if options.dry_run {
        for path in inputs.iter() {
            on_event(BatchEvent::WouldRender { path });
        }
        return BatchReport {
            outcomes: vec![],
            dry_run: true,
        };
    }

    let total = inputs.len();
    tracing::info!(
        total,
        source = %inputs.source,
        renderer = renderer.name(),
        "starting batch"
    );

    let outcomes: Vec<FileOutcome> = inputs
        .iter()
        .enumerate()
        .map(|(index, path)| {
            on_event(BatchEvent::Rendering { path, index, total });
            let outcome = render_one(renderer, path, options.quiet);
            match &outcome.result {
                Ok(elapsed) => on_event(BatchEvent::Rendered {
                    path,
                    elapsed: *elapsed,
                }),
                Err(error) => on_event(BatchEvent::Failed { path, error }),
            }
            outcome
        })
        .collect();

    let report = BatchReport {
        outcomes,
        dry_run: false,
    };
    tracing::info!(
        attempted = report.attempted(),
        failed = report.failed(),
        "batch finished"
    );
    report
}

fn render_one<R>(renderer: &R, path: &Path, quiet: bool) -> FileOutcome
where
    R: DocumentRenderer + ?Sized,
{
    let started = Instant::now();
    let result = renderer.render(path, quiet).map(|()| started.elapsed());
    match &result {
        Ok(elapsed) => tracing::debug!(
            path = %path.display(),
            elapsed_ms = elapsed.as_millis() as u64,
            "rendered"
        ),
        Err(err) => tracing::warn!(path = %path.display(), error = %err, "render failed"),
    }
    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}
