//! Per-document outcomes and the aggregate verdict.

use std::path::PathBuf;
use std::time::Duration;

use knitwork_renderer::RenderError;

/// Outcome of a single render attempt.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Duration, RenderError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything a batch run produced, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    /// Set when the run only listed documents.
    pub dry_run: bool,
}

impl BatchReport {
    /// Logical AND over every outcome. Vacuously true for an empty batch.
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(FileOutcome::is_success)
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &RenderError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.path, e)))
    }
}
