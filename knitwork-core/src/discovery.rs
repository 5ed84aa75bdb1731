//! Input resolution: explicit arguments or pattern discovery.
//!
//! # API pattern
//!
//! - `fn_at(dir: &Path, …)` — explicit working directory; used in tests with `TempDir`
//! - `fn(…)` — uses the process working directory, delegates to `_at`

use std::path::{Path, PathBuf};

use crate::error::DiscoveryError;
use crate::types::{DiscoveryPattern, InputList, InputSource};

/// Find the regular files in `dir` whose names match `pattern`.
///
/// Non-recursive. Results are sorted lexically by file name. When `dir` is
/// `.` the returned paths are bare file names, otherwise they are joined to
/// `dir`.
///
/// Returns [`DiscoveryError::NoFilesFound`] if nothing matches.
pub fn discover_at(dir: &Path, pattern: &DiscoveryPattern) -> Result<Vec<PathBuf>, DiscoveryError> {
    let io_err = |source| DiscoveryError::Io {
        dir: dir.to_path_buf(),
        source,
    };

    let mut names: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        // Follows symlinks, so a link to a document still counts.
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if pattern.matches(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Err(DiscoveryError::NoFilesFound {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    names.sort();
    let here = is_current_dir(dir);
    Ok(names
        .into_iter()
        .map(|name| if here { PathBuf::from(name) } else { dir.join(name) })
        .collect())
}

/// Resolve the documents to render.
///
/// Non-empty `args` are used verbatim and in order, without checking that
/// they exist; the renderer reports missing files per document. An empty
/// `args` falls back to [`discover_at`].
pub fn resolve_inputs_at(
    args: Vec<PathBuf>,
    dir: &Path,
    pattern: &DiscoveryPattern,
) -> Result<InputList, DiscoveryError> {
    if !args.is_empty() {
        return Ok(InputList {
            files: args,
            source: InputSource::Explicit,
        });
    }

    let files = discover_at(dir, pattern)?;
    tracing::info!(count = files.len(), %pattern, "discovered documents");
    Ok(InputList {
        files,
        source: InputSource::Discovered,
    })
}

/// `resolve_inputs_at` convenience wrapper over the process working directory.
pub fn resolve_inputs(
    args: Vec<PathBuf>,
    pattern: &DiscoveryPattern,
) -> Result<InputList, DiscoveryError> {
    resolve_inputs_at(args, Path::new("."), pattern)
}

fn is_current_dir(dir: &Path) -> bool {
    dir.as_os_str().is_empty() || dir == Path::new(".")
}
