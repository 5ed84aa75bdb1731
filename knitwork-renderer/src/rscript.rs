//! R Markdown through `Rscript`.
//!
//! | Step       | Command line                                                  |
//! |------------|---------------------------------------------------------------|
//! | Capability | `<program> --vanilla -e <CHECK_EXPR>`                         |
//! | Render     | `<program> --vanilla -e <RENDER_EXPR> <input> <TRUE\|FALSE>`  |
//!
//! The document path travels as a trailing argument, never spliced into R
//! source, so file names need no quoting.

use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

use crate::engine::DocumentRenderer;
use crate::error::{CapabilityError, RenderError};

const PACKAGE: &str = "rmarkdown";

/// Exits 0 only when `rmarkdown` can be loaded.
const CHECK_EXPR: &str =
    "quit(save = 'no', status = if (requireNamespace('rmarkdown', quietly = TRUE)) 0L else 1L)";

/// Prefix written to stderr in front of the R condition message.
pub const ERROR_MARKER: &str = "knitwork-error: ";

const RENDER_EXPR: &str = concat!(
    "args <- commandArgs(trailingOnly = TRUE); ",
    "tryCatch(invisible(rmarkdown::render(args[1], quiet = as.logical(args[2]))), ",
    "error = function(e) { message('knitwork-error: ', conditionMessage(e)); ",
    "quit(save = 'no', status = 1L) })",
);

/// Renders `.Rmd` documents with `rmarkdown::render` in a child `Rscript`.
#[derive(Debug, Clone)]
pub struct RscriptRenderer {
    program: PathBuf,
}

impl RscriptRenderer {
    /// Check that `program` starts and has `rmarkdown` installed.
    pub fn resolve(program: impl Into<PathBuf>) -> Result<Self, CapabilityError> {
        let program = program.into();
        let status = Command::new(&program)
            .args(["--vanilla", "-e", CHECK_EXPR])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CapabilityError::ProgramUnavailable {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CapabilityError::PackageMissing {
                program,
                package: PACKAGE,
            });
        }
        Ok(Self { program })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl DocumentRenderer for RscriptRenderer {
    fn name(&self) -> &str {
        PACKAGE
    }

    fn render(&self, input: &Path, quiet: bool) -> Result<(), RenderError> {
        let spawn_err = |source| RenderError::Spawn {
            program: self.program.clone(),
            source,
        };

        let started = Instant::now();
        let mut child = Command::new(&self.program)
            .args(["--vanilla", "-e", RENDER_EXPR])
            .arg(input)
            .arg(if quiet { "TRUE" } else { "FALSE" })
            .stdin(Stdio::null())
            .stdout(if quiet { Stdio::null() } else { Stdio::inherit() })
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // stdout is never piped, so draining stderr first cannot deadlock.
        let stderr = match child.stderr.take() {
            Some(pipe) => {
                let mut echo = io::stderr().lock();
                let echo: Option<&mut dyn Write> = if quiet { None } else { Some(&mut echo) };
                tee_lines(BufReader::new(pipe), echo).map_err(spawn_err)?
            }
            None => String::new(),
        };
        let status = child.wait().map_err(spawn_err)?;

        tracing::debug!(
            input = %input.display(),
            status = %status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Rscript finished"
        );

        if status.success() {
            return Ok(());
        }
        Err(RenderError::failed(failure_message(
            &stderr,
            &self.program,
            status,
        )))
    }
}

/// Collect `reader` line by line, copying each line to `echo` as soon as it
/// arrives.
fn tee_lines(mut reader: impl BufRead, mut echo: Option<&mut dyn Write>) -> io::Result<String> {
    let mut captured = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if let Some(out) = echo.as_deref_mut() {
            out.write_all(&line)?;
            out.flush()?;
        }
        captured.push_str(&String::from_utf8_lossy(&line));
    }
    Ok(captured)
}

/// Pick the human-readable message out of a failed render's stderr.
///
/// Prefers the text after the last [`ERROR_MARKER`]; falls back to the last
/// meaningful stderr line, then to the exit status.
fn failure_message(stderr: &str, program: &Path, status: ExitStatus) -> String {
    if let Some(idx) = stderr.rfind(ERROR_MARKER) {
        let message = stderr[idx + ERROR_MARKER.len()..].trim();
        if !message.is_empty() {
            return message.to_owned();
        }
    }

    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty() && *line != "Execution halted")
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{} exited with {status}", program.display()))
}
