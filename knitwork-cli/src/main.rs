//! knitwork — batch renderer for R Markdown documents.
//!
//! # Usage
//!
//! ```text
//! knitwork [FILE]... [--pattern <GLOB>] [--rscript <PATH>] [--renderer-output] [--dry-run] [-v]
//! ```
//!
//! With no files, every `atlas_cdc_estimation*.Rmd` in the working directory
//! is rendered. Exit status is 0 only if every document rendered.

mod logging;
mod render;

use std::process::ExitCode;

use clap::{ArgAction, Parser};

use render::{RenderArgs, PREFIX};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "knitwork",
    version,
    about = "Render R Markdown documents in batch and report aggregate success",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    /// Raise log verbosity on stderr (-v info, -vv debug). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.render.run() {
        Ok(report) if report.succeeded() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{PREFIX} ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
