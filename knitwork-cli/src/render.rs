//! The render run: resolve the renderer, resolve the documents, render them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use knitwork_batch::{pipeline, BatchEvent, BatchOptions, BatchReport};
use knitwork_core::{config, discovery, Config, DiscoveryPattern};

/// Tag in front of every line this tool prints.
pub const PREFIX: &str = "[render]";

/// Arguments for a render run.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Documents to render, in order. Omit to discover them by pattern.
    pub files: Vec<PathBuf>,

    /// Discovery glob used when no files are given [default: atlas_cdc_estimation*.Rmd].
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Rscript executable used to reach rmarkdown.
    #[arg(long, value_name = "PATH", env = "KNITWORK_RSCRIPT")]
    pub rscript: Option<PathBuf>,

    /// Let the renderer print its own diagnostics.
    #[arg(long)]
    pub renderer_output: bool,

    /// List the documents that would be rendered without rendering them.
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<BatchReport> {
        let config = config::load().context("failed to load configuration")?;
        let config = self.apply_overrides(config)?;

        let renderer = knitwork_renderer::resolve(&config.renderer)
            .context("rendering capability unavailable")?;

        let inputs = discovery::resolve_inputs(self.files, &config.pattern)
            .context("no documents to render")?;

        let options = BatchOptions {
            quiet: config.renderer.quiet,
            dry_run: self.dry_run,
        };
        let report = pipeline::run(&*renderer, &inputs, &options, print_event);
        print_summary(&report);
        Ok(report)
    }

    /// Layer command-line flags and environment on top of `knitwork.yaml`.
    fn apply_overrides(&self, mut config: Config) -> Result<Config> {
        if let Some(pattern) = self.pattern.as_deref() {
            config.pattern = DiscoveryPattern::new(pattern).context("invalid --pattern")?;
        }
        if let Some(program) = &self.rscript {
            config.renderer.program = program.clone();
        }
        if self.renderer_output {
            config.renderer.quiet = false;
        }
        Ok(config)
    }
}

fn print_event(event: BatchEvent<'_>) {
    match event {
        BatchEvent::Rendering { path, .. } => {
            println!("{PREFIX} Rendering {}...", path.display());
        }
        BatchEvent::Rendered { .. } => {}
        BatchEvent::Failed { path, error } => {
            eprintln!("{PREFIX} FAILED: {} ({})", error_chain(error), path.display());
        }
        BatchEvent::WouldRender { path } => {
            println!("{PREFIX} Would render {}", path.display());
        }
    }
}

fn print_summary(report: &BatchReport) {
    if report.dry_run {
        return;
    }
    if report.succeeded() {
        println!("{PREFIX} Completed successfully.");
        return;
    }
    let failed: Vec<String> = report
        .failures()
        .map(|(path, _)| path.display().to_string())
        .collect();
    eprintln!(
        "{PREFIX} {} of {} file(s) failed: {}",
        failed.len(),
        report.attempted(),
        failed.join(", ")
    );
}

/// `error` followed by each of its sources, `: `-separated.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
