//! `RscriptRenderer` against a fake `Rscript` executable.

#![cfg(unix)]

mod common;

use std::fs;

use knitwork_core::RendererSettings;
use knitwork_renderer::{resolve, CapabilityError, DocumentRenderer, RenderError, RscriptRenderer};
use rstest::rstest;
use tempfile::TempDir;

use common::{fake_rscript, render_calls};

// ---------------------------------------------------------------------------
// 1. Capability resolution
// ---------------------------------------------------------------------------

#[test]
fn missing_program_is_unavailable() {
    let dir = TempDir::new().expect("tempdir");
    let err = RscriptRenderer::resolve(dir.path().join("no-such-rscript")).unwrap_err();
    assert!(matches!(err, CapabilityError::ProgramUnavailable { .. }), "got: {err}");
    assert!(err.to_string().contains("no-such-rscript"), "got: {err}");
    assert!(!err.to_string().contains("os error"), "cause repeated in: {err}");
}

#[test]
fn failing_check_means_package_missing() {
    let dir = TempDir::new().expect("tempdir");
    let program = fake_rscript(dir.path(), 1);
    let err = RscriptRenderer::resolve(&program).unwrap_err();
    assert!(matches!(err, CapabilityError::PackageMissing { .. }), "got: {err}");
    assert!(err.to_string().contains("rmarkdown"), "got: {err}");
    assert!(render_calls(dir.path()).is_empty(), "the capability check must not render");
}

#[test]
fn resolve_from_settings_yields_working_renderer() {
    let dir = TempDir::new().expect("tempdir");
    let settings = RendererSettings {
        program: fake_rscript(dir.path(), 0),
        quiet: true,
    };
    let renderer = resolve(&settings).expect("resolve");
    assert_eq!(renderer.name(), "rmarkdown");
}

// ---------------------------------------------------------------------------
// 2. Rendering
// ---------------------------------------------------------------------------

#[rstest]
#[case(true, "TRUE")]
#[case(false, "FALSE")]
fn successful_render_passes_quiet_flag(#[case] quiet: bool, #[case] flag: &str) {
    let dir = TempDir::new().expect("tempdir");
    let renderer = RscriptRenderer::resolve(fake_rscript(dir.path(), 0)).expect("resolve");
    let input = dir.path().join("atlas_cdc_estimation_v1.Rmd");
    fs::write(&input, "# Estimation\n").expect("write input");

    renderer.render(&input, quiet).expect("render");

    assert!(dir.path().join("atlas_cdc_estimation_v1.html").exists());
    assert_eq!(
        render_calls(dir.path()),
        vec![format!("{} {flag}", input.display())]
    );
}

#[test]
fn renderer_error_message_is_surfaced() {
    let dir = TempDir::new().expect("tempdir");
    let renderer = RscriptRenderer::resolve(fake_rscript(dir.path(), 0)).expect("resolve");
    let input = dir.path().join("b.Rmd");
    fs::write(&input, "FAIL: bad table\n").expect("write input");

    let err = renderer.render(&input, true).unwrap_err();
    assert!(matches!(err, RenderError::Failed { .. }), "got: {err}");
    assert_eq!(err.to_string(), "bad table");
    assert!(!dir.path().join("b.html").exists());
}

#[test]
fn missing_input_fails_per_document() {
    let dir = TempDir::new().expect("tempdir");
    let renderer = RscriptRenderer::resolve(fake_rscript(dir.path(), 0)).expect("resolve");

    let err = renderer.render(&dir.path().join("ghost.Rmd"), true).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "got: {err}");
}

#[test]
fn program_removed_after_resolution_is_a_spawn_error() {
    let dir = TempDir::new().expect("tempdir");
    let program = fake_rscript(dir.path(), 0);
    let renderer = RscriptRenderer::resolve(&program).expect("resolve");
    fs::remove_file(&program).expect("remove fake");

    let err = renderer.render(&dir.path().join("a.Rmd"), true).unwrap_err();
    assert!(matches!(err, RenderError::Spawn { .. }), "got: {err}");
}
