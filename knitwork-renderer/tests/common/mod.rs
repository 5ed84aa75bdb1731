//! A shell stand-in for `Rscript`.
//!
//! The capability check (`--vanilla -e <expr>`) exits with the configured status.
//! A render call (`--vanilla -e <expr> <input> <quiet>`) appends
//! `<input> <quiet>` to `calls.log` next to the script, then:
//! - fails with the marker protocol if the input is missing, or if it
//!   contains a `FAIL: <message>` line;
//! - otherwise writes `<input stem>.html` beside the input and exits 0.
//!
//! With quiet `FALSE` it also chatters on both streams, like knitr does.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const SCRIPT: &str = r#"#!/bin/sh
here=$(cd "$(dirname "$0")" && pwd)
if [ "$#" -lt 5 ]; then
  exit __CHECK_STATUS__
fi
input="$4"
echo "$input $5" >> "$here/calls.log"
if [ "$5" = "FALSE" ]; then
  echo "output file: ${input%.Rmd}.knit.md" >&2
fi
if [ ! -f "$input" ]; then
  echo "knitwork-error: The file '$input' does not exist." >&2
  exit 1
fi
if grep -q '^FAIL: ' "$input"; then
  msg=$(sed -n 's/^FAIL: //p' "$input" | head -n 1)
  echo "Quitting from lines 1-3 ($input)" >&2
  echo "knitwork-error: $msg" >&2
  exit 1
fi
if [ "$5" = "FALSE" ]; then
  echo "processing file: $input"
fi
: > "${input%.Rmd}.html"
exit 0
"#;

/// Write an executable fake `Rscript` into `dir` and return its path.
pub fn fake_rscript(dir: &Path, check_status: i32) -> PathBuf {
    let path = dir.join("fake-rscript");
    fs::write(&path, SCRIPT.replace("__CHECK_STATUS__", &check_status.to_string()))
        .expect("write fake rscript");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake rscript");
    path
}

/// Lines of `calls.log` written by the fake, in call order.
pub fn render_calls(dir: &Path) -> Vec<String> {
    match fs::read_to_string(dir.join("calls.log")) {
        Ok(log) => log.lines().map(str::to_owned).collect(),
        Err(_) => vec![],
    }
}
