//! Optional `knitwork.yaml` in the working directory.
//!
//! ```yaml
//! pattern: "atlas_cdc_estimation*.Rmd"
//! renderer:
//!   program: Rscript
//!   quiet: true
//! ```
//!
//! Every key is optional. Command-line flags and environment variables are
//! layered on top by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::DiscoveryPattern;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "knitwork.yaml";

/// Program used to reach R when nothing else is configured.
pub const DEFAULT_RSCRIPT: &str = "Rscript";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Discovery glob used when no documents are named.
    pub pattern: DiscoveryPattern,
    pub renderer: RendererSettings,
}

/// How to reach the external renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererSettings {
    /// `Rscript` executable; a bare name is looked up on `PATH`.
    pub program: PathBuf,
    /// Ask the renderer to suppress its own diagnostics.
    pub quiet: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_RSCRIPT),
            quiet: true,
        }
    }
}

/// `<dir>/knitwork.yaml` — pure, no I/O.
pub fn config_path_at(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load `<dir>/knitwork.yaml`.
///
/// A missing file yields [`Config::default`]. Malformed YAML, unknown keys
/// and invalid patterns yield [`ConfigError::Parse`] with the file path.
pub fn load_at(dir: &Path) -> Result<Config, ConfigError> {
    let path = config_path_at(dir);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    // An empty file deserializes as unit, not as a mapping.
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config =
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(path = %path.display(), pattern = %config.pattern, "loaded config");
    Ok(config)
}

/// `load_at` convenience wrapper over the process working directory.
pub fn load() -> Result<Config, ConfigError> {
    load_at(Path::new("."))
}
