//! Domain types shared by the knitwork crates.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};

use crate::error::DiscoveryError;

/// Glob used when no documents are named on the command line.
pub const DEFAULT_PATTERN: &str = "atlas_cdc_estimation*.Rmd";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

// ---------------------------------------------------------------------------
// DiscoveryPattern
// ---------------------------------------------------------------------------

/// A validated, single-component file name glob such as
/// `atlas_cdc_estimation*.Rmd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiscoveryPattern(Pattern);

impl DiscoveryPattern {
    pub fn new(pattern: &str) -> Result<Self, DiscoveryError> {
        if pattern.contains('/') || pattern.contains(std::path::MAIN_SEPARATOR) {
            return Err(DiscoveryError::NestedPattern {
                pattern: pattern.to_owned(),
            });
        }
        Pattern::new(pattern)
            .map(Self)
            .map_err(|source| DiscoveryError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Whether a bare file name matches. Leading dots must be literal.
    pub fn matches(&self, file_name: &str) -> bool {
        self.0.matches_with(file_name, MATCH_OPTIONS)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for DiscoveryPattern {
    fn default() -> Self {
        Self(Pattern::new(DEFAULT_PATTERN).expect("default pattern is a valid glob"))
    }
}

impl fmt::Display for DiscoveryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DiscoveryPattern {
    type Error = DiscoveryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<DiscoveryPattern> for String {
    fn from(p: DiscoveryPattern) -> Self {
        p.as_str().to_owned()
    }
}

// ---------------------------------------------------------------------------
// InputList
// ---------------------------------------------------------------------------

/// Where the document list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Named on the command line, used verbatim.
    Explicit,
    /// Found by matching the discovery pattern.
    Discovered,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => f.write_str("explicit"),
            Self::Discovered => f.write_str("discovered"),
        }
    }
}

/// Ordered list of documents to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputList {
    pub files: Vec<PathBuf>,
    pub source: InputSource,
}

impl InputList {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_matches_estimation_documents() {
        let p = DiscoveryPattern::default();
        assert!(p.matches("atlas_cdc_estimation.Rmd"));
        assert!(p.matches("atlas_cdc_estimation_v2.Rmd"));
        assert!(!p.matches("atlas_cdc_estimation_v2.rmd"));
        assert!(!p.matches("atlas_cdc_estimation_v2.Rmd.bak"));
        assert!(!p.matches("notes.Rmd"));
    }

    #[test]
    fn nested_pattern_is_rejected() {
        let err = DiscoveryPattern::new("reports/*.Rmd").unwrap_err();
        assert!(matches!(err, DiscoveryError::NestedPattern { .. }), "got: {err}");
    }

    #[test]
    fn malformed_glob_is_rejected() {
        let err = DiscoveryPattern::new("atlas[.Rmd").unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidPattern { .. }), "got: {err}");
        assert!(err.to_string().contains("atlas[.Rmd"));
    }

    #[test]
    fn pattern_round_trips_through_yaml() {
        let p = DiscoveryPattern::new("report_*.Rmd").expect("pattern");
        let yaml = serde_yaml::to_string(&p).expect("serialize");
        let back: DiscoveryPattern = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, p);
    }
}
