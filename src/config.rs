//! Analysis tuning knobs
//!
//! Defaults match the documented detector constants. A TOML file can override
//! any subset of them:
//!
//! ```toml
//! similarity_threshold = 0.9
//! max_comparisons = 50000
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArchError, Result};

/// Thresholds and limits shared by the metric engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Files shorter than this are never duplication candidates
    pub min_lines: usize,
    /// Minimum shorter/longer line-count ratio for a pair to be compared
    pub size_tolerance: f64,
    /// Maximum checksum distance for a pair to reach the edit-distance check
    pub hash_distance_bound: u64,
    /// Similarity at or above which a pair is reported
    pub similarity_threshold: f64,
    /// Cap on candidate pairs examined per run
    pub max_comparisons: usize,
    /// Files read or parsed in parallel per batch
    pub batch_width: usize,
    /// Lines of preview kept in a duplication snippet
    pub snippet_lines: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_lines: 10,
            size_tolerance: 0.5,
            hash_distance_bound: 10_000,
            similarity_threshold: 0.85,
            max_comparisons: 100_000,
            batch_width: 20,
            snippet_lines: 5,
        }
    }
}

impl AnalysisConfig {
    /// Load overrides from a TOML file; unspecified keys keep their defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ArchError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ArchError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engines cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.size_tolerance) {
            return Err(ArchError::InvalidConfig {
                message: format!("size_tolerance must be in [0, 1], got {}", self.size_tolerance),
            });
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ArchError::InvalidConfig {
                message: format!(
                    "similarity_threshold must be in [0, 1], got {}",
                    self.similarity_threshold
                ),
            });
        }
        if self.batch_width == 0 {
            return Err(ArchError::InvalidConfig {
                message: "batch_width must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
