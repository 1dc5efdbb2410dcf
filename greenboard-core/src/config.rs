//! Run configuration.
//!
//! Caller-supplied exclusion rules evaluated by the pipeline driver before a
//! grid reaches the extractor: informational sheets by title, hidden sheets
//! by flag. The extractor itself never sees excluded grids.

use crate::cell::SheetGrid;
use serde::{Deserialize, Serialize};

/// Exclusion configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Sheet titles to skip outright (case-insensitive match)
    #[serde(default)]
    pub excluded_titles: Vec<String>,
    /// Skip sheets flagged hidden in the source
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,
}

fn default_skip_hidden() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            excluded_titles: Vec::new(),
            skip_hidden: true,
        }
    }
}

impl RunConfig {
    /// Whether the driver should hand this grid to the extractor.
    pub fn should_process(&self, grid: &SheetGrid) -> bool {
        if self.skip_hidden && grid.hidden {
            return false;
        }
        !self
            .excluded_titles
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&grid.title))
    }
}
