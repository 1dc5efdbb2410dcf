//! The batch pipeline driver.

use greenboard_core::{Diagnostic, OperationBlock, ParticipantStats, RunConfig, SheetGrid};
use greenboard_extract::extract_operations;
use greenboard_streaks::{AchievementEvent, StreakEngine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full structured result of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Every extracted block, in grid order then top-to-bottom order
    pub blocks: Vec<OperationBlock>,
    /// Per-participant stats keyed by normalized identity
    pub stats: BTreeMap<String, ParticipantStats>,
    /// Global achievement history lines
    pub achievement_history: Vec<String>,
    /// Per-block achievement log lines
    pub op_achievement_log: Vec<String>,
    /// Structured achievement events
    pub events: Vec<AchievementEvent>,
    /// Soft warnings from extraction
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the pipeline over a materialized grid collection.
///
/// Grids are processed in the order given; block order within a grid is
/// top-to-bottom discovery order. Hidden grids and excluded titles never
/// reach the extractor. The structured output is always returned in full.
pub fn run(grids: &[SheetGrid], config: &RunConfig) -> PipelineOutput {
    let mut blocks = Vec::new();
    let mut diagnostics = Vec::new();

    for grid in grids {
        if !config.should_process(grid) {
            tracing::debug!(sheet = %grid.title, "grid excluded from run");
            continue;
        }
        let extraction = extract_operations(grid);
        blocks.extend(extraction.blocks);
        diagnostics.extend(extraction.diagnostics);
    }

    let acc = StreakEngine::new().replay(&blocks);

    PipelineOutput {
        blocks,
        stats: acc.stats,
        achievement_history: acc.achievement_history,
        op_achievement_log: acc.op_achievement_log,
        events: acc.events,
        diagnostics,
    }
}
