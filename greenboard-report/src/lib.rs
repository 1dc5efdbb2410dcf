//! GREENBOARD Report - Pipeline Driver and Rendering
//!
//! Composes the extract and streaks crates into one batch run:
//!
//! 1. Filter hidden/excluded grids (caller-supplied `RunConfig`)
//! 2. Extract operation blocks from each remaining grid, in input order
//! 3. Replay streaks over the concatenated block list
//! 4. Render the consolidated report strings
//!
//! A run either completes with the full structured `PipelineOutput` or
//! aborts at the input boundary; there is no partial result.

pub mod pipeline;
pub mod render;

pub use pipeline::{run, PipelineOutput};
pub use render::{render_achievement_history, render_op_achievement_log, render_report};

// Re-export what callers need to invoke a run
pub use greenboard_core::{BoardError, BoardResult, RunConfig, SheetGrid};
