//! Human-readable report rendering.
//!
//! String assembly only; the structured `PipelineOutput` is the canonical
//! result and callers wanting machine output serialize that instead.

use crate::pipeline::PipelineOutput;
use chrono::Utc;
use std::fmt::Write;

/// Consolidated achievement history, one line per achievement.
pub fn render_achievement_history(output: &PipelineOutput) -> String {
    output.achievement_history.join("\n")
}

/// Concatenated per-block achievement log.
pub fn render_op_achievement_log(output: &PipelineOutput) -> String {
    output.op_achievement_log.join("\n")
}

/// The full report: header, achievement sections, per-participant summary,
/// and any diagnostics recorded during extraction.
pub fn render_report(output: &PipelineOutput) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "GREENBOARD report");
    let _ = writeln!(report, "generated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(
        report,
        "{} op(s), {} participant(s), {} achievement(s)",
        output.blocks.len(),
        output.stats.len(),
        output.events.len()
    );

    if !output.achievement_history.is_empty() {
        let _ = writeln!(report, "\n== Achievement history ==");
        for line in &output.achievement_history {
            let _ = writeln!(report, "{line}");
        }
    }

    if !output.op_achievement_log.is_empty() {
        let _ = writeln!(report, "\n== Per-op achievement log ==");
        for line in &output.op_achievement_log {
            let _ = writeln!(report, "{line}");
        }
    }

    let _ = writeln!(report, "\n== Participants ==");
    for stats in output.stats.values() {
        let _ = writeln!(
            report,
            "{}: no-death streak {} (awards {}), no-bolter streak {} (awards {})",
            stats.display_name,
            stats.death_streak,
            stats.no_death_awards,
            stats.bolter_streak,
            stats.no_bolter_awards
        );
        for line in &stats.narrative {
            let _ = writeln!(report, "  {line}");
        }
    }

    if !output.diagnostics.is_empty() {
        let _ = writeln!(report, "\n== Diagnostics ==");
        for diag in &output.diagnostics {
            let _ = writeln!(report, "{diag}");
        }
    }

    report
}
