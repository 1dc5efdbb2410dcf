//! Streak replay over the ordered block list.
//!
//! For each block, in extractor order, every member's death and bolter
//! results are classified independently and folded into that participant's
//! rolling counters. A counter reaching `STREAK_THRESHOLD` emits an
//! achievement, resets, and bumps the participant's award occurrence count
//! for that category. The award counter paired with each streak is that
//! streak's own category.

use crate::classify::{classify, Outcome};
use greenboard_core::{
    AchievementEvent, AchievementKind, FieldName, OperationBlock, ParticipantStats,
    STREAK_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// ACCUMULATOR
// ============================================================================

/// All state produced by one replay. Scoped to the run; nothing global.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreakAccumulator {
    /// Per-participant stats, keyed by normalized identity
    pub stats: BTreeMap<String, ParticipantStats>,
    /// Global achievement history lines, in emission order
    pub achievement_history: Vec<String>,
    /// Per-block achievement log lines, in emission order
    pub op_achievement_log: Vec<String>,
    /// Structured achievement events, in emission order
    pub events: Vec<AchievementEvent>,
}

// ============================================================================
// ENGINE
// ============================================================================

/// The replay engine. Stateless between runs; every replay builds a fresh
/// accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakEngine;

impl StreakEngine {
    pub fn new() -> Self {
        Self
    }

    /// Replay `blocks` in the given order and return the accumulated
    /// result. Participants absent from a block are untouched by it.
    pub fn replay(&self, blocks: &[OperationBlock]) -> StreakAccumulator {
        let mut acc = StreakAccumulator::default();

        for block in blocks {
            for member in &block.members {
                let stats = acc
                    .stats
                    .entry(member.key.clone())
                    .or_insert_with(|| ParticipantStats::new(&member.display_name));

                apply_category(
                    stats,
                    AchievementKind::NoDeathStreak,
                    member.value(FieldName::CombatDeaths),
                    !block.config.count_deaths,
                    &block.name,
                    &mut acc.achievement_history,
                    &mut acc.op_achievement_log,
                    &mut acc.events,
                );
                apply_category(
                    stats,
                    AchievementKind::NoBolterStreak,
                    member.value(FieldName::Bolters),
                    !block.config.count_bolters,
                    &block.name,
                    &mut acc.achievement_history,
                    &mut acc.op_achievement_log,
                    &mut acc.events,
                );
            }
        }

        tracing::debug!(
            participants = acc.stats.len(),
            achievements = acc.events.len(),
            "streak replay complete"
        );
        acc
    }
}

/// Fold one category of one member's block result into their stats.
#[allow(clippy::too_many_arguments)]
fn apply_category(
    stats: &mut ParticipantStats,
    kind: AchievementKind,
    raw: &str,
    disabled: bool,
    block_name: &str,
    history: &mut Vec<String>,
    op_log: &mut Vec<String>,
    events: &mut Vec<AchievementEvent>,
) {
    let (noun, singular) = match kind {
        AchievementKind::NoDeathStreak => ("combat deaths", "combat death(s)"),
        AchievementKind::NoBolterStreak => ("bolters", "bolter(s)"),
    };

    let outcome = classify(raw, disabled);
    let mut line = match outcome {
        Outcome::Failed => {
            set_streak(stats, kind, 0);
            format!("{block_name}: {} {singular} logged, streak reset", raw.trim())
        }
        Outcome::Passed => {
            let streak = stats.streak(kind) + 1;
            set_streak(stats, kind, streak);
            format!("{block_name}: no {noun} (streak {streak})")
        }
        Outcome::NoChange => format!("{block_name}: {noun} not logged"),
    };

    if outcome == Outcome::Passed && stats.streak(kind) == STREAK_THRESHOLD {
        set_streak(stats, kind, 0);
        let occurrence = add_award(stats, kind);

        line.push_str(&format!(" [{} #{occurrence}]", kind.award_label()));
        history.push(format!(
            "After {block_name}, {} has not {} in {STREAK_THRESHOLD} ops!",
            stats.display_name,
            kind.verb()
        ));
        op_log.push(format!(
            "{block_name}: {} earned the {} (x{occurrence})",
            stats.display_name,
            kind.award_label()
        ));
        events.push(AchievementEvent {
            block_name: block_name.to_string(),
            display_name: stats.display_name.clone(),
            kind,
            award_occurrence: occurrence,
        });
    }

    stats.narrative.push(line);
}

fn set_streak(stats: &mut ParticipantStats, kind: AchievementKind, value: u32) {
    match kind {
        AchievementKind::NoDeathStreak => stats.death_streak = value,
        AchievementKind::NoBolterStreak => stats.bolter_streak = value,
    }
}

/// Increment the award occurrence count and return the new (1-based) value.
fn add_award(stats: &mut ParticipantStats, kind: AchievementKind) -> u32 {
    match kind {
        AchievementKind::NoDeathStreak => {
            stats.no_death_awards += 1;
            stats.no_death_awards
        }
        AchievementKind::NoBolterStreak => {
            stats.no_bolter_awards += 1;
            stats.no_bolter_awards
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
