//! Streak accumulation results.
//!
//! `ParticipantStats` is created lazily the first time a participant is seen
//! and mutated only by the streak engine; it lives for one pipeline run.
//! `AchievementEvent` records a threshold crossing and is emitted into both
//! the global achievement history and the per-block achievement log.

use serde::{Deserialize, Serialize};

// ============================================================================
// ACHIEVEMENTS
// ============================================================================

/// Which streak category crossed the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementKind {
    /// Five consecutive counted ops without a combat death
    NoDeathStreak,
    /// Five consecutive counted ops without a bolter
    NoBolterStreak,
}

impl AchievementKind {
    /// Verb phrase used in the achievement history line.
    pub fn verb(&self) -> &'static str {
        match self {
            AchievementKind::NoDeathStreak => "died",
            AchievementKind::NoBolterStreak => "boltered",
        }
    }

    /// Short award label used in the per-block log.
    pub fn award_label(&self) -> &'static str {
        match self {
            AchievementKind::NoDeathStreak => "no-death streak award",
            AchievementKind::NoBolterStreak => "no-bolter streak award",
        }
    }
}

/// One threshold crossing for one participant in one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEvent {
    /// Block in which the streak completed
    pub block_name: String,
    /// Participant display name (original casing)
    pub display_name: String,
    pub kind: AchievementKind,
    /// Cumulative count of this award for this participant, 1-based
    pub award_occurrence: u32,
}

// ============================================================================
// PARTICIPANT STATS
// ============================================================================

/// Accumulated state for one participant across the ordered block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Display name from the first block the participant appeared in
    pub display_name: String,
    /// Narrative log lines, one entry per evaluated category per block
    pub narrative: Vec<String>,
    /// Rolling count of consecutive death-free counted ops
    pub death_streak: u32,
    /// Rolling count of consecutive bolter-free counted ops
    pub bolter_streak: u32,
    /// Times the no-death award has been earned
    pub no_death_awards: u32,
    /// Times the no-bolter award has been earned
    pub no_bolter_awards: u32,
}

impl ParticipantStats {
    /// Fresh stats for a participant first seen under `display_name`.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Rolling counter for a category.
    pub fn streak(&self, kind: AchievementKind) -> u32 {
        match kind {
            AchievementKind::NoDeathStreak => self.death_streak,
            AchievementKind::NoBolterStreak => self.bolter_streak,
        }
    }

    /// Award occurrence count for a category.
    pub fn awards(&self, kind: AchievementKind) -> u32 {
        match kind {
            AchievementKind::NoDeathStreak => self.no_death_awards,
            AchievementKind::NoBolterStreak => self.no_bolter_awards,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
