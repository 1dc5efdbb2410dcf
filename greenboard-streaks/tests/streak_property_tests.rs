//! Property-based tests for streak replay
//!
//! Properties:
//! - `classify` is pure and disabled categories are always NoChange
//! - Threshold monotonicity: 5 consecutive Passed emits exactly one award
//!   and resets; Failed at 4 resets silently
//! - Replay is deterministic: same block list, same accumulator

use greenboard_streaks::{classify, Outcome, StreakEngine, STREAK_THRESHOLD};
use greenboard_test_utils::{
    arb_count_series, AchievementKind, FieldName, OperationBlock, OperationConfig,
    ParticipantRecord,
};
use proptest::prelude::*;

// ============================================================================
// HELPERS
// ============================================================================

fn member(name: &str, bolters: &str, deaths: &str) -> ParticipantRecord {
    let mut record = ParticipantRecord::default();
    record.set_identity(name);
    record.values.insert(FieldName::Bolters, bolters.to_string());
    record
        .values
        .insert(FieldName::CombatDeaths, deaths.to_string());
    record
}

/// One single-member block per element of `deaths`, bolters held clean.
fn blocks_from_death_series(deaths: &[String]) -> Vec<OperationBlock> {
    deaths
        .iter()
        .enumerate()
        .map(|(i, d)| OperationBlock {
            name: format!("Week1 Op{}", i + 1),
            timeslot: format!("Op{}", i + 1),
            config: OperationConfig::default(),
            members: vec![member("Maverick", "0", d)],
        })
        .collect()
}

// ============================================================================
// CLASSIFY PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For any raw value whatsoever, a disabled category is NoChange -
    /// including Failed-shaped input like "3".
    #[test]
    fn prop_disabled_is_always_no_change(raw in ".{0,12}") {
        prop_assert_eq!(classify(&raw, true), Outcome::NoChange);
    }

    /// classify is a function: two calls on the same input agree.
    #[test]
    fn prop_classify_is_pure(raw in ".{0,12}", disabled in any::<bool>()) {
        prop_assert_eq!(classify(&raw, disabled), classify(&raw, disabled));
    }

    /// Parsable positives fail, non-positives pass.
    #[test]
    fn prop_sign_decides_outcome(n in -20i64..=20) {
        let expected = if n > 0 { Outcome::Failed } else { Outcome::Passed };
        prop_assert_eq!(classify(&n.to_string(), false), expected);
    }
}

// ============================================================================
// THRESHOLD MONOTONICITY
// ============================================================================

#[test]
fn five_consecutive_passed_awards_exactly_once_and_resets() {
    let deaths: Vec<String> = vec!["0".to_string(); STREAK_THRESHOLD as usize];
    let acc = StreakEngine::new().replay(&blocks_from_death_series(&deaths));
    let death_awards: Vec<_> = acc
        .events
        .iter()
        .filter(|e| e.kind == AchievementKind::NoDeathStreak)
        .collect();
    assert_eq!(death_awards.len(), 1);
    assert_eq!(death_awards[0].award_occurrence, 1);
    assert_eq!(acc.stats["maverick"].death_streak, 0);
}

#[test]
fn failed_at_four_resets_and_emits_nothing() {
    let mut deaths: Vec<String> = vec!["0".to_string(); 4];
    deaths.push("1".to_string());
    let acc = StreakEngine::new().replay(&blocks_from_death_series(&deaths));
    assert_eq!(acc.stats["maverick"].death_streak, 0);
    assert!(!acc
        .events
        .iter()
        .any(|e| e.kind == AchievementKind::NoDeathStreak));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Award count equals the number of completed clean runs of length 5:
    /// counting directly over the classified series must agree with the
    /// engine's award total.
    #[test]
    fn prop_award_count_matches_series(series in arb_count_series(20)) {
        let acc = StreakEngine::new().replay(&blocks_from_death_series(&series));

        let mut streak = 0u32;
        let mut expected_awards = 0u32;
        for raw in &series {
            match classify(raw, false) {
                Outcome::Failed => streak = 0,
                Outcome::NoChange => {}
                Outcome::Passed => {
                    streak += 1;
                    if streak == STREAK_THRESHOLD {
                        streak = 0;
                        expected_awards += 1;
                    }
                }
            }
        }

        let stats = &acc.stats["maverick"];
        prop_assert_eq!(stats.no_death_awards, expected_awards);
        prop_assert_eq!(stats.death_streak, streak);
        // Narrative carries one death line and one bolter line per block
        prop_assert_eq!(stats.narrative.len(), series.len() * 2);
    }

    /// Replay is deterministic.
    #[test]
    fn prop_replay_is_deterministic(series in arb_count_series(12)) {
        let blocks = blocks_from_death_series(&series);
        let first = StreakEngine::new().replay(&blocks);
        let second = StreakEngine::new().replay(&blocks);
        prop_assert_eq!(first, second);
    }
}
