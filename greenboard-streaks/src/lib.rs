//! GREENBOARD Streaks - Chronological Replay Engine
//!
//! Consumes the ordered block list produced by extraction and replays each
//! participant's results to maintain two independent rolling counters
//! (no-death, no-bolter), emitting achievement events when a counter reaches
//! the fixed threshold of 5.
//!
//! # Ordering is load-bearing
//!
//! Streaks are defined over block sequence order, never over any sorted
//! key. The engine processes blocks strictly in the order given; within one
//! participant's timeline there is no reordering or parallel replay.
//!
//! # Accumulators, not globals
//!
//! All state (per-participant stats, global achievement history, per-block
//! achievement log) lives in an explicit `StreakAccumulator` scoped to one
//! replay. Nothing here has process-wide lifetime.

pub mod classify;
pub mod engine;

pub use classify::{classify, Outcome};
pub use engine::{StreakAccumulator, StreakEngine};

// Re-export the core types the engine's results are made of
pub use greenboard_core::{
    AchievementEvent, AchievementKind, OperationBlock, ParticipantStats, STREAK_THRESHOLD,
};
