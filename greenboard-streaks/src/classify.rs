//! Result classification.
//!
//! The single transition function behind both streak categories. Pure:
//! same inputs always give the same outcome, and a disabled category is
//! `NoChange` no matter what the cell says.

use serde::{Deserialize, Serialize};

/// Outcome of one participant's result in one block, for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No information this block: counter stays where it is
    NoChange,
    /// No qualifying negative event: counter increments
    Passed,
    /// A qualifying negative event occurred: counter resets
    Failed,
}

/// Classify a raw cell value.
///
/// - Category disabled by the grid's config: `NoChange`, unconditionally.
/// - Empty or unparsable integer: `NoChange` (missing data is not an error).
/// - Parsed value > 0: `Failed`.
/// - Parsed value <= 0 (zero included): `Passed`.
pub fn classify(raw: &str, disabled: bool) -> Outcome {
    if disabled {
        return Outcome::NoChange;
    }
    match raw.trim().parse::<i64>() {
        Err(_) => Outcome::NoChange,
        Ok(n) if n > 0 => Outcome::Failed,
        Ok(_) => Outcome::Passed,
    }
}
