//! Extracted operation records.
//!
//! An `OperationBlock` is one sentinel-delimited segment of a grid: a named
//! event (sheet title + timeslot) with the per-grid counting config and the
//! member rows read under its header. Blocks are immutable once extracted
//! and owned by the pipeline run.

use crate::fields::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// OPERATION CONFIG
// ============================================================================

/// Per-grid counting behavior, overridable by an inline config block.
/// Applies uniformly to every block extracted from the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationConfig {
    pub count_bolters: bool,
    pub count_deaths: bool,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            count_bolters: true,
            count_deaths: true,
        }
    }
}

// ============================================================================
// PARTICIPANT RECORDS
// ============================================================================

/// One member row, keyed by field. The identity key is the lowercased,
/// trimmed display name; the display name keeps its original casing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Normalized identity key, stable and case-insensitive
    pub key: String,
    /// Display name as written in the sheet
    pub display_name: String,
    /// Raw cell text per resolved field
    pub values: BTreeMap<FieldName, String>,
}

impl ParticipantRecord {
    /// Set the identity from the raw Name cell. Empty or whitespace-only
    /// input leaves the record empty.
    pub fn set_identity(&mut self, raw_name: &str) {
        let trimmed = raw_name.trim();
        if !trimmed.is_empty() {
            self.key = trimmed.to_lowercase();
            self.display_name = trimmed.to_string();
        }
    }

    /// Raw value for a field; "" when the field was unmapped or the cell
    /// was blank.
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// A record with no identity is a blank or structural row and is
    /// filtered out after block assembly.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

// ============================================================================
// OPERATION BLOCKS
// ============================================================================

/// One extracted operation: name, timeslot, counting config, and the member
/// rows in sheet order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationBlock {
    /// "<sheet title> <timeslot>"
    pub name: String,
    /// Timeslot label read from the cell above the block header
    pub timeslot: String,
    /// Shared per-grid counting config
    pub config: OperationConfig,
    /// Member records in top-to-bottom sheet order
    pub members: Vec<ParticipantRecord>,
}

impl OperationBlock {
    /// Create an empty block for a sheet/timeslot pair.
    pub fn new(sheet_title: &str, timeslot: impl Into<String>, config: OperationConfig) -> Self {
        let timeslot = timeslot.into();
        let name = if timeslot.is_empty() {
            sheet_title.to_string()
        } else {
            format!("{sheet_title} {timeslot}")
        };
        Self {
            name,
            timeslot,
            config,
            members: Vec::new(),
        }
    }

    /// Look up a member by identity key.
    pub fn member(&self, key: &str) -> Option<&ParticipantRecord> {
        self.members.iter().find(|m| m.key == key)
    }
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// For any raw name, the identity key is the lowercased trimmed
        /// form and the display name keeps the original casing; blank
        /// names leave the record empty.
        #[test]
        fn prop_identity_key_is_stable_and_case_insensitive(raw in ".{0,16}") {
            let mut record = ParticipantRecord::default();
            record.set_identity(&raw);
            let trimmed = raw.trim();
            prop_assert_eq!(record.is_empty(), trimmed.is_empty());
            if !trimmed.is_empty() {
                prop_assert_eq!(record.display_name.as_str(), trimmed);
                prop_assert_eq!(record.key.clone(), trimmed.to_lowercase());
            }
        }
    }
}
