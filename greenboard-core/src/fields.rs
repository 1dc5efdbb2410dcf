//! Field vocabulary and column maps.
//!
//! The source sheets carry no fixed schema: each operation block announces
//! its own layout through a header row, and downstream code only ever
//! addresses columns through a discovered `ColumnMap`. The vocabulary below
//! must match the header strings used by existing sheets exactly - changing
//! a string here breaks input compatibility.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// FIELD VOCABULARY
// ============================================================================

/// The fixed set of participant attributes a block header can announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    /// Participant identity / display name
    Name,
    Callsign,
    /// Airframe type (header text "Type")
    AircraftType,
    /// Bolter count for the operation
    Bolters,
    /// Arresting wire caught (header text "Wire No.")
    WireNumber,
    /// Landing signal officer grade
    LsoGrade,
    /// Combat deaths during the operation
    CombatDeaths,
    Promotions,
    Remarks,
}

impl FieldName {
    /// Every field, in header-scan order.
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Callsign,
        FieldName::AircraftType,
        FieldName::Bolters,
        FieldName::WireNumber,
        FieldName::LsoGrade,
        FieldName::CombatDeaths,
        FieldName::Promotions,
        FieldName::Remarks,
    ];

    /// Exact header text the field matches against (trimmed equality).
    pub fn header_text(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Callsign => "Callsign",
            FieldName::AircraftType => "Type",
            FieldName::Bolters => "Bolters",
            FieldName::WireNumber => "Wire No.",
            FieldName::LsoGrade => "LSO Grade",
            FieldName::CombatDeaths => "Combat Deaths",
            FieldName::Promotions => "Promotions",
            FieldName::Remarks => "Remarks",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_text())
    }
}

// ============================================================================
// COLUMN MAPS
// ============================================================================

/// Partial mapping from field to column index, discovered once per block
/// header row and immutable afterwards. Fields with no matching header are
/// simply absent - a valid, non-error state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnMap {
    columns: BTreeMap<FieldName, usize>,
}

impl ColumnMap {
    /// Empty map (no headers matched).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discovered column. First discovery wins; the mapper scans
    /// left-to-right and never remaps a field.
    pub fn insert(&mut self, field: FieldName, col: usize) {
        self.columns.entry(field).or_insert(col);
    }

    /// Column index for a field, if its header was found.
    pub fn get(&self, field: FieldName) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Whether the field's header was found.
    pub fn contains(&self, field: FieldName) -> bool {
        self.columns.contains_key(&field)
    }

    /// Number of resolved fields.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no header matched at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate resolved `(field, column)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, usize)> + '_ {
        self.columns.iter().map(|(f, c)| (*f, *c))
    }
}

// ============================================================================
// TESTS
// ============================================================================
