//! GREENBOARD Test Utilities
//!
//! Centralized test infrastructure for the workspace:
//! - Fluent grid builder following the source sheets' block layout
//! - Canned squadron fixtures
//! - Proptest generators for identities and count cells

// Re-export core types for convenience
pub use greenboard_core::{
    AchievementEvent, AchievementKind, BoardError, BoardResult, CellValue, ColumnMap, Diagnostic,
    DiagnosticKind, FieldName, OperationBlock, OperationConfig, ParticipantRecord,
    ParticipantStats, RunConfig, SheetGrid, STREAK_THRESHOLD,
};

use proptest::prelude::*;

// ============================================================================
// GRID BUILDER (Fluent API)
// ============================================================================

/// The header row used by the standard fixtures.
pub const STANDARD_HEADERS: [&str; 5] = ["Name", "Callsign", "Bolters", "Wire No.", "Combat Deaths"];

/// Builds grids following the source layout convention: optional config
/// block, then per op a blank/total separator row, a timeslot label, the
/// header row, and the member rows.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    title: String,
    hidden: bool,
    rows: Vec<Vec<CellValue>>,
}

impl GridBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hidden: false,
            rows: Vec::new(),
        }
    }

    /// Mark the sheet hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Push an arbitrary raw row.
    pub fn row(mut self, cells: Vec<CellValue>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Push a row of text cells.
    pub fn text_row(self, cells: &[&str]) -> Self {
        self.row(cells.iter().map(|c| text(c)).collect())
    }

    /// Push an all-empty row.
    pub fn blank_row(self) -> Self {
        self.row(vec![CellValue::Empty; STANDARD_HEADERS.len()])
    }

    /// Push an inline config block at the current position.
    pub fn config_block(mut self, settings: &[(&str, bool)]) -> Self {
        self.rows.push(vec![text("config")]);
        for (key, value) in settings {
            self.rows.push(vec![text(key), CellValue::Bool(*value)]);
        }
        self
    }

    /// Push one operation block with the standard headers. `members` rows
    /// are `[name, callsign, bolters, wire, deaths]`; short rows are padded
    /// with empties. A blank separator row is inserted automatically before
    /// every block after the first row of content.
    pub fn block(mut self, timeslot: &str, members: &[&[&str]]) -> Self {
        if !self.rows.is_empty() {
            self = self.blank_row();
        }
        self = self.text_row(&[timeslot]);
        self = self.text_row(&STANDARD_HEADERS);
        for member in members {
            let mut cells: Vec<CellValue> = member.iter().map(|c| text(c)).collect();
            cells.resize(STANDARD_HEADERS.len(), CellValue::Empty);
            self = self.row(cells);
        }
        self
    }

    pub fn build(self) -> SheetGrid {
        SheetGrid {
            title: self.title,
            hidden: self.hidden,
            rows: self.rows,
        }
    }
}

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

// ============================================================================
// FIXTURES
// ============================================================================

/// A sheet with `ops` sequential blocks in which every listed participant
/// flies a clean op (zero bolters, zero deaths).
pub fn clean_week(title: &str, ops: usize, names: &[&str]) -> SheetGrid {
    let mut builder = GridBuilder::new(title);
    for i in 1..=ops {
        let members: Vec<Vec<&str>> = names
            .iter()
            .map(|n| vec![*n, "", "0", "3", "0"])
            .collect();
        let member_refs: Vec<&[&str]> = members.iter().map(Vec::as_slice).collect();
        builder = builder.block(&format!("Op{i}"), &member_refs);
    }
    builder.build()
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Display names with mixed casing, never blank after trimming.
pub fn arb_display_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,11}"
}

/// Raw count-cell contents: clean counts, failures, and unparsable noise.
pub fn arb_count_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        (1u32..=4).prop_map(|n| n.to_string()),
        Just(String::new()),
        Just("n/a".to_string()),
        Just("-1".to_string()),
    ]
}

/// A sequence of count cells for one participant across `len` ops.
pub fn arb_count_series(len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_count_value(), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_layout_matches_convention() {
        let grid = GridBuilder::new("Week1")
            .block("1900Z", &[&["Maverick", "", "0", "3", "0"]])
            .block("2100Z", &[&["Maverick", "", "1", "", "0"]])
            .build();
        // First block: timeslot at row 0, header at row 1, member at row 2.
        assert_eq!(grid.cell(0, 0).trimmed(), "1900Z");
        assert_eq!(grid.cell(1, 0).trimmed(), "Name");
        assert_eq!(grid.cell(2, 0).trimmed(), "Maverick");
        // Separator blank at row 3, then the second block.
        assert!(grid.cell(3, 0).is_blank());
        assert_eq!(grid.cell(4, 0).trimmed(), "2100Z");
        assert_eq!(grid.cell(5, 0).trimmed(), "Name");
    }

    #[test]
    fn test_clean_week_has_one_header_per_op() {
        let grid = clean_week("Week1", 3, &["Maverick", "Goose"]);
        let headers = grid
            .rows
            .iter()
            .filter(|r| r.first().map(|c| c.trimmed() == "Name").unwrap_or(false))
            .count();
        assert_eq!(headers, 3);
    }
}
