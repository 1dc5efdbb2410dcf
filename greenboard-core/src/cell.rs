//! Cell and grid types for the materialized spreadsheet input.
//!
//! The source collaborator hands the pipeline a collection of named 2-D
//! grids of scalar cells. Grids are rectangular by convention but sparse in
//! practice: human-maintained sheets have short rows, trailing blanks, and
//! merged regions that arrive as empties. Every accessor here is total -
//! reading outside the stored rows yields `CellValue::Empty`, never a panic.

use serde::{Deserialize, Serialize};

// ============================================================================
// CELL VALUES
// ============================================================================

/// One scalar cell from the source grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum CellValue {
    /// Free-form text
    Text(String),
    /// Numeric cell (spreadsheet numbers are floats)
    Number(f64),
    /// Boolean cell
    Bool(bool),
    /// No value stored
    #[default]
    Empty,
}

impl CellValue {
    /// Text rendering of the cell, untrimmed. Non-text cells render the way
    /// the source displays them ("3", "true"); empties render as "".
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Trimmed text rendering.
    pub fn trimmed(&self) -> String {
        self.as_text().trim().to_string()
    }

    /// True when the cell renders to no visible text.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Boolean coercion used by the config block. `Bool` as-is, `Text`
    /// matches "true"/"false" case-insensitively, `Number` is nonzero-true.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            CellValue::Number(n) => Some(*n != 0.0),
            CellValue::Empty => None,
        }
    }
}

// ============================================================================
// SHEET GRIDS
// ============================================================================

/// One named grid from the source, with the hidden flag the caller uses for
/// exclusion. Immutable once materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetGrid {
    /// Sheet title as shown in the source
    pub title: String,
    /// Hidden sheets are skipped by the pipeline driver
    #[serde(default)]
    pub hidden: bool,
    /// Row-major cell contents; rows may be ragged
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// Create a visible grid from rows.
    pub fn new(title: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            title: title.into(),
            hidden: false,
            rows,
        }
    }

    /// Number of stored rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest stored row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total cell accessor: out-of-range coordinates read as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let grid = SheetGrid::new("Week1", vec![vec![CellValue::Text("a".into())]]);
        assert_eq!(*grid.cell(0, 0), CellValue::Text("a".into()));
        assert_eq!(*grid.cell(0, 5), CellValue::Empty);
        assert_eq!(*grid.cell(9, 0), CellValue::Empty);
    }

    #[test]
    fn test_number_text_rendering_drops_trailing_zero() {
        assert_eq!(CellValue::Number(3.0).as_text(), "3");
        assert_eq!(CellValue::Number(2.5).as_text(), "2.5");
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(CellValue::Bool(false).as_boolean(), Some(false));
        assert_eq!(CellValue::Text("TRUE".into()).as_boolean(), Some(true));
        assert_eq!(CellValue::Text("yes".into()).as_boolean(), None);
        assert_eq!(CellValue::Number(0.0).as_boolean(), Some(false));
        assert_eq!(CellValue::Number(1.0).as_boolean(), Some(true));
    }

    #[test]
    fn test_ragged_rows_have_max_width() {
        let grid = SheetGrid::new(
            "W",
            vec![
                vec![CellValue::Empty; 2],
                vec![CellValue::Empty; 7],
                vec![],
            ],
        );
        assert_eq!(grid.col_count(), 7);
        assert_eq!(grid.row_count(), 3);
    }
}
