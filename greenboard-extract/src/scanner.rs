//! Grid scanning and operation-block extraction.
//!
//! A stateful cursor walk over the grid's rows, in the style of a lexer:
//! the scanner owns a row cursor, recognizes block-header sentinels, and
//! extracts member rows with an explicit, isolated lookahead check. The
//! storage representation never matters - all access goes through the
//! grid's total `cell` accessor.
//!
//! # Block layout convention
//!
//! ```text
//! row r-1 | 1900Z          <- timeslot label
//! row r   | Name | Callsign | ... | Combat Deaths     <- header (sentinel)
//! row r+1 | Maverick | ...                            <- member rows
//! ...
//! row m+1 | (blank or totals)   <- one blank/total row between blocks
//! row m+2 | 2100Z               <- next timeslot
//! row m+3 | Name | ...          <- next header
//! ```
//!
//! Member extraction stops before consuming row `i` when the sentinel sits
//! at `i + 2`, which leaves exactly the blank/total row and the timeslot row
//! unconsumed between blocks.

use crate::columns::map_columns;
use crate::rows::parse_member_row;
use crate::sheet_config::resolve_config;
use greenboard_core::{Diagnostic, OperationBlock, OperationConfig, SheetGrid};

/// Cell text marking a block header row in column 0. Matches the Name
/// field's header exactly.
pub const BLOCK_SENTINEL: &str = "Name";

/// Everything extracted from one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridExtraction {
    /// Blocks in top-to-bottom discovery order
    pub blocks: Vec<OperationBlock>,
    /// The per-grid config shared by all blocks
    pub config: OperationConfig,
    /// Soft warnings accumulated during extraction
    pub diagnostics: Vec<Diagnostic>,
}

/// Extract every operation block from a grid.
///
/// The caller is responsible for exclusion (hidden sheets, excluded titles);
/// any grid handed in is scanned. A grid with no sentinel rows yields an
/// empty block list.
pub fn extract_operations(grid: &SheetGrid) -> GridExtraction {
    GridScanner::new(grid).extract()
}

/// Cursor-based scanner over one grid.
pub struct GridScanner<'a> {
    grid: &'a SheetGrid,
    row: usize,
    config: OperationConfig,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> GridScanner<'a> {
    /// Create a scanner positioned at the top of the grid. The grid's
    /// config block (if any) is resolved here, once, and shared by every
    /// block extracted afterwards.
    pub fn new(grid: &'a SheetGrid) -> Self {
        let mut diagnostics = Vec::new();
        let config = resolve_config(grid, &mut diagnostics);
        Self {
            grid,
            row: 0,
            config,
            diagnostics,
        }
    }

    /// Scan the whole grid and return the blocks in discovery order.
    pub fn extract(mut self) -> GridExtraction {
        let mut blocks = Vec::new();

        while self.row < self.grid.row_count() {
            if self.is_header(self.row) {
                blocks.push(self.extract_block());
            } else {
                self.row += 1;
            }
        }

        tracing::debug!(
            sheet = %self.grid.title,
            blocks = blocks.len(),
            "grid scan complete"
        );
        GridExtraction {
            blocks,
            config: self.config,
            diagnostics: self.diagnostics,
        }
    }

    /// A row is a block header iff column 0 holds the sentinel. Total: rows
    /// past the end read as empty and are never headers.
    fn is_header(&self, row: usize) -> bool {
        self.grid.cell(row, 0).trimmed() == BLOCK_SENTINEL
    }

    /// Extract the block whose header sits at the cursor, leaving the
    /// cursor on the first unconsumed row after its members.
    fn extract_block(&mut self) -> OperationBlock {
        let header_row = self.row;
        let timeslot = if header_row == 0 {
            String::new()
        } else {
            self.grid.cell(header_row - 1, 0).trimmed()
        };

        let mut block = OperationBlock::new(&self.grid.title, timeslot, self.config);
        let columns = map_columns(self.grid, header_row, &block.name, &mut self.diagnostics);

        self.row = header_row + 1;
        while self.row < self.grid.row_count() {
            // Lookahead of 2: stop before the blank/total row preceding the
            // next block's timeslot and header.
            if self.is_header(self.row + 2) {
                break;
            }
            block.members.push(parse_member_row(self.grid, self.row, &columns));
            self.row += 1;
        }

        // Blank rows were consumed to keep the lookahead arithmetic honest;
        // drop them only now that the block is assembled.
        block.members.retain(|m| !m.is_empty());
        block
    }
}
