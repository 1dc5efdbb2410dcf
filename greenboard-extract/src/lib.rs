//! GREENBOARD Extract - Grid Segmentation
//!
//! Turns one loosely-formatted sheet grid into an ordered list of typed
//! operation blocks. The grid has no fixed schema: blocks sit at variable
//! row positions, announce their own column layout through a header row, and
//! are delimited by a sentinel cell.
//!
//! # Pipeline position
//!
//! ```text
//! SheetGrid → GridScanner ─┬─ ConfigResolver (once per grid)
//!                          ├─ ColumnMapper   (once per block)
//!                          └─ MemberRowParser (once per row)
//!                        → Vec<OperationBlock> + Vec<Diagnostic>
//! ```
//!
//! Extraction never fails: per-field and per-cell problems degrade to
//! diagnostics, and a grid with no sentinel rows yields an empty block list.

pub mod columns;
pub mod rows;
pub mod scanner;
pub mod sheet_config;

pub use columns::map_columns;
pub use rows::parse_member_row;
pub use scanner::{extract_operations, GridExtraction, GridScanner, BLOCK_SENTINEL};
pub use sheet_config::resolve_config;
