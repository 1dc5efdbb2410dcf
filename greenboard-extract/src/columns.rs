//! Column discovery by header-text matching.
//!
//! Each block announces its layout in its header row; nothing downstream may
//! rely on fixed column positions. Matching is exact trimmed string equality
//! against the vocabulary's header texts.

use greenboard_core::{ColumnMap, Diagnostic, FieldName, SheetGrid};

/// Build a `ColumnMap` from the header row at `header_row`.
///
/// Scans columns left-to-right within that row only. For each vocabulary
/// field the first column whose trimmed text equals the expected header is
/// recorded; fields with no match are omitted from the map and recorded as
/// diagnostics. Never fails.
pub fn map_columns(
    grid: &SheetGrid,
    header_row: usize,
    block_name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> ColumnMap {
    let mut map = ColumnMap::new();
    let width = grid.rows.get(header_row).map(Vec::len).unwrap_or(0);

    for col in 0..width {
        let text = grid.cell(header_row, col).trimmed();
        if text.is_empty() {
            continue;
        }
        for field in FieldName::ALL {
            if text == field.header_text() {
                map.insert(field, col);
            }
        }
    }

    for field in FieldName::ALL {
        if !map.contains(field) {
            tracing::warn!(
                sheet = %grid.title,
                block = %block_name,
                header = field.header_text(),
                "header not found in block, field will be absent"
            );
            diagnostics.push(Diagnostic::missing_column(&grid.title, block_name, field));
        }
    }

    map
}
