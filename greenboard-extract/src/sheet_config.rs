//! Inline config-block resolution.
//!
//! A grid may carry a "config" marker cell anywhere; key/value rows beneath
//! it override the default counting behavior for every block in that grid.
//! The scan below the anchor runs to the last row with no early
//! termination, so a stray matching cell further down the config column is
//! also honored. That mirrors the source sheets' accepted behavior and is
//! deliberately not corrected here.

use greenboard_core::{Diagnostic, OperationConfig, SheetGrid};

const CONFIG_ANCHOR: &str = "config";
const KEY_COUNT_BOLTERS: &str = "count bolters";
const KEY_COUNT_DEATHS: &str = "count deaths";

/// Resolve the grid's `OperationConfig`.
///
/// Row-major scan for the first cell whose trimmed text equals "config"
/// case-insensitively. No anchor returns the defaults unchanged. With an
/// anchor at (r, c), every non-empty cell in column c below row r is matched
/// case-insensitively against the config keys; the flag value is the boolean
/// coercion of the adjacent cell in column c + 1. Unreadable values keep
/// the previous setting and record a diagnostic.
pub fn resolve_config(grid: &SheetGrid, diagnostics: &mut Vec<Diagnostic>) -> OperationConfig {
    let mut config = OperationConfig::default();

    let Some((anchor_row, anchor_col)) = find_anchor(grid) else {
        return config;
    };
    tracing::debug!(
        sheet = %grid.title,
        row = anchor_row,
        col = anchor_col,
        "config block found"
    );

    for row in (anchor_row + 1)..grid.row_count() {
        let key = grid.cell(row, anchor_col).trimmed().to_lowercase();
        if key.is_empty() {
            continue;
        }
        let flag = match key.as_str() {
            KEY_COUNT_BOLTERS => &mut config.count_bolters,
            KEY_COUNT_DEATHS => &mut config.count_deaths,
            _ => continue,
        };
        match grid.cell(row, anchor_col + 1).as_boolean() {
            Some(value) => *flag = value,
            None => {
                tracing::warn!(sheet = %grid.title, key = %key, "unreadable config value");
                diagnostics.push(Diagnostic::unreadable_config_value(&grid.title, &key));
            }
        }
    }

    config
}

/// First cell equal to "config" (trimmed, case-insensitive), row-major.
fn find_anchor(grid: &SheetGrid) -> Option<(usize, usize)> {
    for (row, cells) in grid.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.trimmed().eq_ignore_ascii_case(CONFIG_ANCHOR) {
                return Some((row, col));
            }
        }
    }
    None
}
