//! Member row parsing.
//!
//! Projects one grid row into a `ParticipantRecord` through a block's
//! discovered `ColumnMap`. Rows with a blank Name cell come back empty and
//! are filtered by the scanner after block assembly, not here: excluding
//! them during extraction would break the row-count-based lookahead.

use greenboard_core::{ColumnMap, FieldName, ParticipantRecord, SheetGrid};

/// Read the cells of `row` named by `columns` into a record.
///
/// Every mapped field is stored under its raw (untrimmed-interior, but
/// edge-trimmed) text rendering; blank cells store "". The Name cell, when
/// non-empty, sets the normalized identity key and the display name.
pub fn parse_member_row(grid: &SheetGrid, row: usize, columns: &ColumnMap) -> ParticipantRecord {
    let mut record = ParticipantRecord::default();

    for (field, col) in columns.iter() {
        let text = grid.cell(row, col).trimmed();
        if field == FieldName::Name {
            record.set_identity(&text);
        }
        record.values.insert(field, text);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenboard_core::CellValue;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn standard_map() -> ColumnMap {
        let mut map = ColumnMap::new();
        map.insert(FieldName::Name, 0);
        map.insert(FieldName::Bolters, 1);
        map.insert(FieldName::CombatDeaths, 2);
        map
    }

    #[test]
    fn test_mapped_fields_are_read_by_column() {
        let grid = SheetGrid::new(
            "Week1",
            vec![vec![text(" Maverick"), CellValue::Number(2.0), text("0")]],
        );
        let record = parse_member_row(&grid, 0, &standard_map());
        assert_eq!(record.key, "maverick");
        assert_eq!(record.display_name, "Maverick");
        assert_eq!(record.value(FieldName::Bolters), "2");
        assert_eq!(record.value(FieldName::CombatDeaths), "0");
    }

    #[test]
    fn test_blank_name_yields_empty_record() {
        let grid = SheetGrid::new(
            "Week1",
            vec![vec![CellValue::Empty, text("1"), text("0")]],
        );
        let record = parse_member_row(&grid, 0, &standard_map());
        assert!(record.is_empty());
        // Other mapped values are still read; the caller filters later
        assert_eq!(record.value(FieldName::Bolters), "1");
    }

    #[test]
    fn test_unmapped_fields_stay_absent() {
        let grid = SheetGrid::new("Week1", vec![vec![text("Goose")]]);
        let record = parse_member_row(&grid, 0, &standard_map());
        assert_eq!(record.value(FieldName::LsoGrade), "");
        assert!(!record.values.contains_key(&FieldName::LsoGrade));
    }
}
