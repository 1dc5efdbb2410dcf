//! Integration tests for grid segmentation
//!
//! Tests verify:
//! - Grids without sentinel rows produce no blocks
//! - No empty-identity member survives the post-assembly filter
//! - Missing headers degrade to diagnostics, never errors
//! - Inline config blocks apply uniformly to every block of a grid

use greenboard_extract::{extract_operations, BLOCK_SENTINEL};
use greenboard_test_utils::{
    arb_count_series, arb_display_name, CellValue, FieldName, GridBuilder, SheetGrid,
};
use proptest::prelude::*;

// ============================================================================
// SENTINEL PROPERTIES
// ============================================================================

#[test]
fn grid_with_zero_sentinels_yields_empty_block_list() {
    let grid = GridBuilder::new("Notes")
        .text_row(&["Squadron roster", "updated weekly"])
        .blank_row()
        .text_row(&["Maverick", "Pete Mitchell"])
        .build();
    let extraction = extract_operations(&grid);
    assert!(extraction.blocks.is_empty());
    assert_eq!(extraction.config, Default::default());
}

#[test]
fn sentinel_matches_name_header_exactly() {
    assert_eq!(BLOCK_SENTINEL, FieldName::Name.header_text());
    // Near-miss sentinels do not open a block
    let grid = GridBuilder::new("Week1")
        .text_row(&["1900Z"])
        .text_row(&["NAME", "Bolters"])
        .text_row(&["Maverick", "0"])
        .build();
    assert!(extract_operations(&grid).blocks.is_empty());
}

// ============================================================================
// MEMBER FILTERING
// ============================================================================

#[test]
fn no_member_with_empty_identity_survives() {
    let grid = GridBuilder::new("Week1")
        .block(
            "1900Z",
            &[
                &["Maverick", "", "0", "3", "0"],
                &["", "", "1", "2", "0"], // name cell blank
                &["Iceman", "", "0", "4", "0"],
            ],
        )
        .build();
    let extraction = extract_operations(&grid);
    let block = &extraction.blocks[0];
    assert_eq!(block.members.len(), 2);
    assert!(block.members.iter().all(|m| !m.key.is_empty()));
    assert!(block.member("iceman").is_some());
    assert!(block.member("").is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any mix of names and raw count values laid out by the builder,
    /// every surviving member has a non-empty, lowercased identity key.
    #[test]
    fn prop_surviving_members_have_normalized_keys(
        names in prop::collection::vec(arb_display_name(), 1..6),
        series in arb_count_series(5),
    ) {
        let mut builder = GridBuilder::new("Week1");
        for (i, value) in series.iter().enumerate() {
            let members: Vec<Vec<&str>> = names
                .iter()
                .map(|n| vec![n.as_str(), "", value.as_str(), "", value.as_str()])
                .collect();
            let refs: Vec<&[&str]> = members.iter().map(Vec::as_slice).collect();
            builder = builder.block(&format!("Op{i}"), &refs);
        }
        let extraction = extract_operations(&builder.build());
        prop_assert_eq!(extraction.blocks.len(), series.len());
        for block in &extraction.blocks {
            for member in &block.members {
                prop_assert!(!member.key.is_empty());
                prop_assert_eq!(member.key.clone(), member.display_name.to_lowercase());
            }
        }
    }
}

#[test]
fn block_header_position_is_discovered_not_assumed() {
    // Header sits at row 5 with informational rows above it
    let grid = GridBuilder::new("Week1")
        .text_row(&["Squadron greenie board"])
        .blank_row()
        .text_row(&["see the roster sheet for callsigns"])
        .blank_row()
        .text_row(&["1900Z"])
        .text_row(&["Name", "Bolters", "Combat Deaths"])
        .text_row(&["Maverick", "0", "0"])
        .text_row(&["Goose", "0", "0"])
        .build();
    let extraction = extract_operations(&grid);
    assert_eq!(extraction.blocks.len(), 1);
    let block = &extraction.blocks[0];
    assert_eq!(block.name, "Week1 1900Z");
    assert_eq!(block.timeslot, "1900Z");
    assert_eq!(block.members.len(), 2);
}

// ============================================================================
// COLUMN DISCOVERY
// ============================================================================

#[test]
fn missing_lso_grade_header_is_a_diagnostic_not_an_error() {
    // Standard fixture headers omit "LSO Grade" entirely
    let grid = GridBuilder::new("Week1")
        .block("1900Z", &[&["Maverick", "", "0", "3", "0"]])
        .build();
    let extraction = extract_operations(&grid);
    let block = &extraction.blocks[0];
    assert_eq!(block.members[0].value(FieldName::LsoGrade), "");
    assert!(extraction
        .diagnostics
        .iter()
        .any(|d| d.to_string().contains("LSO Grade")));
}

#[test]
fn each_block_discovers_its_own_columns() {
    let grid = SheetGrid::new(
        "Week1",
        vec![
            vec![CellValue::Text("1900Z".into())],
            vec![
                CellValue::Text("Name".into()),
                CellValue::Text("Bolters".into()),
            ],
            vec![
                CellValue::Text("Maverick".into()),
                CellValue::Text("2".into()),
            ],
            vec![CellValue::Empty],
            vec![CellValue::Text("2100Z".into())],
            vec![
                CellValue::Text("Name".into()),
                CellValue::Empty,
                CellValue::Text("Bolters".into()),
            ],
            vec![
                CellValue::Text("Maverick".into()),
                CellValue::Empty,
                CellValue::Text("1".into()),
            ],
        ],
    );
    let extraction = extract_operations(&grid);
    assert_eq!(extraction.blocks[0].members[0].value(FieldName::Bolters), "2");
    assert_eq!(extraction.blocks[1].members[0].value(FieldName::Bolters), "1");
}

// ============================================================================
// CONFIG BLOCKS
// ============================================================================

#[test]
fn config_block_applies_to_every_block_in_the_grid() {
    let grid = GridBuilder::new("Week1")
        .config_block(&[("Count Bolters", false)])
        .block("1900Z", &[&["Maverick", "", "2", "", "0"]])
        .block("2100Z", &[&["Maverick", "", "2", "", "0"]])
        .build();
    let extraction = extract_operations(&grid);
    assert_eq!(extraction.blocks.len(), 2);
    for block in &extraction.blocks {
        assert!(!block.config.count_bolters);
        assert!(block.config.count_deaths);
    }
}
