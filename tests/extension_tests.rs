//! Draw-pass tests for the row header, column header and main pane glyph
//! extensions, asserted against recorded drawing operations.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::collections::HashSet;

use sheetglyph::extension::{
    ColumnHeaderGlyphs, GlyphTable, MainGlyphs, RowHeaderGlyphs, SheetExtension,
};
use sheetglyph::layout::{RowColumnSegment, SheetSkeleton};
use sheetglyph::render::{
    DrawOp, RecordingContext, Scale, FIX_ONE_PIXEL_BLUR_OFFSET, MIDDLE_CELL_POS_MAGIC_NUMBER,
};
use test_case::test_case;

/// Three fruits, rows ending at 10, 20, 20 (row 2 hidden), 40.
fn fruit_skeleton() -> SheetSkeleton {
    SheetSkeleton {
        row_column_segment: RowColumnSegment::new(0, 3, 0, 3),
        row_height_accumulation: Some(vec![10.0, 20.0, 20.0, 40.0]),
        column_width_accumulation: Some(vec![30.0, 60.0, 60.0, 100.0]),
        row_total_height: Some(40.0),
        column_total_width: Some(100.0),
        row_header_width: 30.0,
        column_header_height: 20.0,
    }
}

fn fruits() -> GlyphTable {
    GlyphTable::new(["🍎", "🍌", "🍒"])
}

fn extensions() -> Vec<Box<dyn SheetExtension>> {
    vec![
        Box::new(RowHeaderGlyphs::new().with_glyphs(fruits())),
        Box::new(ColumnHeaderGlyphs::new().with_glyphs(fruits())),
        Box::new(MainGlyphs::new().with_glyphs(fruits())),
    ]
}

fn record(ext: &dyn SheetExtension, scale: Scale, skeleton: &SheetSkeleton) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    ext.draw(&mut ctx, scale, skeleton);
    ctx
}

// ============================================================================
// Incomplete skeletons
// ============================================================================

#[test_case(|s: &mut SheetSkeleton| s.row_height_accumulation = None; "no row accumulation")]
#[test_case(|s: &mut SheetSkeleton| s.column_width_accumulation = None; "no column accumulation")]
#[test_case(|s: &mut SheetSkeleton| s.row_total_height = None; "no row total")]
#[test_case(|s: &mut SheetSkeleton| s.column_total_width = None; "no column total")]
fn test_incomplete_skeleton_draws_nothing(strip: fn(&mut SheetSkeleton)) {
    let mut skeleton = fruit_skeleton();
    strip(&mut skeleton);

    for ext in extensions() {
        let ctx = record(ext.as_ref(), Scale::default(), &skeleton);
        assert!(ctx.is_empty(), "{} drew {:?}", ext.key(), ctx.ops());
    }
}

#[test]
fn test_default_skeleton_draws_nothing() {
    for ext in extensions() {
        assert!(record(ext.as_ref(), Scale::default(), &SheetSkeleton::default()).is_empty());
    }
}

// ============================================================================
// Row header
// ============================================================================

#[test]
fn test_row_header_fruit_scenario() {
    let ext = RowHeaderGlyphs::new()
        .with_glyphs(fruits())
        .with_glyph_offset(0.0);
    let ctx = record(&ext, Scale::default(), &fruit_skeleton());

    let lines = ctx.lines();
    let boundary_ys: Vec<f64> = lines[..3].iter().map(|l| l.from.1).collect();
    assert_eq!(boundary_ys, vec![10.0, 20.0, 40.0]);
    for line in &lines[..3] {
        assert_eq!(line.from.0, 0.0);
        assert_eq!(line.to.0, 30.0);
    }

    let texts = ctx.texts();
    let drawn: Vec<(&str, f64, f64)> = texts
        .iter()
        .map(|t| (t.text.as_str(), t.x, t.y - MIDDLE_CELL_POS_MAGIC_NUMBER))
        .collect();
    assert_eq!(drawn, vec![("🍎", 15.0, 5.0), ("🍌", 15.0, 15.0)]);
}

#[test]
fn test_row_header_presentation() {
    let ctx = record(&RowHeaderGlyphs::new(), Scale::default(), &fruit_skeleton());
    let ops = ctx.ops();

    assert!(ops.contains(&DrawOp::SetStrokeStyle {
        color: "rgb(217,217,217)".to_string()
    }));
    assert!(ops.contains(&DrawOp::SetFillStyle {
        color: "rgb(0,0,0)".to_string()
    }));
    assert!(ops.contains(&DrawOp::SetLineWidth { width: 1.0 }));
    assert!(ops
        .iter()
        .any(|op| matches!(op, DrawOp::SetFont { font } if font.starts_with("13px "))));

    // One path, one translate, one stroke per draw
    assert_eq!(ctx.count(|op| matches!(op, DrawOp::BeginPath)), 1);
    assert_eq!(ctx.count(|op| matches!(op, DrawOp::Stroke)), 1);
    assert_eq!(
        ctx.count(|op| *op
            == DrawOp::TranslateWithPrecisionRatio {
                x: FIX_ONE_PIXEL_BLUR_OFFSET,
                y: FIX_ONE_PIXEL_BLUR_OFFSET
            }),
        1
    );
    assert_eq!(ops.last(), Some(&DrawOp::Stroke));
}

#[test_case(1.0, 29.5; "scale 1")]
#[test_case(2.0, 29.75; "scale 2")]
#[test_case(0.5, 29.0; "scale half")]
fn test_row_header_separator_inset(scale: f64, expected_x: f64) {
    let ctx = record(
        &RowHeaderGlyphs::new(),
        Scale::uniform(scale),
        &fruit_skeleton(),
    );
    let separator = *ctx.lines().last().unwrap();
    assert_eq!(separator.from, (expected_x, 0.0));
    assert_eq!(separator.to, (expected_x, 40.0));
}

#[test]
fn test_separator_uses_larger_axis() {
    let ctx = record(
        &RowHeaderGlyphs::new(),
        Scale::new(1.0, 4.0),
        &fruit_skeleton(),
    );
    assert_eq!(ctx.lines().last().unwrap().from.0, 30.0 - 0.125);
}

// Boundary lines = visible non-hidden indices in [start-1, end] ∩ table, plus
// the trailing separator.
#[test_case(0, 3, 3; "whole table")]
#[test_case(2, 3, 2; "start extends one back into hidden-adjacent row")]
#[test_case(3, 3, 1; "start minus one is the hidden row")]
#[test_case(4, 10, 1; "start minus one is last row, rest out of range")]
#[test_case(6, 10, 0; "entirely past the table")]
#[test_case(-5, -1, 0; "entirely before the table")]
#[test_case(3, 1, 0; "empty window")]
fn test_row_header_line_count(start: i64, end: i64, visible: usize) {
    let skeleton = fruit_skeleton().with_segment(RowColumnSegment::new(start, end, 0, 0));
    let ctx = record(&RowHeaderGlyphs::new(), Scale::default(), &skeleton);
    assert_eq!(ctx.lines().len(), visible + 1);
}

#[test]
fn test_glyph_past_table_still_draws_line() {
    let acc: Vec<f64> = (1..=20).map(|i| f64::from(i) * 10.0).collect();
    let skeleton = SheetSkeleton {
        row_column_segment: RowColumnSegment::new(0, 19, 0, 0),
        row_total_height: acc.last().copied(),
        row_height_accumulation: Some(acc),
        column_width_accumulation: Some(vec![]),
        column_total_width: Some(0.0),
        row_header_width: 40.0,
        column_header_height: 20.0,
    };
    let ctx = record(&RowHeaderGlyphs::new(), Scale::default(), &skeleton);

    assert_eq!(ctx.lines().len(), 21);
    // Default table has ten fruits
    assert_eq!(ctx.texts().len(), 10);
    assert_eq!(ctx.texts()[9].text, "🍊");
}

#[test]
fn test_hidden_rows_never_draw() {
    let hidden: HashSet<usize> = [1, 2, 5].into_iter().collect();
    let skeleton = SheetSkeleton::from_sizes(&[20.0; 8], &[60.0; 2], &hidden, &HashSet::new());

    let ctx = record(&RowHeaderGlyphs::new(), Scale::default(), &skeleton);
    let lines = ctx.lines();
    let boundaries: Vec<f64> = lines[..lines.len() - 1].iter().map(|l| l.from.1).collect();

    // Visible rows 0, 3, 4, 6, 7 each draw exactly one boundary
    assert_eq!(boundaries, vec![20.0, 40.0, 60.0, 80.0, 100.0]);

    let table = GlyphTable::fruits();
    let expected: Vec<String> = [0_usize, 3, 4, 6, 7]
        .iter()
        .filter_map(|&i| table.get(i))
        .map(str::to_string)
        .collect();
    let drawn: Vec<String> = ctx.texts().into_iter().map(|t| t.text).collect();
    assert_eq!(drawn, expected);
}

#[test]
fn test_draw_is_idempotent() {
    let skeleton = fruit_skeleton();
    for ext in extensions() {
        let first = record(ext.as_ref(), Scale::uniform(2.0), &skeleton);
        let second = record(ext.as_ref(), Scale::uniform(2.0), &skeleton);
        assert_eq!(first.ops(), second.ops());
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}

// ============================================================================
// Column header
// ============================================================================

#[test]
fn test_column_header_mirrors_row_header() {
    let ext = ColumnHeaderGlyphs::new().with_glyphs(fruits());
    let ctx = record(&ext, Scale::default(), &fruit_skeleton());

    let lines = ctx.lines();
    assert_eq!(lines.len(), 4);
    let xs: Vec<f64> = lines[..3].iter().map(|l| l.from.0).collect();
    assert_eq!(xs, vec![30.0, 60.0, 100.0]);
    assert_eq!(lines[0].to, (30.0, 20.0));

    // Separator runs along the bottom of the band
    assert_eq!(lines[3].from, (0.0, 19.5));
    assert_eq!(lines[3].to, (100.0, 19.5));

    let texts = ctx.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!((texts[0].x, texts[0].y), (15.0, 10.0 + MIDDLE_CELL_POS_MAGIC_NUMBER));
    assert_eq!(texts[1].text, "🍌");
    assert_eq!(texts[1].x, 45.0);
}

// Columns end at 30, 60, 60 (column 2 hidden), 100.
#[test_case(0, 3, &[30.0, 60.0, 100.0]; "whole table")]
#[test_case(2, 3, &[60.0, 100.0]; "start extends one back")]
#[test_case(3, 3, &[100.0]; "start minus one is the hidden column")]
#[test_case(4, 10, &[100.0]; "start minus one is last column, rest out of range")]
#[test_case(6, 10, &[]; "entirely past the table")]
#[test_case(-5, -1, &[]; "entirely before the table")]
fn test_column_header_windowed_lines(start: i64, end: i64, expected_xs: &[f64]) {
    let skeleton = fruit_skeleton().with_segment(RowColumnSegment::new(0, 0, start, end));
    let ctx = record(&ColumnHeaderGlyphs::new(), Scale::default(), &skeleton);

    let lines = ctx.lines();
    assert_eq!(lines.len(), expected_xs.len() + 1);
    let xs: Vec<f64> = lines[..lines.len() - 1].iter().map(|l| l.from.0).collect();
    assert_eq!(xs, expected_xs);
}

#[test]
fn test_column_header_default_glyphs() {
    let ctx = record(&ColumnHeaderGlyphs::new(), Scale::default(), &fruit_skeleton());
    assert_eq!(ctx.texts()[0].text, "🥕");
}

// ============================================================================
// Main pane
// ============================================================================

#[test]
fn test_main_pane_lines_span_full_grid() {
    let ext = MainGlyphs::new().with_glyphs(fruits());
    let ctx = record(&ext, Scale::default(), &fruit_skeleton());
    let lines = ctx.lines();

    // 3 rows + 3 columns + right edge + bottom edge
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].to, (100.0, 10.0));
    assert_eq!(lines[3].from, (30.0, 0.0));
    assert_eq!(lines[3].to, (30.0, 40.0));
    assert_eq!(lines[6].from, (99.5, 0.0));
    assert_eq!(lines[7].from, (0.0, 39.5));
    assert_eq!(lines[7].to, (100.0, 39.5));
}

#[test]
fn test_main_pane_glyph_per_visible_cell() {
    let ext = MainGlyphs::new().with_glyphs(fruits());
    let ctx = record(&ext, Scale::default(), &fruit_skeleton());
    let texts = ctx.texts();

    // Rows 0 and 1 have glyphs; columns 0, 1, 3 are visible (2 hidden)
    assert_eq!(texts.len(), 6);
    let row0: Vec<f64> = texts
        .iter()
        .filter(|t| t.text == "🍎")
        .map(|t| t.x)
        .collect();
    assert_eq!(row0, vec![15.0, 45.0, 80.0]);
    assert!(texts
        .iter()
        .filter(|t| t.text == "🍌")
        .all(|t| t.y == 15.0 + MIDDLE_CELL_POS_MAGIC_NUMBER));
}

// Windowed walks on both axes; row 2 and column 2 are hidden.
#[test_case(RowColumnSegment::new(0, 3, 0, 3), 3, 3, 6; "whole grid")]
#[test_case(RowColumnSegment::new(3, 3, 3, 3), 1, 1, 0; "both axes start after hidden index")]
#[test_case(RowColumnSegment::new(2, 3, 3, 3), 2, 1, 1; "row window reaches back to row one")]
#[test_case(RowColumnSegment::new(0, 1, 2, 3), 2, 2, 4; "column window reaches back to column one")]
#[test_case(RowColumnSegment::new(6, 9, 6, 9), 0, 0, 0; "window past both tables")]
fn test_main_pane_windowed(segment: RowColumnSegment, rows: usize, columns: usize, cells: usize) {
    let skeleton = fruit_skeleton().with_segment(segment);
    let ext = MainGlyphs::new().with_glyphs(fruits());
    let ctx = record(&ext, Scale::default(), &skeleton);

    // Row lines + column lines + right and bottom edges
    let lines = ctx.lines();
    assert_eq!(lines.len(), rows + columns + 2);
    assert!(lines[..rows].iter().all(|l| l.from.0 == 0.0));
    let column_xs: Vec<f64> = lines[rows..rows + columns].iter().map(|l| l.from.0).collect();
    assert!(column_xs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ctx.texts().len(), cells);
}

#[test]
fn test_main_pane_hidden_neighbour_cell_position() {
    let skeleton = fruit_skeleton().with_segment(RowColumnSegment::new(2, 3, 3, 3));
    let ext = MainGlyphs::new().with_glyphs(fruits());
    let ctx = record(&ext, Scale::default(), &skeleton);

    let texts = ctx.texts();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].text, "🍌");
    assert_eq!((texts[0].x, texts[0].y), (80.0, 15.0 + MIDDLE_CELL_POS_MAGIC_NUMBER));
    let column_line = ctx.lines()[2];
    assert_eq!(column_line.from, (100.0, 0.0));
}

#[test]
fn test_custom_identity() {
    let ext = MainGlyphs::new().with_identity("Overlay", 42);
    assert_eq!(ext.key(), "Overlay");
    assert_eq!(ext.z_index(), 42);
    assert_eq!(RowHeaderGlyphs::new().z_index(), 11);
    assert_eq!(ColumnHeaderGlyphs::new().key(), "ColumnHeaderCustomExtension");
}
