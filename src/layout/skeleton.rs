//! Read-only layout snapshot handed to extensions on every draw.
//!
//! Accumulation tables store the *end* edge of each row/column:
//! `row_height_accumulation[i]` is the y of the boundary below row `i`.
//! Two equal neighbours mean the later index is hidden (zero size).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 19.0;

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f64 = 73.0;

/// Default width of the row header band
pub const DEFAULT_ROW_HEADER_WIDTH: f64 = 46.0;

/// Default height of the column header band
pub const DEFAULT_COLUMN_HEADER_HEIGHT: f64 = 20.0;

/// Visible row/column window.
///
/// Bounds are signed so a host may already pass a start extended one unit
/// before the first visible index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowColumnSegment {
    pub start_row: i64,
    pub end_row: i64,
    pub start_column: i64,
    pub end_column: i64,
}

impl RowColumnSegment {
    pub const fn new(start_row: i64, end_row: i64, start_column: i64, end_column: i64) -> Self {
        Self {
            start_row,
            end_row,
            start_column,
            end_column,
        }
    }
}

/// Layout snapshot for one sheet, as the host computed it for this frame.
///
/// Any of the tables and totals may be missing while the host is still
/// measuring; extensions treat that as "nothing to draw".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSkeleton {
    #[serde(default)]
    pub row_column_segment: RowColumnSegment,
    #[serde(default)]
    pub row_height_accumulation: Option<Vec<f64>>,
    #[serde(default)]
    pub column_width_accumulation: Option<Vec<f64>>,
    #[serde(default)]
    pub row_total_height: Option<f64>,
    #[serde(default)]
    pub column_total_width: Option<f64>,
    #[serde(default)]
    pub row_header_width: f64,
    #[serde(default)]
    pub column_header_height: f64,
}

/// Borrowed view of a skeleton whose tables and totals are all present.
#[derive(Debug, Clone, Copy)]
pub struct SkeletonTables<'a> {
    pub segment: RowColumnSegment,
    pub row_height_accumulation: &'a [f64],
    pub column_width_accumulation: &'a [f64],
    pub row_total_height: f64,
    pub column_total_width: f64,
    pub row_header_width: f64,
    pub column_header_height: f64,
}

impl SheetSkeleton {
    /// Build a skeleton from per-index sizes.
    ///
    /// Hidden indices contribute zero size, so they show up as repeated
    /// values in the accumulation tables. The visible segment covers every
    /// row and column until a viewport narrows it.
    pub fn from_sizes(
        row_heights: &[f64],
        column_widths: &[f64],
        hidden_rows: &HashSet<usize>,
        hidden_columns: &HashSet<usize>,
    ) -> Self {
        let row_height_accumulation = accumulate(row_heights, hidden_rows);
        let column_width_accumulation = accumulate(column_widths, hidden_columns);

        let row_total_height = row_height_accumulation.last().copied().unwrap_or(0.0);
        let column_total_width = column_width_accumulation.last().copied().unwrap_or(0.0);

        let segment = RowColumnSegment::new(
            0,
            last_index(row_height_accumulation.len()),
            0,
            last_index(column_width_accumulation.len()),
        );

        Self {
            row_column_segment: segment,
            row_height_accumulation: Some(row_height_accumulation),
            column_width_accumulation: Some(column_width_accumulation),
            row_total_height: Some(row_total_height),
            column_total_width: Some(column_total_width),
            row_header_width: DEFAULT_ROW_HEADER_WIDTH,
            column_header_height: DEFAULT_COLUMN_HEADER_HEIGHT,
        }
    }

    /// Build a skeleton of `rows` x `columns` default-sized cells.
    pub fn uniform(rows: usize, columns: usize) -> Self {
        Self::from_sizes(
            &vec![DEFAULT_ROW_HEIGHT; rows],
            &vec![DEFAULT_COLUMN_WIDTH; columns],
            &HashSet::new(),
            &HashSet::new(),
        )
    }

    /// Set header band dimensions
    #[must_use]
    pub fn with_headers(mut self, row_header_width: f64, column_header_height: f64) -> Self {
        self.row_header_width = row_header_width;
        self.column_header_height = column_header_height;
        self
    }

    /// Replace the visible segment
    #[must_use]
    pub fn with_segment(mut self, segment: RowColumnSegment) -> Self {
        self.row_column_segment = segment;
        self
    }

    /// Tables and totals, or `None` if any of them is missing.
    pub fn tables(&self) -> Option<SkeletonTables<'_>> {
        Some(SkeletonTables {
            segment: self.row_column_segment,
            row_height_accumulation: self.row_height_accumulation.as_deref()?,
            column_width_accumulation: self.column_width_accumulation.as_deref()?,
            row_total_height: self.row_total_height?,
            column_total_width: self.column_total_width?,
            row_header_width: self.row_header_width,
            column_header_height: self.column_header_height,
        })
    }
}

fn accumulate(sizes: &[f64], hidden: &HashSet<usize>) -> Vec<f64> {
    let mut acc = Vec::with_capacity(sizes.len());
    let mut edge = 0.0;
    for (i, &size) in sizes.iter().enumerate() {
        if !hidden.contains(&i) {
            edge += size.max(0.0);
        }
        acc.push(edge);
    }
    acc
}

fn last_index(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX) - 1
}
