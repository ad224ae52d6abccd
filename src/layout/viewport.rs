//! Viewport state: derives the visible row/column segment from scroll.

use super::{RowColumnSegment, SheetSkeleton};

/// Viewport state - represents the visible area of the sheet body
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll position in sheet coordinates
    pub scroll_x: f64,
    /// Vertical scroll position in sheet coordinates
    pub scroll_y: f64,
    /// Body width in pixels (excluding the row header band)
    pub width: f64,
    /// Body height in pixels (excluding the column header band)
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    /// Create a viewport scrolled to the origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Visible segment (inclusive bounds) for the current scroll position.
    ///
    /// Returns `None` when the skeleton has no accumulation tables yet.
    pub fn segment(&self, skeleton: &SheetSkeleton) -> Option<RowColumnSegment> {
        let rows = skeleton.row_height_accumulation.as_deref()?;
        let columns = skeleton.column_width_accumulation.as_deref()?;

        let (start_row, end_row) = visible_range(rows, self.scroll_y, self.height);
        let (start_column, end_column) = visible_range(columns, self.scroll_x, self.width);
        Some(RowColumnSegment::new(
            start_row,
            end_row,
            start_column,
            end_column,
        ))
    }

    /// Apply the current segment to the skeleton, if it has tables.
    pub fn apply(&self, skeleton: &mut SheetSkeleton) {
        if let Some(segment) = self.segment(skeleton) {
            skeleton.row_column_segment = segment;
        }
    }

    /// Clamp scroll position so the end of the content is reachable
    /// but never overshot.
    pub fn clamp_scroll(&mut self, skeleton: &SheetSkeleton) {
        let total_width = skeleton.column_total_width.unwrap_or(0.0);
        let total_height = skeleton.row_total_height.unwrap_or(0.0);
        let max_x = (total_width - self.width).max(0.0);
        let max_y = (total_height - self.height).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_x);
        self.scroll_y = self.scroll_y.clamp(0.0, max_y);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f64, delta_y: f64, skeleton: &SheetSkeleton) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.clamp_scroll(skeleton);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

/// Index containing position `pos` (binary search over end edges).
fn index_at(accumulation: &[f64], pos: f64) -> usize {
    let i = accumulation.partition_point(|&edge| edge <= pos);
    i.min(accumulation.len().saturating_sub(1))
}

fn visible_range(accumulation: &[f64], scroll: f64, extent: f64) -> (i64, i64) {
    if accumulation.is_empty() {
        return (0, -1);
    }
    let start = index_at(accumulation, scroll);
    let end = index_at(accumulation, scroll + extent.max(0.0));
    (
        i64::try_from(start).unwrap_or(i64::MAX),
        i64::try_from(end).unwrap_or(i64::MAX),
    )
}
