//! Layout snapshot consumed by extensions during a render pass.
//!
//! This module handles:
//! - The per-frame sheet skeleton (accumulation tables, totals, header bands)
//! - Building accumulation tables from row heights and column widths
//! - Deriving the visible row/column segment from a viewport
//! - Walking the visible segment while skipping hidden rows/columns

mod segments;
mod skeleton;
mod viewport;

pub use segments::{visible_segments, Segment, Segments};
pub use skeleton::{
    RowColumnSegment, SheetSkeleton, SkeletonTables, DEFAULT_COLUMN_HEADER_HEIGHT,
    DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEADER_WIDTH, DEFAULT_ROW_HEIGHT,
};
pub use viewport::Viewport;
