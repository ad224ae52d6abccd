//! Row glyphs repeated across every visible cell of the main pane.

use super::{ExtensionStyle, GlyphTable, SheetExtension, DEFAULT_EXTENSION_Z_INDEX};
use crate::layout::{visible_segments, Segment, SheetSkeleton};
use crate::render::{RenderingContext, Scale, MIDDLE_CELL_POS_MAGIC_NUMBER};

const UNIQUE_KEY: &str = "MainCustomExtension";

/// Main pane extension.
///
/// Draws a boundary line under every visible row across the full content
/// width, one right of every visible column down the full content height,
/// and the row's glyph centered in each visible cell of that row.
#[derive(Debug, Clone)]
pub struct MainGlyphs {
    key: String,
    z_index: i32,
    glyphs: GlyphTable,
    style: ExtensionStyle,
}

impl Default for MainGlyphs {
    fn default() -> Self {
        Self::new()
    }
}

impl MainGlyphs {
    pub fn new() -> Self {
        Self {
            key: UNIQUE_KEY.to_string(),
            z_index: DEFAULT_EXTENSION_Z_INDEX,
            glyphs: GlyphTable::fruits(),
            style: ExtensionStyle::default(),
        }
    }

    #[must_use]
    pub fn with_identity(mut self, key: impl Into<String>, z_index: i32) -> Self {
        self.key = key.into();
        self.z_index = z_index;
        self
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: GlyphTable) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ExtensionStyle) -> Self {
        self.style = style;
        self
    }
}

impl SheetExtension for MainGlyphs {
    fn key(&self) -> &str {
        &self.key
    }

    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn draw(&self, ctx: &mut dyn RenderingContext, scale: Scale, skeleton: &SheetSkeleton) {
        let Some(tables) = skeleton.tables() else {
            tracing::trace!(key = %self.key, "incomplete skeleton, main pane skipped");
            return;
        };

        let segment = tables.segment;
        let rows: Vec<Segment> = visible_segments(
            tables.row_height_accumulation,
            segment.start_row,
            segment.end_row,
        )
        .collect();
        let columns: Vec<Segment> = visible_segments(
            tables.column_width_accumulation,
            segment.start_column,
            segment.end_column,
        )
        .collect();

        self.style.begin(ctx);

        for row in &rows {
            ctx.move_to(0.0, row.end);
            ctx.line_to(tables.column_total_width, row.end);
        }
        for column in &columns {
            ctx.move_to(column.end, 0.0);
            ctx.line_to(column.end, tables.row_total_height);
        }

        for row in &rows {
            let Some(glyph) = self.glyphs.get(row.index) else {
                continue;
            };
            let y = row.middle() + MIDDLE_CELL_POS_MAGIC_NUMBER;
            for column in &columns {
                ctx.fill_text(glyph, column.middle(), y);
            }
        }

        // Outer right and bottom edges
        let inset = scale.edge_inset();
        let edge_x = tables.column_total_width - inset;
        let edge_y = tables.row_total_height - inset;
        ctx.move_to(edge_x, 0.0);
        ctx.line_to(edge_x, tables.row_total_height);
        ctx.move_to(0.0, edge_y);
        ctx.line_to(tables.column_total_width, edge_y);
        ctx.stroke();
    }
}
