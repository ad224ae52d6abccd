//! Glyphs under the column letters in the column header band.

use super::{ExtensionStyle, GlyphTable, SheetExtension, DEFAULT_EXTENSION_Z_INDEX};
use crate::layout::{visible_segments, SheetSkeleton};
use crate::render::{RenderingContext, Scale, MIDDLE_CELL_POS_MAGIC_NUMBER};

const UNIQUE_KEY: &str = "ColumnHeaderCustomExtension";

/// Column header extension: a boundary line right of each visible column and
/// the column's glyph, if any, centered in the column.
#[derive(Debug, Clone)]
pub struct ColumnHeaderGlyphs {
    key: String,
    z_index: i32,
    glyphs: GlyphTable,
    style: ExtensionStyle,
}

impl Default for ColumnHeaderGlyphs {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnHeaderGlyphs {
    pub fn new() -> Self {
        Self {
            key: UNIQUE_KEY.to_string(),
            z_index: DEFAULT_EXTENSION_Z_INDEX,
            glyphs: GlyphTable::vegetables(),
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

impl SheetExtension for ColumnHeaderGlyphs {
    fn key(&self) -> &str {
        &self.key
    }

    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn draw(&self, ctx: &mut dyn RenderingContext, scale: Scale, skeleton: &SheetSkeleton) {
        let Some(tables) = skeleton.tables() else {
            tracing::trace!(key = %self.key, "incomplete skeleton, column header skipped");
            return;
        };

        let header_height = tables.column_header_height;
        // Baseline correction is vertical for column glyphs too.
        let glyph_y = header_height / 2.0 + MIDDLE_CELL_POS_MAGIC_NUMBER;

        self.style.begin(ctx);

        let segment = tables.segment;
        for column in visible_segments(
            tables.column_width_accumulation,
            segment.start_column,
            segment.end_column,
        ) {
            ctx.move_to(column.end, 0.0);
            ctx.line_to(column.end, header_height);

            if let Some(glyph) = self.glyphs.get(column.index) {
                ctx.fill_text(glyph, column.middle(), glyph_y);
            }
        }

        let edge_y = header_height - scale.edge_inset();
        ctx.move_to(0.0, edge_y);
        ctx.line_to(tables.column_total_width, edge_y);
        ctx.stroke();
    }
}
