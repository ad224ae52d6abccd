//! Glyphs beside the row numbers in the row header band.

use super::{ExtensionStyle, GlyphTable, SheetExtension, DEFAULT_EXTENSION_Z_INDEX};
use crate::layout::{visible_segments, SheetSkeleton};
use crate::render::{RenderingContext, Scale, MIDDLE_CELL_POS_MAGIC_NUMBER};

const UNIQUE_KEY: &str = "RowHeaderCustomExtension";

/// Horizontal shift from the band center so glyphs sit right of the row number
pub const DEFAULT_GLYPH_OFFSET: f64 = 12.0;

/// Row header extension: a boundary line under each visible row and the
/// row's glyph, if any, centered vertically in the row.
#[derive(Debug, Clone)]
pub struct RowHeaderGlyphs {
    key: String,
    z_index: i32,
    glyphs: GlyphTable,
    glyph_offset: f64,
    style: ExtensionStyle,
}

impl Default for RowHeaderGlyphs {
    fn default() -> Self {
        Self::new()
    }
}

impl RowHeaderGlyphs {
    pub fn new() -> Self {
        Self {
            key: UNIQUE_KEY.to_string(),
            z_index: DEFAULT_EXTENSION_Z_INDEX,
            glyphs: GlyphTable::fruits(),
            glyph_offset: DEFAULT_GLYPH_OFFSET,
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

    /// Set the glyph's horizontal offset from the band center (0 = centered)
    #[must_use]
    pub fn with_glyph_offset(mut self, offset: f64) -> Self {
        self.glyph_offset = offset;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ExtensionStyle) -> Self {
        self.style = style;
        self
    }
}

impl SheetExtension for RowHeaderGlyphs {
    fn key(&self) -> &str {
        &self.key
    }

    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn draw(&self, ctx: &mut dyn RenderingContext, scale: Scale, skeleton: &SheetSkeleton) {
        let Some(tables) = skeleton.tables() else {
            tracing::trace!(key = %self.key, "incomplete skeleton, row header skipped");
            return;
        };

        let header_width = tables.row_header_width;
        let glyph_x = header_width / 2.0 + self.glyph_offset;

        self.style.begin(ctx);

        let segment = tables.segment;
        for row in visible_segments(
            tables.row_height_accumulation,
            segment.start_row,
            segment.end_row,
        ) {
            ctx.move_to(0.0, row.end);
            ctx.line_to(header_width, row.end);

            if let Some(glyph) = self.glyphs.get(row.index) {
                ctx.fill_text(glyph, glyph_x, row.middle() + MIDDLE_CELL_POS_MAGIC_NUMBER);
            }
        }

        // Separator between the header band and the body
        let edge_x = header_width - scale.edge_inset();
        ctx.move_to(edge_x, 0.0);
        ctx.line_to(edge_x, tables.row_total_height);
        ctx.stroke();
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::layout::RowColumnSegment;
    use crate::render::{RecordedLine, RecordingContext};

    fn skeleton() -> SheetSkeleton {
        SheetSkeleton {
            row_column_segment: RowColumnSegment::new(0, 3, 0, 0),
            row_height_accumulation: Some(vec![10.0, 20.0, 20.0, 40.0]),
            column_width_accumulation: Some(vec![50.0]),
            row_total_height: Some(40.0),
            column_total_width: Some(50.0),
            row_header_width: 30.0,
            column_header_height: 20.0,
        }
    }

    #[test]
    fn test_hidden_row_and_short_glyph_table() {
        let ext = RowHeaderGlyphs::new()
            .with_glyphs(GlyphTable::new(["🍎", "🍌", "🍒"]))
            .with_glyph_offset(0.0);
        let mut ctx = RecordingContext::new();
        ext.draw(&mut ctx, Scale::default(), &skeleton());

        let lines = ctx.lines();
        let ys: Vec<f64> = lines.iter().take(3).map(|l| l.from.1).collect();
        assert_eq!(ys, vec![10.0, 20.0, 40.0]);
        assert_eq!(
            lines[3],
            RecordedLine {
                from: (29.5, 0.0),
                to: (29.5, 40.0)
            }
        );
        assert_eq!(lines.len(), 4);

        let texts = ctx.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].text, "🍎");
        assert_eq!((texts[0].x, texts[0].y), (15.0, 5.0 + MIDDLE_CELL_POS_MAGIC_NUMBER));
        assert_eq!(texts[1].text, "🍌");
        assert_eq!(texts[1].y, 15.0 + MIDDLE_CELL_POS_MAGIC_NUMBER);
    }

    #[test]
    fn test_default_glyph_sits_beside_row_number() {
        let mut ctx = RecordingContext::new();
        RowHeaderGlyphs::new().draw(&mut ctx, Scale::default(), &skeleton());
        let texts = ctx.texts();
        assert_eq!(texts[0].x, 15.0 + DEFAULT_GLYPH_OFFSET);
    }
}
