//! Sheet render extensions.
//!
//! An extension is a draw callback the host invokes during its own render
//! pass, after painting its built-in content for the same region. This
//! module provides:
//! - The `SheetExtension` capability (key, z-index, draw)
//! - Shared presentation settings and glyph tables
//! - Row header, column header and main pane glyph extensions

mod column_header;
mod main_pane;
mod row_header;

use serde::{Deserialize, Serialize};

use crate::layout::SheetSkeleton;
use crate::render::{
    palette, RenderingContext, Rgb, Scale, TextAlign, TextBaseline, DEFAULT_FONTFACE_PLANE,
    FIX_ONE_PIXEL_BLUR_OFFSET,
};

pub use column_header::ColumnHeaderGlyphs;
pub use main_pane::MainGlyphs;
pub use row_header::RowHeaderGlyphs;

/// Z-index the host paints its own headers at. Extensions must sit above it.
pub const HOST_HEADER_Z_INDEX: i32 = 10;

/// Default z-index for the bundled extensions
pub const DEFAULT_EXTENSION_Z_INDEX: i32 = HOST_HEADER_Z_INDEX + 1;

/// A draw callback registered with the host.
///
/// `key` and `z_index` are fixed for the lifetime of the object. `draw` must
/// be a pure function of its inputs: it holds no per-call state and never
/// fails. Incomplete skeletons are skipped silently.
pub trait SheetExtension {
    /// Unique key, used for deduplication within a registry slot
    fn key(&self) -> &str;

    /// Paint order among extensions in the same slot (higher paints later)
    fn z_index(&self) -> i32;

    fn draw(&self, ctx: &mut dyn RenderingContext, scale: Scale, skeleton: &SheetSkeleton);
}

/// Fixed presentation constants applied at the start of every draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtensionStyle {
    pub text_color: Rgb,
    pub line_color: Rgb,
    pub line_width: f64,
    pub font_size: f64,
    pub font_face: String,
}

impl Default for ExtensionStyle {
    fn default() -> Self {
        Self {
            text_color: palette::TEXT,
            line_color: palette::GRID_LINE,
            line_width: 1.0,
            font_size: 13.0,
            font_face: DEFAULT_FONTFACE_PLANE.to_string(),
        }
    }
}

impl ExtensionStyle {
    /// CSS font shorthand, e.g. `13px sans-serif`
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_face)
    }

    /// Configure the context and open the path every boundary line joins.
    ///
    /// The blur offset is applied here, once per draw.
    pub(crate) fn begin(&self, ctx: &mut dyn RenderingContext) {
        ctx.set_text_align(TextAlign::Center);
        ctx.set_text_baseline(TextBaseline::Middle);
        ctx.set_fill_style(&self.text_color.to_css());
        ctx.begin_path();
        ctx.set_line_width(self.line_width);
        ctx.translate_with_precision_ratio(FIX_ONE_PIXEL_BLUR_OFFSET, FIX_ONE_PIXEL_BLUR_OFFSET);
        ctx.set_stroke_style(&self.line_color.to_css());
        ctx.set_font(&self.font());
    }
}

/// Ordered display symbols indexed by row or column.
///
/// Indices past the end, and empty entries, have no glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphTable(Vec<String>);

impl GlyphTable {
    pub fn new<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(glyphs.into_iter().map(Into::into).collect())
    }

    /// Fruit glyphs shown beside row numbers
    pub fn fruits() -> Self {
        Self::new(["🍎", "🍌", "🍒", "🍓", "🍅", "🍆", "🍇", "🍈", "🍉", "🍊"])
    }

    /// Vegetable glyphs shown under column letters
    pub fn vegetables() -> Self {
        Self::new(["🥕", "🥦", "🌽", "🥔", "🧅", "🧄", "🥒", "🍄", "🥜", "🌶"])
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0
            .get(index)
            .map(String::as_str)
            .filter(|glyph| !glyph.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
