//! Scale descriptor and pixel-snapping constants.
//!
//! The offsets below were measured against Canvas 2D in Chromium and
//! Firefox. Other backends need their own values.

use serde::{Deserialize, Serialize};

/// Half-pixel translation that keeps 1px strokes on pixel centers.
pub const FIX_ONE_PIXEL_BLUR_OFFSET: f64 = 0.5;

/// Canvas `middle` baseline sits one pixel high for most UI fonts.
pub const MIDDLE_CELL_POS_MAGIC_NUMBER: f64 = 1.0;

/// Default font stack for header glyphs
pub const DEFAULT_FONTFACE_PLANE: &str = "\"Helvetica Neue\", Helvetica, Arial, \"PingFang SC\", \"Hiragino Sans GB\", \"Heiti SC\", \"Microsoft YaHei\", \"WenQuanYi Micro Hei\", sans-serif";

/// Device pixel ratio and zoom, compounded per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Scale {
    pub const fn new(scale_x: f64, scale_y: f64) -> Self {
        Self { scale_x, scale_y }
    }

    pub const fn uniform(scale: f64) -> Self {
        Self::new(scale, scale)
    }

    /// Single multiplier used for pixel snapping.
    ///
    /// Degenerate scales (zero, negative, NaN) collapse to 1 so the
    /// half-pixel inset stays finite.
    pub fn effective(&self) -> f64 {
        let scale = self.scale_x.max(self.scale_y);
        if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        }
    }

    /// Inset that keeps a 1 logical-pixel edge line crisp at this scale
    pub fn edge_inset(&self) -> f64 {
        0.5 / self.effective()
    }
}
