//! Drawing-context capability consumed by extensions.
//!
//! This trait abstracts the immediate-mode 2D operations an extension may
//! issue, so the same draw routine can target a browser canvas or a
//! recorder in tests.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical text baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
            Self::Bottom => "bottom",
        }
    }
}

/// Immediate-mode 2D drawing surface.
///
/// Implementations must not fail; drawing errors from the underlying
/// surface are swallowed, the host will redraw on the next frame anyway.
pub trait RenderingContext {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Translate by `(x, y)` device pixels, i.e. divided by the surface's
    /// pixel ratio in logical units.
    fn translate_with_precision_ratio(&mut self, x: f64, y: f64);
}
