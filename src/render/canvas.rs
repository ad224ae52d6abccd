//! Canvas 2D rendering context.
//!
//! Wraps the HTML Canvas 2D API via web-sys. The precision ratio is the
//! device pixel ratio the backing store was scaled by.

use web_sys::CanvasRenderingContext2d;

use super::context::{RenderingContext, TextAlign, TextBaseline};

/// `RenderingContext` backed by a browser canvas
pub struct CanvasContext {
    ctx: CanvasRenderingContext2d,
    precision_ratio: f64,
}

impl CanvasContext {
    /// Wrap a 2D context. A non-positive or non-finite ratio falls back to 1.
    pub fn new(ctx: CanvasRenderingContext2d, precision_ratio: f64) -> Self {
        let precision_ratio = if precision_ratio.is_finite() && precision_ratio > 0.0 {
            precision_ratio
        } else {
            1.0
        };
        Self {
            ctx,
            precision_ratio,
        }
    }

    /// Update the ratio after a DPR change (monitor switch, browser zoom)
    pub fn set_precision_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio > 0.0 {
            self.precision_ratio = ratio;
        }
    }
}

impl RenderingContext for CanvasContext {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.ctx.set_text_baseline(baseline.as_str());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn translate_with_precision_ratio(&mut self, x: f64, y: f64) {
        let _ = self
            .ctx
            .translate(x / self.precision_ratio, y / self.precision_ratio);
    }
}
