//! Recording rendering context.
//!
//! Captures every drawing call as a `DrawOp` instead of painting pixels.
//! Used by the CLI to dump a frame as JSON and by tests to assert on the
//! exact operation sequence an extension produced.

use serde::{Deserialize, Serialize};

use super::context::{RenderingContext, TextAlign, TextBaseline};

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    Save,
    Restore,
    SetFillStyle { color: String },
    SetStrokeStyle { color: String },
    SetLineWidth { width: f64 },
    SetFont { font: String },
    SetTextAlign { align: TextAlign },
    SetTextBaseline { baseline: TextBaseline },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    FillText { text: String, x: f64, y: f64 },
    TranslateWithPrecisionRatio { x: f64, y: f64 },
}

/// A straight line recorded as `move_to` immediately followed by `line_to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// A recorded `fill_text` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedText {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// `RenderingContext` that records operations
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    ops: Vec<DrawOp>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Take the recorded operations, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Lines drawn, in order
    pub fn lines(&self) -> Vec<RecordedLine> {
        self.ops
            .windows(2)
            .filter_map(|pair| match pair {
                [DrawOp::MoveTo { x: x0, y: y0 }, DrawOp::LineTo { x: x1, y: y1 }] => {
                    Some(RecordedLine {
                        from: (*x0, *y0),
                        to: (*x1, *y1),
                    })
                }
                _ => None,
            })
            .collect()
    }

    /// Text drawn, in order
    pub fn texts(&self) -> Vec<RecordedText> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, x, y } => Some(RecordedText {
                    text: text.clone(),
                    x: *x,
                    y: *y,
                }),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded operations matching `pred`
    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|&op| pred(op)).count()
    }

    /// Serialize the recorded frame as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.ops)
    }

    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

impl RenderingContext for RecordingContext {
    fn save(&mut self) {
        self.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.push(DrawOp::Restore);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawOp::SetFillStyle {
            color: color.to_string(),
        });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawOp::SetStrokeStyle {
            color: color.to_string(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawOp::SetLineWidth { width });
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawOp::SetFont {
            font: font.to_string(),
        });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawOp::SetTextAlign { align });
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.push(DrawOp::SetTextBaseline { baseline });
    }

    fn begin_path(&mut self) {
        self.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawOp::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.push(DrawOp::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn translate_with_precision_ratio(&mut self, x: f64, y: f64) {
        self.push(DrawOp::TranslateWithPrecisionRatio { x, y });
    }
}
