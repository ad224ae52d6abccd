//! Rendering surface used by extensions.
//!
//! This module provides:
//! - The `RenderingContext` capability extensions draw through
//! - Canvas 2D implementation (browser)
//! - Recording implementation (CLI output, tests)
//! - Scale descriptor, pixel-snapping constants and colors

pub mod canvas;
pub mod colors;
pub mod context;
pub mod recording;
pub mod scale;

// Re-export commonly used types
pub use canvas::CanvasContext;
pub use colors::{palette, Rgb};
pub use context::{RenderingContext, TextAlign, TextBaseline};
pub use recording::{DrawOp, RecordedLine, RecordedText, RecordingContext};
pub use scale::{
    Scale, DEFAULT_FONTFACE_PLANE, FIX_ONE_PIXEL_BLUR_OFFSET, MIDDLE_CELL_POS_MAGIC_NUMBER,
};
