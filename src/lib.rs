//! sheetglyph - header and overlay glyph extensions for spreadsheet grids
//!
//! Paints supplementary visuals on top of a host's own grid rendering:
//! - Glyphs beside row numbers in the row header band
//! - Glyphs under column letters in the column header band
//! - Per-cell glyphs and boundary lines over the main pane
//!
//! Extensions draw through the `RenderingContext` trait, so the same code
//! targets Canvas 2D in the browser and a recording context natively.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SheetGlyphs } from 'sheetglyph';
//! await init();
//! const glyphs = new SheetGlyphs(canvas, window.devicePixelRatio);
//! glyphs.render(skeleton);
//! ```

pub mod app;
pub mod error;
pub mod extension;
pub mod layout;
pub mod registry;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod web;

use wasm_bindgen::prelude::*;

pub use app::{bootstrap, App, AppConfig, DEFAULT_UNIT_ID};
pub use error::{Result, SheetGlyphError};
pub use extension::{ColumnHeaderGlyphs, GlyphTable, MainGlyphs, RowHeaderGlyphs, SheetExtension};
pub use layout::{RowColumnSegment, SheetSkeleton};
pub use registry::{ExtensionRegistry, ExtensionSlot};
pub use render::{RenderingContext, Scale};

#[cfg(target_arch = "wasm32")]
pub use web::SheetGlyphs;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
