//! WASM-exported `SheetGlyphs` - binds the bootstrapped app to a canvas.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::{bootstrap, App, AppConfig, DEFAULT_UNIT_ID};
use crate::error::SheetGlyphError;
use crate::layout::SheetSkeleton;
use crate::render::{CanvasContext, Scale};

#[wasm_bindgen]
pub struct SheetGlyphs {
    app: App,
    ctx: CanvasContext,
    scale: Scale,
}

#[wasm_bindgen]
impl SheetGlyphs {
    /// Bootstrap with the default config and attach to `canvas`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement, dpr: f64) -> Result<SheetGlyphs, JsValue> {
        Self::with_config(canvas, dpr, JsValue::UNDEFINED)
    }

    /// Bootstrap with a config object (`{ locale, theme, logLevel }`).
    ///
    /// `logLevel` has no effect here: the browser build installs no
    /// `tracing` subscriber, so events are dropped. The host page may
    /// install one before constructing.
    pub fn with_config(
        canvas: &HtmlCanvasElement,
        dpr: f64,
        config: JsValue,
    ) -> Result<SheetGlyphs, JsValue> {
        console_error_panic_hook::set_once();

        let config: AppConfig = if config.is_undefined() || config.is_null() {
            AppConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| SheetGlyphError::Render("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SheetGlyphError::Render("not a 2d context".to_string()))?;

        let app = bootstrap(config)?;
        Ok(Self {
            app,
            ctx: CanvasContext::new(ctx, dpr),
            scale: Scale::uniform(dpr),
        })
    }

    /// Update device pixel ratio and zoom.
    pub fn set_scale(&mut self, dpr: f64, zoom: f64) {
        self.ctx.set_precision_ratio(dpr);
        self.scale = Scale::uniform(dpr * zoom);
    }

    /// Paint one frame for the default unit from a skeleton object.
    ///
    /// Returns the number of extensions invoked.
    pub fn render(&mut self, skeleton: JsValue) -> Result<usize, JsValue> {
        let skeleton: SheetSkeleton = serde_wasm_bindgen::from_value(skeleton)?;
        Ok(self
            .app
            .facade()
            .render_unit(DEFAULT_UNIT_ID, &mut self.ctx, self.scale, &skeleton))
    }
}
