//! Structured error types for sheetglyph.
//!
//! Drawing never fails; these errors only surface from bootstrap,
//! registration and snapshot loading.

use crate::app::Plugin;

/// All errors that can occur while wiring extensions into the host.
#[derive(Debug, thiserror::Error)]
pub enum SheetGlyphError {
    /// A plugin was registered before one of its dependencies.
    #[error("Plugin {plugin:?} requires {missing:?} to be registered first")]
    MissingDependency { plugin: Plugin, missing: Plugin },

    /// The same plugin was registered twice.
    #[error("Plugin {0:?} is already registered")]
    DuplicatePlugin(Plugin),

    /// Options were given to a plugin they do not configure.
    #[error("Options do not apply to plugin {0:?}")]
    InvalidPluginOptions(Plugin),

    /// A unit was created before the plugin that provides it.
    #[error("Cannot create unit {unit_id:?}: plugin {required:?} is not registered")]
    PluginNotRegistered { unit_id: String, required: Plugin },

    /// A unit with this id already exists.
    #[error("Unit {0:?} already exists")]
    DuplicateUnit(String),

    /// No unit with this id was created.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// The extension object is unusable (e.g. empty key).
    #[error("Invalid extension: {0}")]
    InvalidExtension(String),

    /// Snapshot or config (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering surface error (canvas context unavailable, etc.).
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetGlyphError>;

#[cfg(target_arch = "wasm32")]
impl From<SheetGlyphError> for wasm_bindgen::JsValue {
    fn from(e: SheetGlyphError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
