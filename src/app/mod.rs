//! Application bootstrap.
//!
//! Builds the host app from an `AppConfig`, registers feature plugins in
//! dependency order, creates the sheet unit and binds the three glyph
//! extensions to it. Runs once at startup; afterwards the app is only used
//! to paint frames.

mod config;
mod facade;
mod plugin;

use std::collections::HashMap;

use crate::error::{Result, SheetGlyphError};
use crate::extension::{ColumnHeaderGlyphs, MainGlyphs, RowHeaderGlyphs};
use crate::registry::ExtensionRegistry;

pub use config::{AppConfig, Locale, LogLevel, Theme};
pub use facade::Facade;
pub use plugin::{DocsOptions, Plugin, PluginOptions, UiOptions};

/// Unit id created by `bootstrap`
pub const DEFAULT_UNIT_ID: &str = "workbook";

/// The host application: config, loaded plugins, units and their extensions
pub struct App {
    config: AppConfig,
    plugins: Vec<Plugin>,
    plugin_options: HashMap<Plugin, PluginOptions>,
    units: Vec<String>,
    registry: ExtensionRegistry,
}

impl App {
    /// Create an app with an empty registry
    pub fn new(config: AppConfig) -> Self {
        Self::with_registry(config, ExtensionRegistry::new())
    }

    /// Create an app around an existing registry
    pub fn with_registry(config: AppConfig, registry: ExtensionRegistry) -> Self {
        tracing::info!(
            locale = ?config.locale,
            theme = %config.theme.name,
            log_level = ?config.log_level,
            "app created"
        );
        Self {
            config,
            plugins: Vec::new(),
            plugin_options: HashMap::new(),
            units: Vec::new(),
            registry,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Register a plugin with its default options
    pub fn register_plugin(&mut self, plugin: Plugin) -> Result<()> {
        self.register_plugin_with(plugin, plugin.default_options())
    }

    /// Register a plugin. Every dependency must already be registered.
    pub fn register_plugin_with(&mut self, plugin: Plugin, options: PluginOptions) -> Result<()> {
        if self.plugins.contains(&plugin) {
            return Err(SheetGlyphError::DuplicatePlugin(plugin));
        }
        if let Some(&missing) = plugin
            .dependencies()
            .iter()
            .find(|dep| !self.plugins.contains(dep))
        {
            return Err(SheetGlyphError::MissingDependency { plugin, missing });
        }
        if !options.applies_to(plugin) {
            return Err(SheetGlyphError::InvalidPluginOptions(plugin));
        }

        tracing::debug!(?plugin, ?options, "plugin registered");
        self.plugins.push(plugin);
        self.plugin_options.insert(plugin, options);
        Ok(())
    }

    /// Registered plugins, in registration order
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn plugin_options(&self, plugin: Plugin) -> Option<&PluginOptions> {
        self.plugin_options.get(&plugin)
    }

    /// Create a sheet unit. Requires the sheets plugin.
    pub fn create_sheet(&mut self, unit_id: &str) -> Result<()> {
        if !self.plugins.contains(&Plugin::Sheets) {
            return Err(SheetGlyphError::PluginNotRegistered {
                unit_id: unit_id.to_string(),
                required: Plugin::Sheets,
            });
        }
        self.registry.add_unit(unit_id)?;
        self.units.push(unit_id.to_string());
        tracing::info!(unit_id, "sheet unit created");
        Ok(())
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// API handle for extension registration and painting
    pub fn facade(&mut self) -> Facade<'_> {
        Facade::new(self)
    }
}

/// Build the app with every plugin, one `workbook` unit and the three
/// bundled glyph extensions.
pub fn bootstrap(config: AppConfig) -> Result<App> {
    bootstrap_with_registry(config, ExtensionRegistry::new())
}

/// `bootstrap` against a caller-supplied registry
pub fn bootstrap_with_registry(config: AppConfig, registry: ExtensionRegistry) -> Result<App> {
    let mut app = App::with_registry(config, registry);

    for plugin in Plugin::DEFAULT_ORDER {
        app.register_plugin(plugin)?;
    }

    app.create_sheet(DEFAULT_UNIT_ID)?;

    let style = app.config().theme.extension_style();
    let mut api = app.facade();
    api.register_sheet_row_header_extension(
        DEFAULT_UNIT_ID,
        RowHeaderGlyphs::new().with_style(style.clone()),
    )?;
    api.register_sheet_column_header_extension(
        DEFAULT_UNIT_ID,
        ColumnHeaderGlyphs::new().with_style(style.clone()),
    )?;
    api.register_sheet_main_extension(DEFAULT_UNIT_ID, MainGlyphs::new().with_style(style))?;

    tracing::info!(unit_id = DEFAULT_UNIT_ID, "bootstrap complete");
    Ok(app)
}
