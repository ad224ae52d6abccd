//! Feature plugins and their registration-order dependencies.

use serde::{Deserialize, Serialize};

/// Feature plugins the host can load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Plugin {
    Docs,
    DocsUi,
    RenderEngine,
    Ui,
    Sheets,
    SheetsUi,
    SheetsNumfmt,
    FormulaEngine,
    SheetsFormula,
}

impl Plugin {
    /// Every plugin, in an order that satisfies all dependencies
    pub const DEFAULT_ORDER: [Plugin; 9] = [
        Self::Docs,
        Self::DocsUi,
        Self::RenderEngine,
        Self::Ui,
        Self::Sheets,
        Self::SheetsUi,
        Self::SheetsNumfmt,
        Self::FormulaEngine,
        Self::SheetsFormula,
    ];

    /// Plugins that must be registered before this one
    pub fn dependencies(self) -> &'static [Plugin] {
        match self {
            Self::Docs | Self::RenderEngine | Self::Sheets | Self::FormulaEngine => &[],
            Self::DocsUi => &[Self::Docs],
            Self::Ui => &[Self::RenderEngine],
            Self::SheetsUi => &[Self::Sheets, Self::Ui],
            Self::SheetsNumfmt => &[Self::SheetsUi],
            Self::SheetsFormula => &[Self::FormulaEngine, Self::Sheets],
        }
    }

    /// Default options for this plugin
    pub fn default_options(self) -> PluginOptions {
        match self {
            Self::Docs => PluginOptions::Docs(DocsOptions::default()),
            Self::Ui => PluginOptions::Ui(UiOptions::default()),
            _ => PluginOptions::None,
        }
    }
}

/// Options for the docs plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsOptions {
    pub has_scroll: bool,
}

/// Options for the UI plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiOptions {
    /// DOM id of the element the UI mounts into
    pub container: String,
    pub header: bool,
    pub toolbar: bool,
    pub footer: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            container: "app".to_string(),
            header: true,
            toolbar: true,
            footer: true,
        }
    }
}

/// Per-plugin options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PluginOptions {
    #[default]
    None,
    Docs(DocsOptions),
    Ui(UiOptions),
}

impl PluginOptions {
    /// Whether these options can configure `plugin`
    pub fn applies_to(&self, plugin: Plugin) -> bool {
        match self {
            Self::None => true,
            Self::Docs(_) => plugin == Plugin::Docs,
            Self::Ui(_) => plugin == Plugin::Ui,
        }
    }
}
