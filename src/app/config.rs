//! Application configuration: locale, theme and log verbosity.

use serde::{Deserialize, Serialize};

use crate::extension::ExtensionStyle;
use crate::render::{palette, Rgb};

/// UI locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Locale {
    #[default]
    EnUs,
    ZhCn,
    RuRu,
    ViVn,
    ZhTw,
    FrFr,
    FaIr,
}

/// Log verbosity, mapped onto `tracing` levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Silent,
    Error,
    #[default]
    Warn,
    Info,
    Verbose,
}

impl LogLevel {
    /// `EnvFilter` directive for this level
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Verbose => "trace",
        }
    }
}

/// Colors and font used by the bundled extensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub text: Rgb,
    pub grid_line: Rgb,
    pub font_size: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            text: palette::TEXT,
            grid_line: palette::GRID_LINE,
            font_size: 13.0,
        }
    }
}

impl Theme {
    /// Extension presentation derived from this theme
    pub fn extension_style(&self) -> ExtensionStyle {
        ExtensionStyle {
            text_color: self.text,
            line_color: self.grid_line,
            font_size: self.font_size,
            ..ExtensionStyle::default()
        }
    }
}

/// Top-level configuration passed to bootstrap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub locale: Locale,
    pub theme: Theme,
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
