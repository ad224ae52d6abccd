//! Color helpers for extension presentation.
//!
//! Colors are handed to the drawing context as CSS strings, which Canvas 2D
//! accepts directly. Config files may spell a color either as a CSS string
//! (`"#D9D9D9"`, `"rgb(217, 217, 217)"`) or as an `{ "r", "g", "b" }` object.

use serde::{de, Deserialize, Deserializer, Serialize};

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Accepted input shapes for a color.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Css(String),
    Channels { r: u8, g: u8, b: u8 },
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ColorSpec::deserialize(deserializer)? {
            ColorSpec::Css(css) => Self::parse(&css)
                .ok_or_else(|| de::Error::custom(format!("invalid color `{css}`"))),
            ColorSpec::Channels { r, g, b } => Ok(Self::new(r, g, b)),
        }
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `rgb(r, g, b)`.
    pub fn parse(css: &str) -> Option<Self> {
        let css = css.trim();

        if let Some(digits) = css.strip_prefix('#') {
            if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let [_, r, g, b] = u32::from_str_radix(digits, 16).ok()?.to_be_bytes();
            return Some(Self::new(r, g, b));
        }

        let inner = css.strip_prefix("rgb(")?.strip_suffix(')')?;
        let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>().ok());
        match (channels.next(), channels.next(), channels.next(), channels.next()) {
            (Some(Some(r)), Some(Some(g)), Some(Some(b)), None) => Some(Self::new(r, g, b)),
            _ => None,
        }
    }

    /// CSS functional form used for canvas styles.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Colors used by the header and overlay extensions
pub mod palette {
    use super::Rgb;

    /// Glyph/text fill
    pub const TEXT: Rgb = Rgb::new(0, 0, 0);
    /// Boundary line color (light gray)
    pub const GRID_LINE: Rgb = Rgb::new(217, 217, 217);
}
