// Theme document assembly
//
// The theme file the editor extension loads:
//
//   { "name": ..., "type": ..., "colors": {...}, "tokenColors": [...] }
//
// `colors` comes from palette resolution, `tokenColors` straight from the
// token manifest. Output is JSON indented with four spaces.

use crate::palette::ThemeColors;
use serde::Serialize;
use serde_json::Value;

/// Base UI type of the theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ThemeType {
    #[default]
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "hc")]
    HighContrast,
}

impl ThemeType {
    /// Parse type string from config; unknown values fall back to dark
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            "hc" | "high-contrast" => Self::HighContrast,
            _ => Self::Dark,
        }
    }

    /// Convert to string for display and TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::HighContrast => "hc",
        }
    }
}

/// The generated theme file
#[derive(Debug, Clone, Serialize)]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeType,
    pub colors: ThemeColors,
    #[serde(rename = "tokenColors")]
    pub token_colors: Value,
}

impl ThemeDocument {
    pub fn new(
        name: impl Into<String>,
        kind: ThemeType,
        colors: ThemeColors,
        token_colors: Value,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            colors,
            token_colors,
        }
    }

    /// Serialize with four-space indentation and a trailing newline
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
