//! Font/format theme
//!
//! Provides YAML-based text formats (foreground/background per role) with
//! compile-time embedded themes and user-defined themes from the config
//! directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/docvars/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unknown theme id: {0}")]
    UnknownTheme(String),

    #[error("invalid color format: {0}")]
    InvalidColor(String),
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, ThemeError> {
    let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, ThemeError> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, ThemeError> {
        let hex = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| ThemeError::InvalidColor(s.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ThemeError::InvalidColor(s.to_string())),
        }
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Themed roles a text format can be looked up for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatRole {
    /// Plain text
    Text,
    /// Generic search result
    SearchResult,
    /// First alternating search result style
    SearchResultAlt1,
    /// Second alternating search result style
    SearchResultAlt2,
    /// Function or scope containing a search result
    SearchResultContainingFunction,
}

/// Foreground/background pair for one role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format {
    pub foreground: Color,
    pub background: Color,
}

impl Format {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// Source of per-role text formats
pub trait ThemeProvider {
    fn format_for(&self, role: FormatRole) -> Format;
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub formats: FormatsData,
}

/// Per-role formats (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct FormatsData {
    pub text: FormatData,
    pub search_result: FormatData,
    /// Falls back to `search_result`
    #[serde(default)]
    pub search_result_alt1: Option<FormatData>,
    /// Falls back to `search_result`
    #[serde(default)]
    pub search_result_alt2: Option<FormatData>,
    /// Falls back to `text`
    #[serde(default)]
    pub search_result_containing_function: Option<FormatData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatData {
    pub foreground: String,
    pub background: String,
}

impl FormatData {
    fn resolve(&self) -> Result<Format, ThemeError> {
        Ok(Format::new(
            Color::from_hex(&self.foreground)?,
            Color::from_hex(&self.background)?,
        ))
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub text: Format,
    pub search_result: Format,
    pub search_result_alt1: Format,
    pub search_result_alt2: Format,
    pub search_result_containing_function: Format,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let data: ThemeData = serde_yaml::from_str(yaml)?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, ThemeError> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ThemeError::UnknownTheme(id.to_string()))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, ThemeError> {
        let formats = &data.formats;
        let text = formats.text.resolve()?;
        let search_result = formats.search_result.resolve()?;
        let or_fallback = |format: &Option<FormatData>, fallback: Format| {
            format
                .as_ref()
                .map(FormatData::resolve)
                .transpose()
                .map(|f| f.unwrap_or(fallback))
        };

        Ok(Theme {
            search_result_alt1: or_fallback(&formats.search_result_alt1, search_result)?,
            search_result_alt2: or_fallback(&formats.search_result_alt2, search_result)?,
            search_result_containing_function: or_fallback(
                &formats.search_result_containing_function,
                text,
            )?,
            name: data.name,
            text,
            search_result,
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Embedded dark theme failed to parse: {}", e);
                let text = Format::new(Color::rgb(0xD4, 0xD4, 0xD4), Color::rgb(0x1E, 0x1E, 0x1E));
                let result =
                    Format::new(Color::rgb(0x00, 0x00, 0x00), Color::rgb(0xFF, 0xEF, 0x0B));
                Theme {
                    name: "Default Dark".to_string(),
                    text,
                    search_result: result,
                    search_result_alt1: result,
                    search_result_alt2: result,
                    search_result_containing_function: text,
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

impl ThemeProvider for Theme {
    fn format_for(&self, role: FormatRole) -> Format {
        match role {
            FormatRole::Text => self.text,
            FormatRole::SearchResult => self.search_result,
            FormatRole::SearchResultAlt1 => self.search_result_alt1,
            FormatRole::SearchResultAlt2 => self.search_result_alt2,
            FormatRole::SearchResultContainingFunction => self.search_result_containing_function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_round_trip_forms() {
        assert_eq!(Color::from_hex("#1E1E1E").unwrap(), Color::rgb(0x1E, 0x1E, 0x1E));
        assert_eq!(Color::from_hex("1E1E1E80").unwrap().a, 0x80);
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_hex(), "#AB01FF");
        assert_eq!(Color::rgba(0, 0, 0, 0x80).to_hex(), "#00000080");
    }

    #[test]
    fn test_color_rejects_garbage() {
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ThemeError::InvalidColor(_))
        ));
        assert!(Color::from_hex("#GG0000").is_err());
        // Multi-byte input must not panic on slicing
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_optional_formats_fall_back() {
        let yaml = r##"
version: 1
name: "Minimal"
formats:
  text:
    foreground: "#101010"
    background: "#FAFAFA"
  search_result:
    foreground: "#000000"
    background: "#FFFF00"
"##;
        let theme = Theme::from_yaml(yaml).unwrap();
        assert_eq!(theme.search_result_alt1, theme.search_result);
        assert_eq!(theme.search_result_alt2, theme.search_result);
        assert_eq!(theme.search_result_containing_function, theme.text);
    }
}
