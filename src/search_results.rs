//! Search results styling derived from the active theme.
//!
//! The search results view distinguishes three highlight styles so that
//! interleaved matches (e.g. from several files) alternate visibly. Every
//! style shares the plain text and containing-scope colors; only the match
//! colors differ. The palette is always rebuilt and pushed as a whole.

use crate::config::FontConfig;
use crate::theme::{Color, FormatRole, ThemeProvider};

/// Highlight style of a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResultStyle {
    Default,
    Alt1,
    Alt2,
}

impl SearchResultStyle {
    pub const ALL: [SearchResultStyle; 3] = [
        SearchResultStyle::Default,
        SearchResultStyle::Alt1,
        SearchResultStyle::Alt2,
    ];

    /// Theme role providing this style's match colors
    pub fn format_role(self) -> FormatRole {
        match self {
            SearchResultStyle::Default => FormatRole::SearchResult,
            SearchResultStyle::Alt1 => FormatRole::SearchResultAlt1,
            SearchResultStyle::Alt2 => FormatRole::SearchResultAlt2,
        }
    }

    fn index(self) -> usize {
        match self {
            SearchResultStyle::Default => 0,
            SearchResultStyle::Alt1 => 1,
            SearchResultStyle::Alt2 => 2,
        }
    }
}

/// Colors for one search result style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePalette {
    pub style: SearchResultStyle,
    pub text_background: Color,
    pub text_foreground: Color,
    pub match_background: Color,
    pub match_foreground: Color,
    pub containing_scope_background: Color,
    pub containing_scope_foreground: Color,
}

/// One [`StylePalette`] per [`SearchResultStyle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPalette {
    entries: [StylePalette; 3],
}

impl SearchPalette {
    pub fn get(&self, style: SearchResultStyle) -> &StylePalette {
        &self.entries[style.index()]
    }

    /// Entries in `Default`, `Alt1`, `Alt2` order
    pub fn iter(&self) -> impl Iterator<Item = &StylePalette> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Build the full three-style palette from `theme`
pub fn build_palette(theme: &dyn ThemeProvider) -> SearchPalette {
    let text = theme.format_for(FormatRole::Text);
    let scope = theme.format_for(FormatRole::SearchResultContainingFunction);

    let entries = SearchResultStyle::ALL.map(|style| {
        let result = theme.format_for(style.format_role());
        StylePalette {
            style,
            text_background: text.background,
            text_foreground: text.foreground,
            match_background: result.background,
            match_foreground: result.foreground,
            containing_scope_background: scope.background,
            containing_scope_foreground: scope.foreground,
        }
    });

    SearchPalette { entries }
}

/// Font the search results view renders text with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultsFont {
    pub family: String,
    pub point_size: u32,
}

impl SearchResultsFont {
    /// Editor font scaled by its zoom percentage, saturating at `u32::MAX`
    pub fn from_config(font: &FontConfig) -> Self {
        let scaled = u64::from(font.size) * u64::from(font.zoom) / 100;
        Self {
            family: font.family.clone(),
            point_size: u32::try_from(scaled).unwrap_or(u32::MAX),
        }
    }
}

/// Receiver of search results styling.
///
/// Font and palette always arrive together in one call, so a sink never
/// holds colors from two different themes.
pub trait SearchResultsSink {
    fn set_text_editor_font(&mut self, font: &SearchResultsFont, palette: &SearchPalette);

    fn set_tab_width(&mut self, tab_width: usize);
}

/// Sink that keeps the most recently pushed styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultsState {
    pub font: Option<SearchResultsFont>,
    pub palette: Option<SearchPalette>,
    pub tab_width: Option<usize>,
}

impl SearchResultsSink for SearchResultsState {
    fn set_text_editor_font(&mut self, font: &SearchResultsFont, palette: &SearchPalette) {
        self.font = Some(font.clone());
        self.palette = Some(*palette);
    }

    fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = Some(tab_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Format;

    struct Solid;

    impl ThemeProvider for Solid {
        fn format_for(&self, role: FormatRole) -> Format {
            let shade = match role {
                FormatRole::Text => 1,
                FormatRole::SearchResult => 2,
                FormatRole::SearchResultAlt1 => 3,
                FormatRole::SearchResultAlt2 => 4,
                FormatRole::SearchResultContainingFunction => 5,
            };
            Format::new(Color::rgb(shade, 0, 0), Color::rgb(0, shade, 0))
        }
    }

    #[test]
    fn test_palette_roles_map_to_theme_roles() {
        let palette = build_palette(&Solid);
        assert_eq!(palette.get(SearchResultStyle::Default).match_foreground.r, 2);
        assert_eq!(palette.get(SearchResultStyle::Alt1).match_foreground.r, 3);
        assert_eq!(palette.get(SearchResultStyle::Alt2).match_background.g, 4);
    }

    #[test]
    fn test_palette_order_and_styles() {
        let palette = build_palette(&Solid);
        let styles: Vec<_> = palette.iter().map(|p| p.style).collect();
        assert_eq!(styles, SearchResultStyle::ALL.to_vec());
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_font_applies_zoom() {
        let font = FontConfig {
            family: "Mono".to_string(),
            size: 12,
            zoom: 150,
        };
        assert_eq!(SearchResultsFont::from_config(&font).point_size, 18);
    }

    #[test]
    fn test_font_zoom_large_values_do_not_overflow() {
        let font = FontConfig {
            family: "Mono".to_string(),
            size: 100_000,
            zoom: 100_000,
        };
        assert_eq!(SearchResultsFont::from_config(&font).point_size, 100_000_000);

        let huge = FontConfig {
            family: "Mono".to_string(),
            size: u32::MAX,
            zoom: u32::MAX,
        };
        assert_eq!(SearchResultsFont::from_config(&huge).point_size, u32::MAX);
    }
}
