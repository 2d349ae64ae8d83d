//! Application model - the host state the update functions act on

use crate::code_style::TabSettings;
use crate::config::EditorConfig;
use crate::document::EditorDocument;
use crate::theme::{load_theme, Theme};

/// Host state: the focused document (if any) plus the active styling
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The focused editable document, None when focus is elsewhere
    pub focused: Option<EditorDocument>,
    pub theme: Theme,
    pub config: EditorConfig,
    pub tab_settings: TabSettings,
}

impl AppModel {
    /// Build the model from `config`, loading its theme.
    ///
    /// A theme that fails to load falls back to the default dark theme.
    pub fn new(config: EditorConfig) -> Self {
        let theme = match load_theme(&config.theme) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Failed to load theme {:?}: {}", config.theme, e);
                Theme::default()
            }
        };
        Self::with_theme(config, theme)
    }

    /// Build the model with an already resolved theme
    pub fn with_theme(config: EditorConfig, theme: Theme) -> Self {
        let tab_settings = config.tab_settings();
        Self {
            focused: None,
            theme,
            config,
            tab_settings,
        }
    }

    pub fn with_focused(mut self, document: EditorDocument) -> Self {
        self.focused = Some(document);
        self
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::with_theme(EditorConfig::default(), Theme::default())
    }
}
