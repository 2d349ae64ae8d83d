//! Message types for the Elm-style architecture
//!
//! Host events reach the core as these messages.

use crate::code_style::TabSettings;
use crate::config::FontConfig;
use crate::document::EditorDocument;
use crate::theme::Theme;

#[derive(Debug, Clone)]
pub enum Msg {
    /// Host finished initializing; push the initial search results styling
    Startup,
    /// The font/format theme changed
    ThemeChanged(Theme),
    /// The editor font changed
    FontChanged(FontConfig),
    /// The active code style's tab settings changed
    TabSettingsChanged(TabSettings),
    /// An external tool asked to replace the current selection
    ReplaceSelectionRequested(String),
    /// Focus moved to another document, or away from all documents
    FocusChanged(Option<EditorDocument>),
}
