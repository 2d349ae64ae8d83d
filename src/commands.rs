//! Command types for the Elm-style architecture
//!
//! Commands are side effects produced by [`update`](crate::update::update)
//! and carried out against the search results sink by [`Cmd::run`].

use crate::search_results::{SearchPalette, SearchResultsFont, SearchResultsSink};

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Replace the search results font and whole palette
    PushSearchResultsStyle {
        font: SearchResultsFont,
        palette: SearchPalette,
    },
    /// Set the search results tab width
    PushTabWidth(usize),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Deliver this command to `sink`
    pub fn run(self, sink: &mut dyn SearchResultsSink) {
        match self {
            Cmd::None => {}
            Cmd::PushSearchResultsStyle { font, palette } => {
                tracing::debug!(family = %font.family, "pushing search results style");
                sink.set_text_editor_font(&font, &palette);
            }
            Cmd::PushTabWidth(width) => {
                tracing::debug!(width, "pushing search results tab width");
                sink.set_tab_width(width);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.run(sink);
                }
            }
        }
    }
}
