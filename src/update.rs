//! Update functions for the Elm-style architecture
//!
//! All host state transformations flow through [`update`].

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::replace::replace_selection;
use crate::search_results::{build_palette, SearchResultsFont};

/// Main update function
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Startup => Some(Cmd::batch(vec![
            search_results_style(model),
            Cmd::PushTabWidth(model.tab_settings.tab_size),
        ])),

        Msg::ThemeChanged(theme) => {
            tracing::info!("Theme changed to {}", theme.name);
            model.theme = theme;
            Some(search_results_style(model))
        }

        Msg::FontChanged(font) => {
            model.config.font = font;
            Some(search_results_style(model))
        }

        Msg::TabSettingsChanged(settings) => {
            model.tab_settings = settings;
            Some(Cmd::PushTabWidth(settings.tab_size))
        }

        Msg::ReplaceSelectionRequested(text) => {
            replace_selection(&mut model.focused, &text);
            None
        }

        Msg::FocusChanged(document) => {
            model.focused = document;
            None
        }
    }
}

fn search_results_style(model: &AppModel) -> Cmd {
    Cmd::PushSearchResultsStyle {
        font: SearchResultsFont::from_config(&model.config.font),
        palette: build_palette(&model.theme),
    }
}
