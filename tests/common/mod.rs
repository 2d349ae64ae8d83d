//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use docvars::document::EditorDocument;
use docvars::search_results::{SearchPalette, SearchResultsFont, SearchResultsSink};

/// Create a focused document with the given text, anchor and cursor
pub fn focused(text: &str, anchor: Option<usize>, cursor: usize) -> EditorDocument {
    match anchor {
        Some(anchor) => EditorDocument::with_text(text).with_selection(anchor, cursor),
        None => EditorDocument::with_text(text).with_cursor(cursor),
    }
}

/// Sink recording every push in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub styles: Vec<(SearchResultsFont, SearchPalette)>,
    pub tab_widths: Vec<usize>,
}

impl SearchResultsSink for RecordingSink {
    fn set_text_editor_font(&mut self, font: &SearchResultsFont, palette: &SearchPalette) {
        self.styles.push((font.clone(), *palette));
    }

    fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_widths.push(tab_width);
    }
}
