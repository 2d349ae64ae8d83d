//! Command-line argument parsing for the docvars tool
//!
//! Every document command loads a file as the focused document, places the
//! cursor and optional anchor (character offsets), then acts on it.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::document::EditorDocument;
use crate::search_results::SearchResultsFont;

/// Inspect and edit a document through its context variables
#[derive(Parser, Debug)]
#[command(
    name = "docvars",
    version,
    about = "Context variables and selection replacement for a document"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List every context variable with its current value
    Vars {
        #[command(flatten)]
        document: DocumentArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand %{Name} references in one or more templates
    Expand {
        #[command(flatten)]
        document: DocumentArgs,

        /// Templates to expand, one output line each
        #[arg(value_name = "TEMPLATE", required = true)]
        templates: Vec<String>,
    },

    /// Replace the selection with text and reselect it
    Replace {
        #[command(flatten)]
        document: DocumentArgs,

        /// Replacement text
        #[arg(long)]
        text: String,

        /// Write the result back to the file instead of printing it
        #[arg(long)]
        in_place: bool,
    },

    /// Print the search results palette of a theme
    Palette {
        /// Theme id (defaults to the configured theme)
        #[arg(long)]
        theme: Option<String>,
    },
}

/// The document to focus and where its cursor sits
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// File to open as the focused document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor offset in characters
    #[arg(long, value_name = "OFFSET", default_value_t = 0)]
    pub cursor: usize,

    /// Anchor offset in characters (omit for no selection)
    #[arg(long, value_name = "OFFSET")]
    pub anchor: Option<usize>,

    /// Visible rows of the simulated editor
    #[arg(long, default_value_t = 25)]
    pub rows: usize,

    /// Visible columns of the simulated editor
    #[arg(long, default_value_t = 80)]
    pub columns: usize,

    /// Font size in points (defaults to the configured, zoomed size)
    #[arg(long, value_name = "POINTS")]
    pub font_size: Option<u32>,
}

impl DocumentArgs {
    /// Build the focused document from `text` and these arguments
    pub fn document(&self, text: &str, config: &EditorConfig) -> EditorDocument {
        let font_size = self
            .font_size
            .unwrap_or_else(|| SearchResultsFont::from_config(&config.font).point_size);
        let document = EditorDocument::with_text(text)
            .with_viewport(self.rows, self.columns)
            .with_font_point_size(font_size);
        match self.anchor {
            Some(anchor) => document.with_selection(anchor, self.cursor),
            None => document.with_cursor(self.cursor),
        }
    }

    /// Read the file and build the focused document
    pub fn load(&self, config: &EditorConfig) -> std::io::Result<EditorDocument> {
        let text = std::fs::read_to_string(&self.file)?;
        Ok(self.document(&text, config))
    }
}
