//! docvars - focused-document context for editor hosts
//!
//! This crate provides the pieces an editor host wires into its event loop:
//! named context variables resolved lazily against the focused document,
//! direction-preserving replacement of the active selection, and the search
//! results palette derived from the font/format theme.

pub mod buffer;
pub mod cli;
pub mod code_style;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod context;
pub mod document;
pub mod expand;
pub mod messages;
pub mod model;
pub mod replace;
pub mod search_results;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;
pub mod variables;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use context::{PositionContext, PositionContextMut, PositionSnapshot, SelectionSpan};
pub use document::EditorDocument;
pub use expand::expand;
pub use messages::Msg;
pub use model::AppModel;
pub use replace::{replace_selection, reselect, Reselection};
pub use search_results::{build_palette, SearchPalette, SearchResultStyle, StylePalette};
pub use theme::Theme;
pub use variables::{Value, VariableError, VariableKind, VariableRegistry};
