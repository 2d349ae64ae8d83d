//! Utility modules

pub mod text;

pub use text::{char_type, normalize_paragraph_separators, word_at, CharType, PARAGRAPH_SEPARATOR};
