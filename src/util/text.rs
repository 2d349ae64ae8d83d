//! Utility functions for document text

use std::ops::Range;

/// Unicode paragraph separator (U+2029), emitted by some hosts in place of line breaks
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Character class used to find word boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters
    Whitespace,
    /// Alphanumeric characters and underscore
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

/// Get the character class for word lookup
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if ch.is_alphanumeric() || ch == '_' {
        CharType::WordChar
    } else {
        CharType::Punctuation
    }
}

fn is_word_char(ch: char) -> bool {
    char_type(ch) == CharType::WordChar
}

/// Column range of the word touching `column` in `line`.
///
/// The word starting at `column` wins; otherwise a word ending exactly at
/// `column` is taken. Returns None when the cursor touches no word.
fn word_range_at(line: &str, column: usize) -> Option<Range<usize>> {
    let chars: Vec<char> = line.chars().collect();
    let column = column.min(chars.len());

    let pivot = if chars.get(column).copied().is_some_and(is_word_char) {
        column
    } else if column > 0 && is_word_char(chars[column - 1]) {
        column - 1
    } else {
        return None;
    };

    let mut start = pivot;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = pivot + 1;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }
    Some(start..end)
}

/// The word touching `column` in `line`, or an empty string
pub fn word_at(line: &str, column: usize) -> String {
    match word_range_at(line, column) {
        Some(range) => line
            .chars()
            .skip(range.start)
            .take(range.end - range.start)
            .collect(),
        None => String::new(),
    }
}

/// Replace every paragraph separator with `\n`
pub fn normalize_paragraph_separators(text: &str) -> String {
    text.replace(PARAGRAPH_SEPARATOR, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_type() {
        assert_eq!(char_type('a'), CharType::WordChar);
        assert_eq!(char_type('_'), CharType::WordChar);
        assert_eq!(char_type('7'), CharType::WordChar);
        assert_eq!(char_type(' '), CharType::Whitespace);
        assert_eq!(char_type('.'), CharType::Punctuation);
    }

    #[test]
    fn test_word_inside() {
        assert_eq!(word_at("hello world", 2), "hello");
        assert_eq!(word_at("hello world", 8), "world");
    }

    #[test]
    fn test_word_at_boundaries() {
        // Start of word
        assert_eq!(word_at("hello world", 6), "world");
        // Just past the end of a word
        assert_eq!(word_at("hello world", 5), "hello");
        assert_eq!(word_at("hello world", 11), "world");
    }

    #[test]
    fn test_no_word() {
        assert_eq!(word_at("a  b", 2), "");
        assert_eq!(word_at("", 0), "");
        assert_eq!(word_at("(())", 2), "");
    }

    #[test]
    fn test_word_with_underscore_and_unicode() {
        assert_eq!(word_at("let snake_case = 1;", 7), "snake_case");
        assert_eq!(word_range_at("é_x y", 0), Some(0..3));
    }

    #[test]
    fn test_normalize_paragraph_separators() {
        let text = format!("one{}two", PARAGRAPH_SEPARATOR);
        assert_eq!(normalize_paragraph_separators(&text), "one\ntwo");
        assert_eq!(normalize_paragraph_separators("plain"), "plain");
    }
}
