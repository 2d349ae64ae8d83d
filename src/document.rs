//! In-memory editor document implementing the position context.
//!
//! Hosts with their own editor widgets implement [`PositionContext`] directly;
//! this type backs the CLI and the tests.

use crate::buffer::{RopeBuffer, TextBuffer, TextBufferMut};
use crate::context::{PositionContext, PositionContextMut, PositionSnapshot, SelectionSpan};
use crate::util::word_at;

/// Visible area of the editor in rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub visible_lines: usize,
    pub visible_columns: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            visible_lines: 25,
            visible_columns: 80,
        }
    }
}

/// A focused, editable document with a single cursor
#[derive(Debug, Clone)]
pub struct EditorDocument {
    buffer: RopeBuffer,
    cursor: usize,
    anchor: Option<usize>,
    pub viewport: Viewport,
    pub font_point_size: u32,
}

impl EditorDocument {
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document holding `text` with the cursor at offset 0
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            cursor: 0,
            anchor: None,
            viewport: Viewport::default(),
            font_point_size: 14,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn buffer(&self) -> &RopeBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn selection(&self) -> SelectionSpan {
        SelectionSpan::new(self.anchor, self.cursor)
    }

    /// Place the cursor, clamped to the document, and clear the selection
    pub fn with_cursor(mut self, offset: usize) -> Self {
        self.set_cursor(offset);
        self
    }

    /// Select `anchor..cursor` (either direction), clamped to the document
    pub fn with_selection(mut self, anchor: usize, cursor: usize) -> Self {
        self.select(anchor, cursor);
        self
    }

    pub fn with_viewport(mut self, visible_lines: usize, visible_columns: usize) -> Self {
        self.viewport = Viewport {
            visible_lines,
            visible_columns,
        };
        self
    }

    pub fn with_font_point_size(mut self, size: u32) -> Self {
        self.font_point_size = size;
        self
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.buffer.len_chars())
    }

    fn line_text(&self, line: usize) -> String {
        let start = self.buffer.position_to_offset(line, 0);
        let end = self.buffer.position_to_offset(line, usize::MAX);
        self.buffer.slice(start..end)
    }
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionContext for EditorDocument {
    fn snapshot(&self) -> PositionSnapshot {
        let (line, column) = self.buffer.offset_to_position(self.cursor);
        PositionSnapshot {
            has_focused_document: true,
            cursor_offset: self.cursor,
            anchor_offset: self.anchor,
            line_number: line + 1,
            column_number: column,
            visible_row_count: self.viewport.visible_lines,
            visible_column_count: self.viewport.visible_columns,
            font_point_size: self.font_point_size,
            word_under_cursor: word_at(&self.line_text(line), column),
        }
    }

    fn selected_text(&self) -> String {
        let span = self.selection();
        self.buffer.slice(span.start..span.end())
    }
}

impl PositionContextMut for EditorDocument {
    fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.clamp(offset);
        self.anchor = None;
    }

    fn replace_range(&mut self, offset: usize, length: usize, text: &str) -> usize {
        let start = self.clamp(offset);
        let end = self.clamp(start.saturating_add(length));
        let replacement_end = self.buffer.replace(start..end, text);
        self.cursor = replacement_end;
        self.anchor = None;
        replacement_end
    }

    fn select(&mut self, anchor: usize, cursor: usize) {
        self.anchor = Some(self.clamp(anchor));
        self.cursor = self.clamp(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reports_line_and_column() {
        let doc = EditorDocument::with_text("first\nsecond line").with_cursor(9);
        let snapshot = doc.snapshot();
        assert!(snapshot.has_focused_document);
        assert_eq!(snapshot.line_number, 2);
        assert_eq!(snapshot.column_number, 3);
        assert_eq!(snapshot.word_under_cursor, "second");
        assert_eq!(snapshot.anchor_offset, None);
    }

    #[test]
    fn test_selected_text_either_direction() {
        let forward = EditorDocument::with_text("hello world").with_selection(0, 5);
        let backward = EditorDocument::with_text("hello world").with_selection(5, 0);
        assert_eq!(forward.selected_text(), "hello");
        assert_eq!(backward.selected_text(), "hello");
    }

    #[test]
    fn test_replace_range_moves_cursor_past_insertion() {
        let mut doc = EditorDocument::with_text("hello world");
        let end = doc.replace_range(6, 5, "there");
        assert_eq!(doc.text(), "hello there");
        assert_eq!(end, 11);
        assert_eq!(doc.cursor(), 11);
    }

    #[test]
    fn test_offsets_are_clamped() {
        let doc = EditorDocument::with_text("abc").with_selection(1, 99);
        assert_eq!(doc.cursor(), 3);
        assert_eq!(doc.anchor(), Some(1));
    }
}
