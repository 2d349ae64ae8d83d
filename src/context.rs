//! Position context: the read/write seam between the core and whichever
//! document currently has focus.
//!
//! Nothing here owns a document. Hosts implement [`PositionContext`] (and
//! [`PositionContextMut`] for editing) over their own editor state; the
//! variable registry and the selection replace engine only ever see a fresh
//! [`PositionSnapshot`] per call.

/// Value snapshot of the focused document's cursor state and metrics.
///
/// Produced fresh on every query and never cached. When no editable document
/// has focus, `has_focused_document` is false and every other field holds its
/// zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub has_focused_document: bool,
    /// Cursor (head) offset in characters
    pub cursor_offset: usize,
    /// Anchor offset in characters, None when no selection is active
    pub anchor_offset: Option<usize>,
    /// 1-based line of the cursor
    pub line_number: usize,
    /// 0-based column of the cursor
    pub column_number: usize,
    pub visible_row_count: usize,
    pub visible_column_count: usize,
    pub font_point_size: u32,
    pub word_under_cursor: String,
}

impl PositionSnapshot {
    /// Snapshot reported when no editable document has focus
    pub fn unfocused() -> Self {
        Self::default()
    }

    /// Derive the current selection span
    pub fn selection(&self) -> SelectionSpan {
        SelectionSpan::new(self.anchor_offset, self.cursor_offset)
    }
}

/// Selection derived from a cursor/anchor pair.
///
/// `start = min(cursor, anchor)`, `length = |cursor - anchor|`, and `forward`
/// holds iff the cursor is at or after the anchor. A missing anchor is the
/// same as an anchor at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start: usize,
    pub length: usize,
    pub forward: bool,
}

impl SelectionSpan {
    pub fn new(anchor: Option<usize>, cursor: usize) -> Self {
        let anchor = anchor.unwrap_or(cursor);
        Self {
            start: cursor.min(anchor),
            length: cursor.abs_diff(anchor),
            forward: cursor >= anchor,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Read access to the focused document.
pub trait PositionContext {
    /// Current state of the focused document, or [`PositionSnapshot::unfocused`]
    fn snapshot(&self) -> PositionSnapshot;

    /// Text covered by the current selection, empty when nothing is selected
    /// or nothing has focus
    fn selected_text(&self) -> String;
}

/// Primitive mutations composed by the selection replace engine.
pub trait PositionContextMut: PositionContext {
    /// Move the cursor to `offset`, dropping any selection
    fn set_cursor(&mut self, offset: usize);

    /// Replace `length` characters at `offset` with `text` and return the
    /// cursor offset immediately after the inserted text
    fn replace_range(&mut self, offset: usize, length: usize, text: &str) -> usize;

    /// Select from `anchor` to `cursor`, leaving the cursor at `cursor`
    fn select(&mut self, anchor: usize, cursor: usize);
}

/// No focus is modelled as `None`: snapshots come back unfocused and edits are
/// dropped.
impl<C: PositionContext> PositionContext for Option<C> {
    fn snapshot(&self) -> PositionSnapshot {
        match self {
            Some(ctx) => ctx.snapshot(),
            None => PositionSnapshot::unfocused(),
        }
    }

    fn selected_text(&self) -> String {
        self.as_ref().map(|ctx| ctx.selected_text()).unwrap_or_default()
    }
}

impl<C: PositionContextMut> PositionContextMut for Option<C> {
    fn set_cursor(&mut self, offset: usize) {
        if let Some(ctx) = self {
            ctx.set_cursor(offset);
        }
    }

    fn replace_range(&mut self, offset: usize, length: usize, text: &str) -> usize {
        match self {
            Some(ctx) => ctx.replace_range(offset, length, text),
            None => offset,
        }
    }

    fn select(&mut self, anchor: usize, cursor: usize) {
        if let Some(ctx) = self {
            ctx.select(anchor, cursor);
        }
    }
}

impl<C: PositionContext + ?Sized> PositionContext for &C {
    fn snapshot(&self) -> PositionSnapshot {
        (**self).snapshot()
    }

    fn selected_text(&self) -> String {
        (**self).selected_text()
    }
}

impl<C: PositionContext + ?Sized> PositionContext for &mut C {
    fn snapshot(&self) -> PositionSnapshot {
        (**self).snapshot()
    }

    fn selected_text(&self) -> String {
        (**self).selected_text()
    }
}

impl<C: PositionContextMut + ?Sized> PositionContextMut for &mut C {
    fn set_cursor(&mut self, offset: usize) {
        (**self).set_cursor(offset);
    }

    fn replace_range(&mut self, offset: usize, length: usize, text: &str) -> usize {
        (**self).replace_range(offset, length, text)
    }

    fn select(&mut self, anchor: usize, cursor: usize) {
        (**self).select(anchor, cursor);
    }
}
