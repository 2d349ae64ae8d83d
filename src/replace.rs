//! Direction-preserving replacement of the active selection.
//!
//! External tools hand back text to put in place of the current selection.
//! After the edit the inserted text is selected again with the same
//! orientation the user had: a forward selection (or a bare cursor) ends with
//! the cursor after the text, a backward one with the cursor before it.

use crate::context::{PositionContextMut, SelectionSpan};

/// Anchor and cursor of the selection covering a replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reselection {
    pub anchor: usize,
    pub cursor: usize,
}

impl Reselection {
    pub fn start(&self) -> usize {
        self.anchor.min(self.cursor)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    pub fn is_forward(&self) -> bool {
        self.cursor >= self.anchor
    }
}

/// Selection over `replacement_len` characters inserted in place of
/// `anchor..cursor`, oriented like the original selection.
///
/// A missing anchor means no selection: the text is inserted at the cursor and
/// treated as forward.
pub fn reselect(anchor: Option<usize>, cursor: usize, replacement_len: usize) -> Reselection {
    let span = SelectionSpan::new(anchor, cursor);
    reselect_span(span, span.start + replacement_len)
}

fn reselect_span(span: SelectionSpan, replacement_end: usize) -> Reselection {
    let reselection = if span.forward {
        Reselection {
            anchor: span.start,
            cursor: replacement_end,
        }
    } else {
        Reselection {
            anchor: replacement_end,
            cursor: span.start,
        }
    };
    tracing::trace!(
        start = span.start,
        length = span.length,
        forward = span.forward,
        anchor = reselection.anchor,
        cursor = reselection.cursor,
        "reselect"
    );
    reselection
}

/// Replace the focused document's selection with `text` and select the result.
///
/// Returns the new selection, or None when no document has focus (a no-op).
pub fn replace_selection<C>(ctx: &mut C, text: &str) -> Option<Reselection>
where
    C: PositionContextMut + ?Sized,
{
    let snapshot = ctx.snapshot();
    if !snapshot.has_focused_document {
        tracing::debug!("replace selection ignored: no focused document");
        return None;
    }

    let span = snapshot.selection();
    ctx.set_cursor(span.start);
    let replacement_end = ctx.replace_range(span.start, span.length, text);
    let reselection = reselect_span(span, replacement_end);
    // Park on the fixed end first so the select extends away from it
    ctx.set_cursor(reselection.anchor);
    ctx.select(reselection.anchor, reselection.cursor);

    tracing::debug!(
        replaced = span.length,
        inserted = replacement_end - span.start,
        forward = span.forward,
        "replaced selection"
    );
    Some(reselection)
}
