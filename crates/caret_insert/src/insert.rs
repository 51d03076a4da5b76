//! Insert-at-caret with selection-replace semantics.
//!
//! The whole edit is a single splice: everything before the selection, the new
//! text, everything after the selection. A collapsed selection makes this a
//! plain insertion; a non-empty one is replaced. The caret then collapses to
//! just after the inserted text and the element is focused.

use crate::element::TextInputElement;
use crate::options::InsertOptions;
use crate::selection::SelectionRange;

const LOG_TARGET: &str = "caret_insert";

/// Result of [`splice`]: the new value and where the caret belongs in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Splice {
    pub value: String,
    /// The range of the *old* value that was replaced, after clamping.
    pub replaced: SelectionRange,
    /// Byte offset just past the inserted text in `value`.
    pub caret: usize,
}

/// What an insertion did to an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insertion {
    /// The range of the previous value that was replaced, after clamping.
    pub replaced: SelectionRange,
    /// Where the collapsed caret now sits.
    pub caret: usize,
}

/// Replace `selection` in `text` with `new_text`.
///
/// A selection that does not fit `text` is clamped first (see
/// [`SelectionRange::clamp_to`]) so this never panics.
///
/// # Examples
///
/// ```
/// use caret_insert::{SelectionRange, splice};
///
/// let out = splice("hello world", SelectionRange::new(6, 11), "there");
/// assert_eq!(out.value, "hello there");
/// assert_eq!(out.caret, 11);
/// ```
pub fn splice(text: &str, selection: SelectionRange, new_text: &str) -> Splice {
    let range = if selection.fits(text) {
        selection
    } else {
        let clamped = selection.clamp_to(text);
        log::warn!(
            target: LOG_TARGET,
            "selection {}..{} does not fit value of {} bytes; clamped to {}..{}",
            selection.start,
            selection.end,
            text.len(),
            clamped.start,
            clamped.end
        );
        clamped
    };

    let before = &text[..range.start];
    let after = &text[range.end..];

    let mut value = String::with_capacity(before.len() + new_text.len() + after.len());
    value.push_str(before);
    value.push_str(new_text);
    value.push_str(after);

    Splice {
        value,
        replaced: range,
        caret: range.start + new_text.len(),
    }
}

/// Insert `new_text` at the element's caret, replacing any selection.
///
/// Afterwards the element's value is `before + new_text + after`, the caret
/// is collapsed at `start + new_text.len()`, and the element has focus.
/// `new_text` is inserted verbatim, line breaks included.
///
/// # Examples
///
/// ```
/// use caret_insert::{MemoryTextInput, SelectionRange, TextInputElement, insert_at_cursor};
///
/// let mut input = MemoryTextInput::with_selection("hello world", SelectionRange::new(6, 11));
/// insert_at_cursor(&mut input, "there");
///
/// assert_eq!(input.value(), "hello there");
/// assert_eq!(input.selection(), SelectionRange::caret(11));
/// assert!(input.is_focused());
/// ```
pub fn insert_at_cursor<E>(element: &mut E, new_text: &str) -> Insertion
where
    E: TextInputElement + ?Sized,
{
    let selection = element.selection();
    let out = splice(&element.value(), selection, new_text);

    log::trace!(
        target: LOG_TARGET,
        "insert {} bytes over {}..{}, caret -> {}",
        new_text.len(),
        out.replaced.start,
        out.replaced.end,
        out.caret
    );

    element.set_value(out.value);
    element.set_selection(SelectionRange::caret(out.caret));
    element.focus();

    Insertion {
        replaced: out.replaced,
        caret: out.caret,
    }
}

/// Like [`insert_at_cursor`], applying `options` to `new_text` first.
///
/// The caret lands after the text as actually inserted.
pub fn insert_at_cursor_with<E>(
    element: &mut E,
    new_text: &str,
    options: &InsertOptions,
) -> Insertion
where
    E: TextInputElement + ?Sized,
{
    let new_text = options.newlines.apply(new_text);
    insert_at_cursor(element, &new_text)
}
