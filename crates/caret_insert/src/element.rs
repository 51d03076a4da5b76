//! Capability contract for text-input elements.
//!
//! Anything that exposes a plain-text value, a selection range and a way to
//! take focus can be edited by [`insert_at_cursor`](crate::insert_at_cursor).
//! Concrete UI bindings implement [`TextInputElement`]; the editing logic never
//! sees the toolkit behind it.

use crate::selection::SelectionRange;
use std::borrow::Cow;

/// A host-owned text-input control, borrowed for the duration of one edit.
///
/// Offsets are UTF-8 byte indices into [`value`](Self::value). Implementations
/// backed by hosts that count in other units convert at this boundary.
///
/// # Integration Pattern
///
/// ```ignore
/// struct MyField<'a>(&'a mut toolkit::LineEdit);
///
/// impl TextInputElement for MyField<'_> {
///     fn value(&self) -> Cow<'_, str> { Cow::Borrowed(self.0.text()) }
///     fn set_value(&mut self, value: String) { self.0.set_text(value) }
///     // ...
/// }
/// ```
pub trait TextInputElement {
    /// Current full plain-text content.
    ///
    /// Borrowed for hosts that keep the text in Rust memory, owned for hosts
    /// (such as the DOM) that hand out a fresh copy on every read.
    fn value(&self) -> Cow<'_, str>;

    /// Replace the full content.
    fn set_value(&mut self, value: String);

    /// Current selection. Collapsed when there is only a caret.
    fn selection(&self) -> SelectionRange;

    /// Set the selection. A collapsed range places the caret.
    fn set_selection(&mut self, selection: SelectionRange);

    /// Give this element input focus.
    fn focus(&mut self);
}

impl<E: TextInputElement + ?Sized> TextInputElement for &mut E {
    #[inline]
    fn value(&self) -> Cow<'_, str> {
        (**self).value()
    }

    #[inline]
    fn set_value(&mut self, value: String) {
        (**self).set_value(value)
    }

    #[inline]
    fn selection(&self) -> SelectionRange {
        (**self).selection()
    }

    #[inline]
    fn set_selection(&mut self, selection: SelectionRange) {
        (**self).set_selection(selection)
    }

    #[inline]
    fn focus(&mut self) {
        (**self).focus()
    }
}

impl<E: TextInputElement + ?Sized> TextInputElement for Box<E> {
    #[inline]
    fn value(&self) -> Cow<'_, str> {
        (**self).value()
    }

    #[inline]
    fn set_value(&mut self, value: String) {
        (**self).set_value(value)
    }

    #[inline]
    fn selection(&self) -> SelectionRange {
        (**self).selection()
    }

    #[inline]
    fn set_selection(&mut self, selection: SelectionRange) {
        (**self).set_selection(selection)
    }

    #[inline]
    fn focus(&mut self) {
        (**self).focus()
    }
}
