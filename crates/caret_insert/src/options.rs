//! Insertion options.

use crate::text::{filter_single_line, normalize_newlines};
use std::borrow::Cow;

/// How line breaks in the inserted text are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NewlineMode {
    /// Insert the text exactly as given.
    #[default]
    Verbatim,
    /// Drop CR and LF, as single-line `<input>` controls do.
    Strip,
    /// Rewrite CRLF and lone CR to LF, as `<textarea>` does.
    Normalize,
}

impl NewlineMode {
    /// Apply this mode to `s`, borrowing when nothing changes.
    pub fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self {
            NewlineMode::Verbatim => Cow::Borrowed(s),
            NewlineMode::Strip => filter_single_line(s),
            NewlineMode::Normalize => normalize_newlines(s),
        }
    }
}

/// Options for [`insert_at_cursor_with`](crate::insert_at_cursor_with).
///
/// The default inserts text verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertOptions {
    pub newlines: NewlineMode,
}

impl InsertOptions {
    /// Options matching a single-line text field.
    pub const fn single_line() -> Self {
        Self {
            newlines: NewlineMode::Strip,
        }
    }

    /// Options matching a multi-line text area.
    pub const fn multi_line() -> Self {
        Self {
            newlines: NewlineMode::Normalize,
        }
    }

    pub const fn with_newlines(mut self, newlines: NewlineMode) -> Self {
        self.newlines = newlines;
        self
    }
}
