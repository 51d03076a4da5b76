//! Standalone in-memory text input.

use crate::element::TextInputElement;
use crate::selection::SelectionRange;
use std::borrow::Cow;

/// A text input that lives entirely in memory.
///
/// Useful for headless hosts and tests. Values written through
/// [`TextInputElement`] are stored as-is; selections are stored as given,
/// so callers can model hosts that report inconsistent ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryTextInput {
    value: String,
    selection: SelectionRange,
    focused: bool,
}

impl MemoryTextInput {
    /// An unfocused input holding `value`, with the caret at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let selection = SelectionRange::caret(value.len());
        Self {
            value,
            selection,
            focused: false,
        }
    }

    /// An unfocused input holding `value` with the given selection.
    pub fn with_selection(value: impl Into<String>, selection: SelectionRange) -> Self {
        Self {
            value: value.into(),
            selection,
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Drop focus, as when the user tabs away.
    pub fn blur(&mut self) {
        self.focused = false;
    }
}

impl TextInputElement for MemoryTextInput {
    fn value(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.value)
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        self.selection = selection;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
