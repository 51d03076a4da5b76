//! Per-input state kept by the [`InputValueStore`](crate::InputValueStore).

use crate::selection::SelectionRange;

#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    /// The current text value.
    pub value: String,

    /// Monotonic revision counter, incremented on any text change.
    pub value_rev: u64,

    /// Current selection; collapsed when only a caret is shown.
    /// Kept within `value` and on UTF-8 char boundaries.
    pub selection: SelectionRange,
}

impl InputState {
    pub fn new(value: String) -> Self {
        let selection = SelectionRange::caret(value.len());
        Self {
            value,
            value_rev: 0,
            selection,
        }
    }
}
