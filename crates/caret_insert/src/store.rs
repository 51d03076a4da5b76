//! Keyed store of input values, selections and focus.
//!
//! Hosts that manage many form controls (a page full of `<input>` and
//! `<textarea>` elements, say) keep their editing state here and borrow a
//! [`StoreInput`] handle for the one being edited. The handle implements
//! [`TextInputElement`], so it can be passed straight to
//! [`insert_at_cursor`](crate::insert_at_cursor).

use crate::element::TextInputElement;
use crate::id::InputId;
use crate::insert::{Insertion, insert_at_cursor_with};
use crate::options::InsertOptions;
use crate::selection::SelectionRange;
use crate::state::InputState;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

const LOG_TARGET: &str = "caret_insert::store";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No entry has been created for this id.
    UnknownInput(InputId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnknownInput(id) => write!(f, "unknown input: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Central store for input element state.
///
/// At most one input is focused at a time; focusing one moves focus away
/// from the previous one.
///
/// # Example
///
/// ```
/// use caret_insert::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "Hello".to_string());
/// store.insert_at_cursor(id, " World").unwrap();
///
/// assert_eq!(store.get(id), Some("Hello World"));
/// assert_eq!(store.focused(), Some(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
    focused: Option<InputId>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if an entry exists for this input.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Ensure an entry exists; if missing, inserts `initial` with the caret at the end.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.values
            .entry(id)
            .or_insert_with(|| InputState::new(initial));
    }

    /// Set/overwrite the value for this input.
    ///
    /// This moves the caret to the end and clears any selection.
    pub fn set(&mut self, id: InputId, value: String) {
        let value_rev = self
            .values
            .get(&id)
            .map(|s| s.value_rev.wrapping_add(1))
            .unwrap_or(0);
        let mut st = InputState::new(value);
        st.value_rev = value_rev;
        self.values.insert(id, st);
    }

    /// Returns the stored value for this input, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Returns the current selection for this input, if any.
    pub fn selection(&self, id: InputId) -> Option<SelectionRange> {
        self.values.get(&id).map(|s| s.selection)
    }

    /// Monotonic revision counter for the input's value.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn value_revision(&self, id: InputId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// The input that currently has focus, if any.
    pub fn focused(&self) -> Option<InputId> {
        self.focused
    }

    pub fn is_focused(&self, id: InputId) -> bool {
        self.focused == Some(id)
    }

    /// Drop focus from `id` if it has it.
    pub fn blur(&mut self, id: InputId) {
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Remove an input, dropping focus if it had it.
    pub fn remove(&mut self, id: InputId) -> Option<String> {
        self.blur(id);
        self.values.remove(&id).map(|s| s.value)
    }

    /// Clear all stored input state.
    ///
    /// Typically called on navigation to reset document state.
    pub fn clear(&mut self) {
        self.values.clear();
        self.focused = None;
    }

    /// Borrow an editable handle to one input.
    pub fn handle(&mut self, id: InputId) -> Result<StoreInput<'_>, StoreError> {
        let state = self
            .values
            .get_mut(&id)
            .ok_or(StoreError::UnknownInput(id))?;
        Ok(StoreInput {
            id,
            state,
            focused: &mut self.focused,
        })
    }

    /// Insert `new_text` at the caret of `id`, replacing any selection, and focus it.
    pub fn insert_at_cursor(
        &mut self,
        id: InputId,
        new_text: &str,
    ) -> Result<Insertion, StoreError> {
        self.insert_at_cursor_with(id, new_text, &InsertOptions::default())
    }

    /// Like [`insert_at_cursor`](Self::insert_at_cursor) with explicit options.
    pub fn insert_at_cursor_with(
        &mut self,
        id: InputId,
        new_text: &str,
        options: &InsertOptions,
    ) -> Result<Insertion, StoreError> {
        let mut input = self.handle(id)?;
        Ok(insert_at_cursor_with(&mut input, new_text, options))
    }
}

/// Mutable view of one input in an [`InputValueStore`].
///
/// Selections written through this handle are clamped into the current value
/// so the stored state never holds an unsliceable range.
#[derive(Debug)]
pub struct StoreInput<'a> {
    id: InputId,
    state: &'a mut InputState,
    focused: &'a mut Option<InputId>,
}

impl StoreInput<'_> {
    pub fn id(&self) -> InputId {
        self.id
    }
}

impl TextInputElement for StoreInput<'_> {
    fn value(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.state.value)
    }

    fn set_value(&mut self, value: String) {
        if self.state.value != value {
            self.state.value = value;
            self.state.value_rev = self.state.value_rev.wrapping_add(1);
        }
        self.state.selection = self.state.selection.clamp_to(&self.state.value);
    }

    fn selection(&self) -> SelectionRange {
        self.state.selection
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        let clamped = selection.clamp_to(&self.state.value);
        if clamped != selection {
            log::warn!(
                target: LOG_TARGET,
                "{}: selection {}..{} clamped to {}..{}",
                self.id,
                selection.start,
                selection.end,
                clamped.start,
                clamped.end
            );
        }
        self.state.selection = clamped;
    }

    fn focus(&mut self) {
        if *self.focused != Some(self.id) {
            log::trace!(target: LOG_TARGET, "focus -> {}", self.id);
        }
        *self.focused = Some(self.id);
    }
}
