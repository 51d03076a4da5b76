//! # caret_insert
//!
//! Insert text at the caret of a text-input element, replacing any selection.
//!
//! The crate is built around one operation, [`insert_at_cursor`]. It splices
//! the new text over the element's current selection, collapses the caret to
//! just past the inserted text, and focuses the element. The element is
//! anything implementing [`TextInputElement`]:
//! - [`MemoryTextInput`]: a standalone in-memory control
//! - [`StoreInput`]: a handle into an [`InputValueStore`] of many keyed inputs
//! - `web_sys::HtmlInputElement` / `HtmlTextAreaElement` (with the `web` feature)
//!
//! ## Offsets
//!
//! Selection offsets are UTF-8 byte indices. Selections that run past the end
//! or split a character are clamped before splicing, never panicked on.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade under the `caret_insert` target and
//! are silent unless the host installs a logger.
//!
//! ```
//! use caret_insert::{MemoryTextInput, SelectionRange, TextInputElement, insert_at_cursor};
//!
//! let mut input = MemoryTextInput::with_selection("let x = ;", SelectionRange::caret(8));
//! insert_at_cursor(&mut input, "42");
//! assert_eq!(input.value(), "let x = 42;");
//! assert_eq!(input.selection(), SelectionRange::caret(10));
//! ```

mod element;
mod id;
mod insert;
mod memory;
mod options;
mod selection;
mod state;
mod store;
mod text;
#[cfg(feature = "web")]
mod web;

pub use element::TextInputElement;
pub use id::InputId;
pub use insert::{Insertion, Splice, insert_at_cursor, insert_at_cursor_with, splice};
pub use memory::MemoryTextInput;
pub use options::{InsertOptions, NewlineMode};
pub use selection::SelectionRange;
pub use store::{InputValueStore, StoreError, StoreInput};

pub use text::{
    byte_to_utf16_offset, clamp_to_char_boundary, filter_single_line, normalize_newlines,
    utf16_to_byte_offset,
};
