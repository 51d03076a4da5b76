//! DOM bindings for `<input>` and `<textarea>`.
//!
//! The DOM reports selections in UTF-16 code units; they are converted to
//! UTF-8 byte offsets against the current value on every read and back on
//! every write. DOM calls that fail (for example `selectionStart` on an input
//! type without a selection API) are logged and skipped.

use crate::element::TextInputElement;
use crate::selection::SelectionRange;
use crate::text::{byte_to_utf16_offset, utf16_to_byte_offset};
use std::borrow::Cow;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

const LOG_TARGET: &str = "caret_insert::web";

fn offset_or_end(value: &str, offset: Option<u32>) -> usize {
    match offset {
        Some(units) => utf16_to_byte_offset(value, units as usize),
        None => value.len(),
    }
}

fn to_dom_offset(value: &str, offset: usize) -> u32 {
    u32::try_from(byte_to_utf16_offset(value, offset)).unwrap_or(u32::MAX)
}

macro_rules! impl_dom_text_input {
    ($ty:ty, $tag:literal) => {
        impl TextInputElement for $ty {
            fn value(&self) -> Cow<'_, str> {
                Cow::Owned(<$ty>::value(self))
            }

            fn set_value(&mut self, value: String) {
                <$ty>::set_value(self, &value);
            }

            fn selection(&self) -> SelectionRange {
                let value = <$ty>::value(self);
                let start = self.selection_start().unwrap_or_else(|err| {
                    log::warn!(target: LOG_TARGET, "<{}> selectionStart failed: {err:?}", $tag);
                    None
                });
                let end = self.selection_end().unwrap_or_else(|err| {
                    log::warn!(target: LOG_TARGET, "<{}> selectionEnd failed: {err:?}", $tag);
                    None
                });
                SelectionRange::new(offset_or_end(&value, start), offset_or_end(&value, end))
            }

            fn set_selection(&mut self, selection: SelectionRange) {
                let value = <$ty>::value(self);
                let start = to_dom_offset(&value, selection.start);
                let end = to_dom_offset(&value, selection.end);
                if let Err(err) = self.set_selection_range(start, end) {
                    log::warn!(target: LOG_TARGET, "<{}> setSelectionRange failed: {err:?}", $tag);
                }
            }

            fn focus(&mut self) {
                if let Err(err) = web_sys::HtmlElement::focus(self) {
                    log::warn!(target: LOG_TARGET, "<{}> focus failed: {err:?}", $tag);
                }
            }
        }
    };
}

impl_dom_text_input!(HtmlInputElement, "input");
impl_dom_text_input!(HtmlTextAreaElement, "textarea");
