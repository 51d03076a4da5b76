#![no_main]

use caret_insert::{MemoryTextInput, SelectionRange, TextInputElement, insert_at_cursor};
use libfuzzer_sys::fuzz_target;

// Input layout: [start: u16][end: u16][text bytes...]; the text is split at
// its first NUL into the element value and the inserted text.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let start = u16::from_le_bytes([data[0], data[1]]) as usize;
    let end = u16::from_le_bytes([data[2], data[3]]) as usize;
    let Ok(rest) = std::str::from_utf8(&data[4..]) else {
        return;
    };
    let (value, new_text) = rest.split_once('\0').unwrap_or((rest, ""));

    let mut input = MemoryTextInput::with_selection(value, SelectionRange { start, end });
    insert_at_cursor(&mut input, new_text);

    let caret = input.selection();
    assert!(caret.is_empty());
    assert!(input.text().is_char_boundary(caret.start));
    assert!(input.text()[..caret.start].ends_with(new_text));
    assert!(input.is_focused());
});
