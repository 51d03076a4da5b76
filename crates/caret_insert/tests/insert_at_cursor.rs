use caret_insert::{
    InputId, InputValueStore, InsertOptions, MemoryTextInput, SelectionRange, TextInputElement,
    insert_at_cursor, insert_at_cursor_with,
};

/// Every (start, end) pair on char boundaries of `text`.
fn boundary_ranges(text: &str) -> Vec<SelectionRange> {
    let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    bounds.push(text.len());

    let mut out = Vec::new();
    for (i, &start) in bounds.iter().enumerate() {
        for &end in &bounds[i..] {
            out.push(SelectionRange::new(start, end));
        }
    }
    out
}

#[test]
fn splice_law_holds_for_every_selection() {
    let texts = ["", "abc", "hello world", "a€b", "line1\nline2", "😀x😀"];
    let inserts = ["", "X", "there", "\n", "é😀"];

    for text in texts {
        for sel in boundary_ranges(text) {
            for new_text in inserts {
                let mut input = MemoryTextInput::with_selection(text, sel);
                insert_at_cursor(&mut input, new_text);

                let expected = format!("{}{}{}", &text[..sel.start], new_text, &text[sel.end..]);
                assert_eq!(input.value(), expected.as_str(), "{text:?} {sel:?} {new_text:?}");
                assert_eq!(
                    input.selection(),
                    SelectionRange::caret(sel.start + new_text.len()),
                    "{text:?} {sel:?} {new_text:?}"
                );
                assert!(input.is_focused());
            }
        }
    }
}

#[test]
fn repeated_inserts_type_in_sequence() {
    let mut input = MemoryTextInput::new("");
    for piece in ["fn ", "main", "()", " {}"] {
        insert_at_cursor(&mut input, piece);
    }
    assert_eq!(input.text(), "fn main() {}");
    assert_eq!(input.selection(), SelectionRange::caret(12));
}

#[test]
fn refocuses_after_blur() {
    let mut input = MemoryTextInput::new("x");
    insert_at_cursor(&mut input, "y");
    input.blur();
    assert!(!input.is_focused());

    insert_at_cursor(&mut input, "");
    assert!(input.is_focused());
    assert_eq!(input.text(), "xy");
}

#[test]
fn store_backed_form_fields() {
    let mut store = InputValueStore::new();
    let title = InputId::from_raw(1);
    let body = InputId::from_raw(2);
    store.ensure_initial(title, "Draft".to_string());
    store.ensure_initial(body, "First line".to_string());

    store
        .insert_at_cursor_with(title, ": notes\n", &InsertOptions::single_line())
        .unwrap();
    assert_eq!(store.get(title), Some("Draft: notes"));

    {
        let mut field = store.handle(body).unwrap();
        field.set_selection(SelectionRange::new(0, 5));
        insert_at_cursor_with(&mut field, "Next\r\n", &InsertOptions::multi_line());
    }
    assert_eq!(store.get(body), Some("Next\n line"));
    assert_eq!(store.selection(body), Some(SelectionRange::caret(5)));
    assert_eq!(store.focused(), Some(body));
}
