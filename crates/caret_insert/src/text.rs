//! Text utilities for splicing into input values.
//!
//! Offsets handed around by this crate are UTF-8 byte indices. These helpers
//! keep them on character boundaries and translate to and from the UTF-16
//! code-unit offsets used by DOM selection APIs.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use caret_insert::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0);
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Convert a UTF-16 code-unit offset into a UTF-8 byte offset.
///
/// An offset that lands between the two halves of a surrogate pair resolves
/// to the start of that character. Offsets past the end resolve to `s.len()`.
///
/// # Examples
///
/// ```
/// use caret_insert::utf16_to_byte_offset;
///
/// let s = "a😀b"; // '😀' is 2 UTF-16 units, 4 UTF-8 bytes
/// assert_eq!(utf16_to_byte_offset(s, 1), 1);
/// assert_eq!(utf16_to_byte_offset(s, 3), 5);
/// assert_eq!(utf16_to_byte_offset(s, 4), 6);
/// ```
pub fn utf16_to_byte_offset(s: &str, offset: usize) -> usize {
    let mut units = 0usize;
    for (idx, ch) in s.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset {
            return idx;
        }
        units = next;
    }
    s.len()
}

/// Convert a UTF-8 byte offset into a UTF-16 code-unit offset.
///
/// The byte offset is first clamped with [`clamp_to_char_boundary`].
///
/// # Examples
///
/// ```
/// use caret_insert::byte_to_utf16_offset;
///
/// let s = "a😀b";
/// assert_eq!(byte_to_utf16_offset(s, 1), 1);
/// assert_eq!(byte_to_utf16_offset(s, 5), 3);
/// assert_eq!(byte_to_utf16_offset(s, 6), 4);
/// ```
pub fn byte_to_utf16_offset(s: &str, offset: usize) -> usize {
    let offset = clamp_to_char_boundary(s, offset);
    s[..offset].encode_utf16().count()
}

/// Filter a string to remove newlines (CR and LF), for single-line inputs.
///
/// Returns a `Cow::Borrowed` if the string contains no newlines (fast path),
/// or a `Cow::Owned` with newlines removed.
///
/// # Examples
///
/// ```
/// use caret_insert::filter_single_line;
///
/// assert_eq!(filter_single_line("hello"), "hello");
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

/// Normalize newlines in a string (CRLF/CR → LF).
///
/// Returns a `Cow::Borrowed` if no normalization is needed (fast path),
/// or a `Cow::Owned` with all line endings as LF.
///
/// # Examples
///
/// ```
/// use caret_insert::normalize_newlines;
///
/// assert_eq!(normalize_newlines("hello\nworld"), "hello\nworld");
/// assert_eq!(normalize_newlines("hello\r\nworld"), "hello\nworld");
/// assert_eq!(normalize_newlines("hello\rworld"), "hello\nworld");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_boundary_basic() {
        let s = "a€b";
        assert_eq!(clamp_to_char_boundary(s, 1), 1);
        assert_eq!(clamp_to_char_boundary(s, 3), 1);
        assert_eq!(clamp_to_char_boundary(s, 5), 5);
        assert_eq!(clamp_to_char_boundary("", 7), 0);
    }

    #[test]
    fn utf16_offsets_map_onto_char_starts() {
        let s = "x😀é";
        // x = 1 unit / 1 byte, 😀 = 2 units / 4 bytes, é = 1 unit / 2 bytes
        assert_eq!(utf16_to_byte_offset(s, 0), 0);
        assert_eq!(utf16_to_byte_offset(s, 1), 1);
        assert_eq!(utf16_to_byte_offset(s, 2), 1); // inside the surrogate pair
        assert_eq!(utf16_to_byte_offset(s, 3), 5);
        assert_eq!(utf16_to_byte_offset(s, 4), 7);
        assert_eq!(utf16_to_byte_offset(s, 99), 7);
    }

    #[test]
    fn utf16_and_byte_offsets_agree_on_every_boundary() {
        let s = "a€😀\nb";
        let mut units = 0;
        for (idx, ch) in s.char_indices() {
            assert_eq!(byte_to_utf16_offset(s, idx), units);
            assert_eq!(utf16_to_byte_offset(s, units), idx);
            units += ch.len_utf16();
        }
        assert_eq!(byte_to_utf16_offset(s, s.len()), units);
        assert_eq!(utf16_to_byte_offset(s, units), s.len());
    }

    #[test]
    fn filter_single_line_basic() {
        assert_eq!(filter_single_line("hello\nworld"), "helloworld");
        assert_eq!(filter_single_line("\n\r"), "");
        assert!(matches!(filter_single_line("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn normalize_newlines_basic() {
        assert_eq!(normalize_newlines("hello"), "hello");
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }
}
