//! Text selection representation.

use crate::text::clamp_to_char_boundary;

/// A selection inside a text-input element, as a byte range.
///
/// The range is always normalized such that `start <= end`. When
/// `start == end` the selection is collapsed and represents a plain caret.
/// Offsets are UTF-8 byte indices; adapters for hosts that count in other
/// units (e.g. UTF-16 code units in the DOM) convert at their boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection (caret) at `offset`.
    #[inline]
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if `start <= end <= value.len()` and both ends sit on
    /// UTF-8 character boundaries of `value`.
    pub fn fits(&self, value: &str) -> bool {
        self.start <= self.end
            && self.end <= value.len()
            && value.is_char_boundary(self.start)
            && value.is_char_boundary(self.end)
    }

    /// Clamp both ends into `value` and onto character boundaries.
    ///
    /// Out-of-range offsets are pulled back to `value.len()`, offsets inside
    /// a multi-byte character move back to its first byte, and the result is
    /// re-normalized.
    pub fn clamp_to(&self, value: &str) -> Self {
        Self::new(
            clamp_to_char_boundary(value, self.start),
            clamp_to_char_boundary(value, self.end),
        )
    }

    /// Returns the selected substring from the given value.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` are out of bounds or not on character boundaries.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        &value[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn caret_is_collapsed() {
        let caret = SelectionRange::caret(3);
        assert!(caret.is_empty());
        assert_eq!(caret.len(), 0);
        assert_eq!(caret, SelectionRange::new(3, 3));
    }

    #[test]
    fn selection_range_slice() {
        let text = "hello world";
        let range = SelectionRange::new(6, 11);
        assert_eq!(range.len(), 5);
        assert_eq!(range.slice(text), "world");
    }

    #[test]
    fn fits_rejects_out_of_range_and_mid_char() {
        let text = "a€b"; // '€' is 3 bytes
        assert!(SelectionRange::new(0, 5).fits(text));
        assert!(SelectionRange::new(1, 4).fits(text));
        assert!(!SelectionRange::new(0, 6).fits(text));
        assert!(!SelectionRange::new(2, 4).fits(text));
    }

    #[test]
    fn clamp_to_pulls_offsets_onto_boundaries() {
        let text = "a€b";
        assert_eq!(
            SelectionRange::new(2, 100).clamp_to(text),
            SelectionRange::new(1, 5)
        );
        assert_eq!(
            SelectionRange::caret(3).clamp_to(text),
            SelectionRange::caret(1)
        );
    }
}
