//! Identifier for inputs held in an [`InputValueStore`](crate::InputValueStore).
//!
//! This is a plain `u64` so that integration layers can map their own element
//! ids (DOM node ids, widget ids) onto it without this crate knowing about them.

use std::fmt;

/// Opaque key of an input within an [`InputValueStore`](crate::InputValueStore).
///
/// The value has no meaning inside this crate; it is only compared and hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for InputId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.as_raw()
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_id_from_u32() {
        let id = InputId::from(123u32);
        assert_eq!(id.as_raw(), 123u64);
        assert_eq!(u64::from(id), 123);
    }

    #[test]
    fn input_id_display() {
        assert_eq!(InputId::from_raw(7).to_string(), "input#7");
    }
}
