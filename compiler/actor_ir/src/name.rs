//! Interned identifier handle.

use std::fmt;

/// An interned identifier: a 4-byte index into a [`StringInterner`].
///
/// Equality is integer equality. Resolve the text with
/// [`StringInterner::lookup`].
///
/// [`StringInterner`]: crate::StringInterner
/// [`StringInterner::lookup`]: crate::StringInterner::lookup
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty identifier. Anonymous lambdas carry this name.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
