//! String interner for identifiers.
//!
//! Interned text is leaked to `'static` so lookups can hand out plain `&str`
//! without holding the lock.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;

use crate::Name;

struct Table {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Maps identifier text to [`Name`]s and back.
///
/// Index 0 is always the empty string ([`Name::EMPTY`]).
pub struct StringInterner {
    table: RwLock<Table>,
}

impl StringInterner {
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);
        StringInterner {
            table: RwLock::new(Table {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern `text`, returning the existing name when already present.
    ///
    /// # Panics
    /// Panics after `u32::MAX` distinct strings.
    pub fn intern(&self, text: &str) -> Name {
        if let Some(&name) = self.table.read().map.get(text) {
            return name;
        }
        let mut table = self.table.write();
        if let Some(&name) = table.map.get(text) {
            return name;
        }
        let raw = u32::try_from(table.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded {} entries", u32::MAX));
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        table.strings.push(leaked);
        table.map.insert(leaked, name);
        name
    }

    /// Text of an interned name. Unknown names resolve to `""`.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// The name of `text` if it was interned before.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.table.read().map.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::StringInterner;
    use crate::Name;
    use pretty_assertions::assert_eq;

    #[test]
    fn interning_is_idempotent() {
        let interner = StringInterner::new();
        let a = interner.intern("width");
        let b = interner.intern("width");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "width");
    }

    #[test]
    fn empty_string_is_preinterned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn distinct_text_gets_distinct_names() {
        let interner = StringInterner::new();
        assert_ne!(interner.intern("x"), interner.intern("y"));
        assert_eq!(interner.get("z"), None);
    }
}
