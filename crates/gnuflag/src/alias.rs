//! Spelling-to-flag resolution.
//!
//! Every recognized option spelling maps to an index into the flag
//! arena owned by [`crate::FlagSet`]. The table is populated while
//! flags are defined and aliased, then consulted read-only by the
//! parser. Keeping indices instead of references avoids any shared
//! ownership of flag definitions.

use indexmap::IndexMap;

use crate::error::Error;

/// Bidirectional spelling table: short spellings (single characters,
/// usable bundled after `-`) and long spellings (usable after `--`).
///
/// A single-character spelling is always bound under both kinds, so
/// `-i` and `--i` reach the same flag.
#[derive(Debug, Default)]
pub(crate) struct AliasTable {
    shorts: IndexMap<char, usize>,
    longs: IndexMap<String, usize>,
}

impl AliasTable {
    /// Bind `spelling` to the flag at `index`. Multi-character
    /// spellings bind as long options only; single characters bind as
    /// both short and long. Re-binding an existing spelling is an
    /// error, even to the same flag.
    pub(crate) fn bind(&mut self, spelling: &str, index: usize) -> Result<(), Error> {
        let short = single_char(spelling);
        if self.longs.contains_key(spelling) || short.is_some_and(|c| self.shorts.contains_key(&c))
        {
            return Err(Error::DuplicateSpelling(spelling.to_string()));
        }
        self.longs.insert(spelling.to_string(), index);
        if let Some(c) = short {
            self.shorts.insert(c, index);
        }
        Ok(())
    }

    /// Resolve a bundled short option character.
    pub(crate) fn resolve_short(&self, c: char) -> Option<usize> {
        self.shorts.get(&c).copied()
    }

    /// Resolve a `--name` spelling (also covers single-character
    /// spellings, which are always long-bound too).
    pub(crate) fn resolve_long(&self, spelling: &str) -> Option<usize> {
        self.longs.get(spelling).copied()
    }
}

fn single_char(spelling: &str) -> Option<char> {
    let mut chars = spelling.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::AliasTable;
    use crate::error::Error;

    #[test]
    fn single_char_binds_both_kinds() {
        let mut t = AliasTable::default();
        t.bind("i", 0).unwrap();
        assert_eq!(t.resolve_short('i'), Some(0));
        assert_eq!(t.resolve_long("i"), Some(0));
    }

    #[test]
    fn multi_char_binds_long_only() {
        let mut t = AliasTable::default();
        t.bind("india", 3).unwrap();
        assert_eq!(t.resolve_long("india"), Some(3));
        assert_eq!(t.resolve_short('i'), None);
    }

    #[test]
    fn rebinding_is_rejected() {
        let mut t = AliasTable::default();
        t.bind("s", 0).unwrap();
        assert_eq!(
            t.bind("s", 1),
            Err(Error::DuplicateSpelling("s".to_string()))
        );
        // same index is still a duplicate registration
        assert_eq!(
            t.bind("s", 0),
            Err(Error::DuplicateSpelling("s".to_string()))
        );
        // the original binding survives the failed attempts
        assert_eq!(t.resolve_long("s"), Some(0));
    }

    #[test]
    fn unknown_spellings_miss() {
        let t = AliasTable::default();
        assert_eq!(t.resolve_short('x'), None);
        assert_eq!(t.resolve_long("missing"), None);
    }
}
