//! GNU getopt-style command-line flag parsing.
//!
//! Extends plain long-option parsing with POSIX/GNU semantics:
//!
//! - bundled single-character short options (`-abc`)
//! - inline or following-token values (`-sfoo`, `-s foo`, `--long=v`)
//! - the `--` end-of-options terminator
//! - aliases binding any number of short and long spellings to one
//!   underlying flag
//!
//! The parser receives an already-tokenized argument sequence; it does
//! no shell-style word splitting, subcommand routing or cross-flag
//! validation. Parsing is fail-fast: the first malformed token aborts
//! the call and is returned as the error.
//!
//! ```
//! use gnuflag::FlagSet;
//!
//! let mut flags = FlagSet::new("demo");
//! flags.bool("v", false, "verbose output")?;
//! flags.alias("v", "verbose")?;
//! flags.string("o", "", "output file")?;
//!
//! flags.parse(["-v", "-oout.txt", "input.txt"])?;
//! assert_eq!(flags.get_bool("verbose"), Some(true));
//! assert_eq!(flags.get_str("o"), Some("out.txt"));
//! assert_eq!(flags.args(), ["input.txt"]);
//! # Ok::<(), gnuflag::Error>(())
//! ```

mod alias;
mod error;
mod parse;
mod usage;
mod value;

pub use error::Error;
pub use value::Value;

use std::fmt;
use std::time::Duration;

use crate::alias::AliasTable;

/// One canonical flag definition in the arena.
///
/// `shorts` and `longs` keep the display spellings in registration
/// order for usage rendering; resolution goes through the alias table.
#[derive(Debug)]
pub(crate) struct Flag {
    pub(crate) name: String,
    pub(crate) usage: String,
    pub(crate) value: Value,
    pub(crate) default: Value,
    pub(crate) shorts: Vec<char>,
    pub(crate) longs: Vec<String>,
}

impl Flag {
    fn record_spelling(&mut self, spelling: &str) {
        let mut chars = spelling.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.shorts.push(c),
            _ => self.longs.push(spelling.to_string()),
        }
    }
}

/// A set of defined flags plus the parse results.
///
/// Lifecycle follows two single-threaded phases: a setup phase where
/// flags and aliases are registered, then a parse phase consuming one
/// argument sequence. Independent parses should use independent sets.
#[derive(Debug, Default)]
pub struct FlagSet {
    name: String,
    flags: Vec<Flag>,
    aliases: AliasTable,
    args: Vec<String>,
}

impl FlagSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The name this set was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define a boolean flag, set by presence alone.
    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> Result<(), Error> {
        self.define(name, Value::Bool(default), usage)
    }

    /// Define a signed integer flag.
    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> Result<(), Error> {
        self.define(name, Value::Int(default), usage)
    }

    /// Define an unsigned integer flag.
    pub fn uint(&mut self, name: &str, default: u64, usage: &str) -> Result<(), Error> {
        self.define(name, Value::Uint(default), usage)
    }

    /// Define a floating-point flag.
    pub fn float(&mut self, name: &str, default: f64, usage: &str) -> Result<(), Error> {
        self.define(name, Value::Float(default), usage)
    }

    /// Define a string flag.
    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> Result<(), Error> {
        self.define(name, Value::Str(default.to_string()), usage)
    }

    /// Define a duration flag, parsed with `humantime` syntax
    /// (`30s`, `1h30m`, ...).
    pub fn duration(&mut self, name: &str, default: Duration, usage: &str) -> Result<(), Error> {
        self.define(name, Value::Duration(default), usage)
    }

    fn define(&mut self, name: &str, value: Value, usage: &str) -> Result<(), Error> {
        let index = self.flags.len();
        let mut flag = Flag {
            name: name.to_string(),
            usage: usage.to_string(),
            default: value.clone(),
            value,
            shorts: Vec::new(),
            longs: Vec::new(),
        };
        flag.record_spelling(name);
        self.aliases.bind(name, index)?;
        self.flags.push(flag);
        Ok(())
    }

    /// Bind two spellings to one flag. Exactly one operand must already
    /// name a defined flag; the other becomes a new spelling for it.
    /// Single-character spellings are usable both bundled (`-s`) and as
    /// long options (`--s`).
    pub fn alias(&mut self, a: &str, b: &str) -> Result<(), Error> {
        match (self.lookup(a), self.lookup(b)) {
            (Some(_), Some(_)) => Err(Error::DuplicateSpelling(b.to_string())),
            (Some(index), None) => {
                self.aliases.bind(b, index)?;
                self.flags[index].record_spelling(b);
                Ok(())
            }
            (None, Some(index)) => {
                self.aliases.bind(a, index)?;
                self.flags[index].record_spelling(a);
                Ok(())
            }
            (None, None) => Err(Error::NoSuchFlag(a.to_string())),
        }
    }

    /// Register several aliases at once; `pairs` holds (a, b) pairs as
    /// a flat list.
    pub fn aliases(&mut self, pairs: &[&str]) -> Result<(), Error> {
        assert!(pairs.len() % 2 == 0, "aliases takes spelling pairs");
        for pair in pairs.chunks(2) {
            self.alias(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Parse an argument sequence (excluding the program name). On
    /// success the recognized flags have been set and [`Self::args`]
    /// holds the positional arguments in order. On error, values set
    /// before the failing token remain set.
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = parse::run(&mut self.flags, &self.aliases, args)?;
        Ok(())
    }

    /// Positional arguments collected by the last successful parse.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Current value of the flag reached by `spelling` (any registered
    /// spelling, canonical or alias).
    pub fn value(&self, spelling: &str) -> Option<&Value> {
        self.lookup(spelling).map(|index| &self.flags[index].value)
    }

    pub fn get_bool(&self, spelling: &str) -> Option<bool> {
        match self.value(spelling)? {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, spelling: &str) -> Option<i64> {
        match self.value(spelling)? {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_uint(&self, spelling: &str) -> Option<u64> {
        match self.value(spelling)? {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_float(&self, spelling: &str) -> Option<f64> {
        match self.value(spelling)? {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_str(&self, spelling: &str) -> Option<&str> {
        match self.value(spelling)? {
            Value::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn get_duration(&self, spelling: &str) -> Option<Duration> {
        match self.value(spelling)? {
            Value::Duration(v) => Some(*v),
            _ => None,
        }
    }

    /// Render the defaults/usage text: one line group per flag, every
    /// spelling listed, ordered by canonical name.
    pub fn defaults(&self) -> String {
        usage::render(&self.flags)
    }

    /// Write the defaults/usage text to a formatter sink.
    pub fn write_defaults(&self, out: &mut impl fmt::Write) -> fmt::Result {
        out.write_str(&self.defaults())
    }

    fn lookup(&self, spelling: &str) -> Option<usize> {
        // Single-character spellings are long-bound too, so the long
        // table covers every registered spelling.
        self.aliases.resolve_long(spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, FlagSet};
    use std::time::Duration;

    #[test]
    fn duplicate_definition_is_rejected() {
        let mut f = FlagSet::new("x");
        f.bool("v", false, "verbose").unwrap();
        assert_eq!(
            f.int("v", 0, "version"),
            Err(Error::DuplicateSpelling("v".to_string()))
        );
        // the original definition is untouched
        assert_eq!(f.get_bool("v"), Some(false));
    }

    #[test]
    fn alias_requires_exactly_one_defined_operand() {
        let mut f = FlagSet::new("x");
        f.string("sierra", "", "string").unwrap();
        f.bool("a", false, "a").unwrap();

        assert_eq!(
            f.alias("x", "y"),
            Err(Error::NoSuchFlag("x".to_string()))
        );
        assert_eq!(
            f.alias("a", "sierra"),
            Err(Error::DuplicateSpelling("sierra".to_string()))
        );

        // order of operands does not matter
        f.alias("s", "sierra").unwrap();
        f.alias("a", "alpha").unwrap();
        assert_eq!(f.value("s"), f.value("sierra"));
        assert_eq!(f.value("alpha"), f.value("a"));
    }

    #[test]
    fn alias_spelling_collision_is_rejected() {
        let mut f = FlagSet::new("x");
        f.bool("a", false, "a").unwrap();
        f.bool("b", false, "b").unwrap();
        // `b` is already a flag of its own
        assert_eq!(
            f.alias("a", "b"),
            Err(Error::DuplicateSpelling("b".to_string()))
        );
    }

    #[test]
    fn getters_resolve_any_spelling() {
        let mut f = FlagSet::new("x");
        f.duration("timeout", Duration::ZERO, "give up").unwrap();
        f.alias("t", "timeout").unwrap();
        f.parse(["-t", "90s"]).unwrap();
        assert_eq!(f.get_duration("timeout"), Some(Duration::from_secs(90)));
        assert_eq!(f.get_duration("t"), Some(Duration::from_secs(90)));
        // wrong-kind getter misses rather than panicking
        assert_eq!(f.get_int("timeout"), None);
        assert_eq!(f.get_bool("missing"), None);
    }

    #[test]
    fn uint_and_float_kinds_parse() {
        let mut f = FlagSet::new("x");
        f.uint("jobs", 1, "parallel jobs").unwrap();
        f.float("ratio", 0.0, "mix ratio").unwrap();
        f.parse(["--jobs=8", "--ratio", "0.75"]).unwrap();
        assert_eq!(f.get_uint("jobs"), Some(8));
        assert_eq!(f.get_float("ratio"), Some(0.75));
    }

    #[test]
    fn second_terminator_is_positional() {
        let mut f = FlagSet::new("x");
        f.bool("a", false, "a").unwrap();
        f.parse(["--", "a", "--", "b"]).unwrap();
        assert_eq!(f.args(), ["a", "--", "b"]);
        assert_eq!(f.get_bool("a"), Some(false));
    }
}
