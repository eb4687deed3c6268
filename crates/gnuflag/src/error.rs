use thiserror::Error;

/// Errors reported during flag registration and argument parsing.
///
/// Parse-phase errors (`UnknownFlag`, `MissingArgument`, `InvalidValue`)
/// are all terminal for the current [`crate::FlagSet::parse`] call:
/// parsing stops at the first one, and values applied before the failing
/// token remain applied. The remaining variants are registration-phase
/// errors raised while a flag set is still being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A spelling appeared on the command line that no flag claims.
    #[error("flag provided but not defined: {0}")]
    UnknownFlag(String),

    /// A value-taking flag reached the end of input without a value.
    /// Carries the spelling exactly as it was invoked (`-s` vs `--sierra`).
    #[error("missing argument for {0}")]
    MissingArgument(String),

    /// The flag was recognized but its value kind rejected the raw text.
    #[error("invalid value {value:?} for flag {flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    /// Registration tried to bind a spelling that is already bound.
    #[error("flag spelling already defined: {0}")]
    DuplicateSpelling(String),

    /// Alias registration where neither operand names a defined flag.
    #[error("cannot alias undefined flag: {0}")]
    NoSuchFlag(String),
}
