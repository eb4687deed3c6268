//! Value kinds a flag can carry.
//!
//! The parser never interprets values itself; it only asks a [`Value`]
//! whether it consumes a value token and hands it the raw text. Adding a
//! kind means adding a variant here, nothing changes in the dispatcher.

use std::fmt;
use std::time::Duration;

/// A flag's current value, one variant per supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Duration(Duration),
}

impl Value {
    /// Whether this kind consumes a value token. Booleans are the only
    /// kind set by mere presence.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Value::Bool(_))
    }

    /// Parse `raw` and store it. The error string becomes the reason
    /// text inside [`crate::Error::InvalidValue`].
    pub fn set(&mut self, raw: &str) -> Result<(), String> {
        match self {
            Value::Bool(v) => *v = raw.parse::<bool>().map_err(|e| e.to_string())?,
            Value::Int(v) => *v = raw.parse::<i64>().map_err(|e| e.to_string())?,
            Value::Uint(v) => *v = raw.parse::<u64>().map_err(|e| e.to_string())?,
            Value::Float(v) => *v = raw.parse::<f64>().map_err(|e| e.to_string())?,
            Value::Str(v) => *v = raw.to_string(),
            Value::Duration(v) => {
                *v = humantime::parse_duration(raw).map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }

    /// Set a boolean flag from its presence on the command line.
    /// No-op for value-taking kinds; the dispatcher never calls it for
    /// those.
    pub fn set_bool(&mut self, polarity: bool) {
        if let Value::Bool(v) = self {
            *v = polarity;
        }
    }

    /// Type word shown in usage text. Empty for booleans, which are
    /// listed by name alone.
    pub fn type_word(&self) -> &'static str {
        match self {
            Value::Bool(_) => "",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Duration(_) => "duration",
        }
    }

    /// Whether this is the kind's zero value. Zero-valued defaults are
    /// suppressed in usage text.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Bool(v) => !*v,
            Value::Int(v) => *v == 0,
            Value::Uint(v) => *v == 0,
            Value::Float(v) => *v == 0.0,
            Value::Str(v) => v.is_empty(),
            Value::Duration(v) => v.is_zero(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v:?}"),
            Value::Duration(v) => write!(f, "{}", humantime::format_duration(*v)),
        }
    }
}
