//! Value kind tags.

use std::fmt;
use std::str::FromStr;

use crate::error::{unknown_kind, ValueError};

/// Tag naming a value kind, used for declarations and coercion targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Empty,
    Text,
    Integer,
    Decimal,
    /// Coercion target only: Integer or Decimal, whichever the value
    /// parses as. No value reports this kind.
    Number,
    Boolean,
    Binary,
    Dictionary,
    List,
    Date,
    Container,
}

impl ValueKind {
    pub const ALL: [ValueKind; 11] = [
        ValueKind::Empty,
        ValueKind::Text,
        ValueKind::Integer,
        ValueKind::Decimal,
        ValueKind::Number,
        ValueKind::Boolean,
        ValueKind::Binary,
        ValueKind::Dictionary,
        ValueKind::List,
        ValueKind::Date,
        ValueKind::Container,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Empty => "empty",
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Decimal => "decimal",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Binary => "binary",
            ValueKind::Dictionary => "dictionary",
            ValueKind::List => "list",
            ValueKind::Date => "date",
            ValueKind::Container => "container",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = ValueError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lower = name.trim().to_ascii_lowercase();
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .or(match lower.as_str() {
                "string" => Some(ValueKind::Text),
                "bool" => Some(ValueKind::Boolean),
                "data" => Some(ValueKind::Binary),
                _ => None,
            })
            .ok_or_else(|| unknown_kind(name))
    }
}
