//! Integer, Decimal and Number targets.

use wick_numeric::{Decimal, Integer, Number};

use super::date::{from_unix_decimal, unix_seconds};
use super::Coerce;
use crate::config::Resolver;
use crate::value::{Value, ValueKind};

impl Coerce for Integer {
    const TARGET: ValueKind = ValueKind::Integer;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(n.clone()),
            _ => None,
        }
    }

    fn empty_default() -> Option<Self> {
        Some(Integer::zero())
    }

    /// Decimals truncate toward zero; dates become Unix seconds.
    fn structural(value: &Value, _resolver: &dyn Resolver) -> Option<Self> {
        match value {
            Value::Decimal(n) => Some(n.to_integer()),
            Value::Date(date) => Some(Integer::from(unix_seconds(date).0)),
            _ => None,
        }
    }

    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        text.parse().ok()
    }
}

impl Coerce for Decimal {
    const TARGET: ValueKind = ValueKind::Decimal;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::Decimal(n) => Some(n.clone()),
            _ => None,
        }
    }

    fn empty_default() -> Option<Self> {
        Some(Decimal::zero())
    }

    fn structural(value: &Value, _resolver: &dyn Resolver) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(n.to_decimal()),
            Value::Date(date) => Some(from_unix_decimal(date)),
            _ => None,
        }
    }

    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        text.parse().ok()
    }
}

impl Coerce for Number {
    const TARGET: ValueKind = ValueKind::Number;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(Number::Integer(n.clone())),
            Value::Decimal(n) => Some(Number::Decimal(n.clone())),
            _ => None,
        }
    }

    fn empty_default() -> Option<Self> {
        Some(Number::Integer(Integer::zero()))
    }

    /// Dates become Unix seconds, whole when there is no sub-second part.
    fn structural(value: &Value, _resolver: &dyn Resolver) -> Option<Self> {
        match value {
            Value::Date(date) => Some(Number::Decimal(from_unix_decimal(date)).simplify()),
            _ => None,
        }
    }

    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        text.parse().ok()
    }
}
