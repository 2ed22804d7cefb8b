//! `Number`: either numeric kind, chosen by the shape of the input.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::decimal::Decimal;
use crate::integer::Integer;
use crate::parse::ParseNumberError;
use crate::state::NumberState;

/// A whole or fractional number.
///
/// Arithmetic stays whole when both sides are whole, except `/`, which
/// always produces a `Decimal`. Mixed operands are computed as decimals.
/// Equality is numeric, so `Integer(2) == Decimal(2.0)`.
#[derive(Clone)]
pub enum Number {
    Integer(Integer),
    Decimal(Decimal),
}

impl Number {
    pub fn state(&self) -> NumberState {
        match self {
            Number::Integer(value) => value.state(),
            Number::Decimal(value) => value.state(),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.state().is_defined()
    }

    pub fn to_decimal(&self) -> Decimal {
        match self {
            Number::Integer(value) => value.to_decimal(),
            Number::Decimal(value) => value.clone(),
        }
    }

    /// Truncates fractional values.
    pub fn to_integer(&self) -> Integer {
        match self {
            Number::Integer(value) => value.clone(),
            Number::Decimal(value) => value.to_integer(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(value) => value.to_f64(),
            Number::Decimal(value) => value.to_f64(),
        }
    }

    /// Collapse an integral decimal to `Integer`.
    pub fn simplify(self) -> Number {
        match self {
            Number::Decimal(value) if value.is_integral() => Number::Integer(value.to_integer()),
            other => other,
        }
    }

    fn whole_or_decimal(
        &self,
        rhs: &Number,
        whole: impl FnOnce(&Integer, &Integer) -> Integer,
        decimal: impl FnOnce(&Decimal, &Decimal) -> Decimal,
    ) -> Number {
        match (self, rhs) {
            (Number::Integer(lhs), Number::Integer(rhs)) => Number::Integer(whole(lhs, rhs)),
            _ => Number::Decimal(decimal(&self.to_decimal(), &rhs.to_decimal())),
        }
    }

    pub fn plus(&self, rhs: &Number) -> Number {
        self.whole_or_decimal(rhs, Integer::plus, Decimal::plus)
    }

    pub fn minus(&self, rhs: &Number) -> Number {
        self.whole_or_decimal(rhs, Integer::minus, Decimal::minus)
    }

    pub fn times(&self, rhs: &Number) -> Number {
        self.whole_or_decimal(rhs, Integer::times, Decimal::times)
    }

    pub fn quotient(&self, rhs: &Number) -> Number {
        Number::Decimal(self.to_decimal().quotient(&rhs.to_decimal()))
    }

    pub fn modulo(&self, rhs: &Number) -> Number {
        self.whole_or_decimal(rhs, Integer::modulo, Decimal::modulo)
    }

    pub fn negate(&self) -> Number {
        match self {
            Number::Integer(value) => Number::Integer(value.negate()),
            Number::Decimal(value) => Number::Decimal(value.negate()),
        }
    }

    pub fn abs(&self) -> Number {
        match self {
            Number::Integer(value) => Number::Integer(value.abs()),
            Number::Decimal(value) => Number::Decimal(value.abs()),
        }
    }
}

forward_binops!(Number {
    Add::add => plus,
    Sub::sub => minus,
    Mul::mul => times,
    Div::div => quotient,
    Rem::rem => modulo,
});

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Integer(lhs), Number::Integer(rhs)) => lhs.cmp(rhs),
            _ => self.to_decimal().cmp(&other.to_decimal()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Number::Integer(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(Integer::from(value))
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Whole-number text becomes an `Integer`; anything else numeric a
    /// `Decimal`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.parse::<Integer>() {
            Ok(value) => Ok(Number::Integer(value)),
            Err(ParseNumberError::Empty) => Err(ParseNumberError::Empty),
            Err(_) => text.parse::<Decimal>().map(Number::Decimal),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => fmt::Display::fmt(value, f),
            Number::Decimal(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "Integer({value})"),
            Number::Decimal(value) => write!(f, "Decimal({value})"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(text: &str) -> Number {
        match text.parse() {
            Ok(value) => value,
            Err(err) => panic!("bad test literal {text:?}: {err}"),
        }
    }

    #[test]
    fn parses_integer_first() {
        assert!(matches!(num("42"), Number::Integer(_)));
        assert!(matches!(num("3.00"), Number::Integer(_)));
        assert!(matches!(num("3.5"), Number::Decimal(_)));
        assert!(matches!(num("1e3"), Number::Decimal(_)));
        assert!(matches!(num("NaN"), Number::Integer(_)));
        assert_eq!("x".parse::<Number>(), Err(ParseNumberError::Invalid("x".into())));
    }

    #[test]
    fn whole_arithmetic_stays_whole() {
        assert_eq!(num("2") + num("3"), Number::from(5));
        assert_eq!(num("7") % num("4"), Number::from(3));
        assert!(matches!(num("6") / num("3"), Number::Decimal(_)));
        assert_eq!((num("6") / num("3")).simplify(), Number::from(2));
    }

    #[test]
    fn mixed_arithmetic_is_decimal() {
        assert_eq!(num("2") + num("0.5"), Number::Decimal("2.5".parse().unwrap()));
        assert_eq!(num("1.5") * num("2"), Number::Decimal("3".parse().unwrap()));
    }

    #[test]
    fn compares_across_kinds() {
        assert!(num("2") < num("2.5"));
        assert!(num("3") > num("2.5"));
        assert_eq!(num("2").cmp(&num("2.0")), Ordering::Equal);
        assert_eq!(num("2"), Number::Decimal("2.0".parse().unwrap()));
        assert_ne!(num("NaN"), num("Infinity"));
        assert!(num("Infinity") < num("NaN"));
    }
}
