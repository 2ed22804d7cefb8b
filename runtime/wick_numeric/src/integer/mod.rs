//! Arbitrary-precision whole numbers with NaN and signed Infinity states.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::decimal::Decimal;
use crate::parse::{lex, Lexeme, ParseNumberError};
use crate::state::{undefined_outcome, undefined_pow, NumberState, Op, Operand, Outcome};

/// An immutable arbitrary-precision integer.
///
/// When `undefined` is set, `magnitude` is a sentinel (see
/// [`NumberState`]): 0 for NaN, 1 for +Infinity, -1 for -Infinity. Every
/// operation returns a new value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    magnitude: BigInt,
    undefined: bool,
}

impl Integer {
    pub fn new(magnitude: impl Into<BigInt>) -> Self {
        Integer {
            magnitude: magnitude.into(),
            undefined: false,
        }
    }

    pub fn zero() -> Self {
        Integer::new(BigInt::zero())
    }

    pub fn one() -> Self {
        Integer::new(BigInt::one())
    }

    pub fn nan() -> Self {
        Integer::undefined(NumberState::NaN)
    }

    pub fn infinity() -> Self {
        Integer::undefined(NumberState::PositiveInfinity)
    }

    pub fn neg_infinity() -> Self {
        Integer::undefined(NumberState::NegativeInfinity)
    }

    /// Build a number in the given state. `Defined` yields zero.
    pub fn undefined(state: NumberState) -> Self {
        if state.is_defined() {
            return Integer::zero();
        }
        Integer {
            magnitude: state.sentinel(),
            undefined: true,
        }
    }

    /// Convert a native float. NaN and infinities map to the matching
    /// undefined state; finite values are truncated toward zero.
    pub fn from_f64(value: f64) -> Self {
        match NumberState::of_float(value) {
            NumberState::Defined => {
                BigInt::from_f64(value.trunc()).map_or_else(Integer::nan, Integer::new)
            }
            state => Integer::undefined(state),
        }
    }

    pub fn state(&self) -> NumberState {
        if self.undefined {
            NumberState::from_sentinel(&self.magnitude)
        } else {
            NumberState::Defined
        }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.undefined
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.state() == NumberState::NaN
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.state().is_infinite()
    }

    /// `true` for a defined zero.
    pub fn is_zero(&self) -> bool {
        !self.undefined && self.magnitude.is_zero()
    }

    /// The stored magnitude. For undefined numbers this is the sentinel.
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    pub fn to_f64(&self) -> f64 {
        match self.state() {
            NumberState::Defined => self.magnitude.to_f64().unwrap_or(f64::NAN),
            NumberState::NaN => f64::NAN,
            NumberState::PositiveInfinity => f64::INFINITY,
            NumberState::NegativeInfinity => f64::NEG_INFINITY,
        }
    }

    /// The value as an `i64`, if defined and in range.
    pub fn to_i64(&self) -> Option<i64> {
        if self.undefined {
            return None;
        }
        self.magnitude.to_i64()
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self)
    }

    fn operand(&self) -> Operand {
        let sign = if self.magnitude.is_negative() {
            -1
        } else {
            i8::from(!self.magnitude.is_zero())
        };
        (self.state(), sign)
    }

    fn resolve(&self, outcome: Outcome) -> Integer {
        match outcome {
            Outcome::Undefined(state) => Integer::undefined(state),
            Outcome::Zero => Integer::zero(),
            Outcome::Left => self.clone(),
        }
    }

    fn any_undefined(&self, rhs: &Integer) -> bool {
        self.undefined || rhs.undefined
    }

    // Arithmetic

    pub fn plus(&self, rhs: &Integer) -> Integer {
        if self.any_undefined(rhs) {
            return self.resolve(undefined_outcome(Op::Add, self.operand(), rhs.operand()));
        }
        Integer::new(&self.magnitude + &rhs.magnitude)
    }

    pub fn minus(&self, rhs: &Integer) -> Integer {
        if self.any_undefined(rhs) {
            return self.resolve(undefined_outcome(Op::Sub, self.operand(), rhs.operand()));
        }
        Integer::new(&self.magnitude - &rhs.magnitude)
    }

    pub fn times(&self, rhs: &Integer) -> Integer {
        if self.any_undefined(rhs) {
            return self.resolve(undefined_outcome(Op::Mul, self.operand(), rhs.operand()));
        }
        Integer::new(&self.magnitude * &rhs.magnitude)
    }

    /// Truncating division. Division by zero yields NaN (for `0 / 0`) or a
    /// signed Infinity.
    pub fn quotient(&self, rhs: &Integer) -> Integer {
        if self.any_undefined(rhs) || rhs.is_zero() {
            return self.resolve(undefined_outcome(Op::Div, self.operand(), rhs.operand()));
        }
        Integer::new(&self.magnitude / &rhs.magnitude)
    }

    /// Remainder with the sign of the dividend. `x % 0` is NaN.
    pub fn modulo(&self, rhs: &Integer) -> Integer {
        if self.any_undefined(rhs) || rhs.is_zero() {
            return self.resolve(undefined_outcome(Op::Rem, self.operand(), rhs.operand()));
        }
        Integer::new(&self.magnitude % &rhs.magnitude)
    }

    pub fn pow(&self, exponent: u32) -> Integer {
        if exponent == 0 {
            return Integer::one();
        }
        if self.undefined {
            return Integer::undefined(undefined_pow(self.state(), exponent));
        }
        Integer::new(num_traits::pow(self.magnitude.clone(), exponent as usize))
    }

    // Sign operations

    /// `abs(NaN) = NaN`, `abs(±Infinity) = +Infinity`.
    pub fn abs(&self) -> Integer {
        match self.state() {
            NumberState::Defined => Integer::new(self.magnitude.abs()),
            NumberState::NaN => Integer::nan(),
            NumberState::PositiveInfinity | NumberState::NegativeInfinity => Integer::infinity(),
        }
    }

    /// `negate(NaN) = NaN`; infinities swap sign.
    pub fn negate(&self) -> Integer {
        Integer {
            magnitude: -&self.magnitude,
            undefined: self.undefined,
        }
    }

    /// -1, 0 or 1; ±1 for the infinities and NaN for NaN.
    pub fn signum(&self) -> Integer {
        match self.state() {
            NumberState::NaN => Integer::nan(),
            _ => Integer::new(self.magnitude.signum()),
        }
    }

    // Rounding. Whole numbers are already rounded, so every mode returns the
    // input unchanged; `frac` is zero for defined values and NaN otherwise.

    pub fn ceil(&self) -> Integer {
        self.clone()
    }

    pub fn floor(&self) -> Integer {
        self.clone()
    }

    pub fn round_half_up(&self) -> Integer {
        self.clone()
    }

    pub fn round_half_even(&self) -> Integer {
        self.clone()
    }

    pub fn truncate(&self) -> Integer {
        self.clone()
    }

    pub fn away_from_zero(&self) -> Integer {
        self.clone()
    }

    pub fn frac(&self) -> Integer {
        if self.undefined {
            Integer::nan()
        } else {
            Integer::zero()
        }
    }
}

forward_binops!(Integer {
    Add::add => plus,
    Sub::sub => minus,
    Mul::mul => times,
    Div::div => quotient,
    Rem::rem => modulo,
});

impl Default for Integer {
    fn default() -> Self {
        Integer::zero()
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = (self.state(), other.state());
        lhs.rank()
            .cmp(&rhs.rank())
            .then_with(|| self.magnitude.cmp(&other.magnitude))
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer::new(value)
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Integer::new(value)
    }
}

impl FromStr for Integer {
    type Err = ParseNumberError;

    /// Whole-number text: optional sign, digits, optionally followed by an
    /// all-zero fraction (`"3.00"`), or one of the undefined tokens.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match lex(text)? {
            Lexeme::Undefined(state) => Ok(Integer::undefined(state)),
            Lexeme::Finite {
                negative,
                int_digits,
                frac_digits,
                exponent,
            } => {
                if exponent != 0 || int_digits.is_empty() || frac_digits.bytes().any(|b| b != b'0')
                {
                    return Err(ParseNumberError::NotWhole(text.trim().to_string()));
                }
                let magnitude = int_digits
                    .parse::<BigInt>()
                    .map_err(|_| ParseNumberError::Invalid(text.trim().to_string()))?;
                Ok(Integer::new(if negative { -magnitude } else { magnitude }))
            }
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state().token() {
            Some(token) => f.write_str(token),
            None => write!(f, "{}", self.magnitude),
        }
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests;
