//! Arbitrary-precision fractional numbers with NaN and signed Infinity
//! states.
//!
//! A defined `Decimal` is `unscaled / 10^scale`. Values are normalized on
//! construction (no trailing fractional zeros), so structural equality is
//! numeric equality: `1.50 == 1.5`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::integer::Integer;
use crate::parse::{lex, Lexeme, ParseNumberError};
use crate::rounding::{divide_rounded, pow10, RoundingMode};
use crate::state::{undefined_outcome, undefined_pow, NumberState, Op, Operand, Outcome};

/// An immutable arbitrary-precision decimal number.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    /// Digits without the decimal point, or the undefined sentinel.
    unscaled: BigInt,
    /// Number of digits after the decimal point.
    scale: u32,
    undefined: bool,
}

impl Decimal {
    /// Fractional digits kept by `/` (rounded half-even).
    pub const DIVISION_SCALE: u32 = 32;

    /// `unscaled / 10^scale`, normalized.
    pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Self {
        let mut unscaled = unscaled.into();
        let mut scale = scale;
        if unscaled.is_zero() {
            scale = 0;
        }
        let ten = BigInt::from(10u8);
        while scale > 0 && (&unscaled % &ten).is_zero() {
            unscaled /= &ten;
            scale -= 1;
        }
        Decimal {
            unscaled,
            scale,
            undefined: false,
        }
    }

    pub fn zero() -> Self {
        Decimal::new(BigInt::zero(), 0)
    }

    pub fn one() -> Self {
        Decimal::new(BigInt::one(), 0)
    }

    pub fn nan() -> Self {
        Decimal::undefined(NumberState::NaN)
    }

    pub fn infinity() -> Self {
        Decimal::undefined(NumberState::PositiveInfinity)
    }

    pub fn neg_infinity() -> Self {
        Decimal::undefined(NumberState::NegativeInfinity)
    }

    /// Build a number in the given state. `Defined` yields zero.
    pub fn undefined(state: NumberState) -> Self {
        if state.is_defined() {
            return Decimal::zero();
        }
        Decimal {
            unscaled: state.sentinel(),
            scale: 0,
            undefined: true,
        }
    }

    /// Convert a native float. NaN and infinities map to the matching
    /// undefined state; finite values keep their shortest round-trip digits.
    pub fn from_f64(value: f64) -> Self {
        match NumberState::of_float(value) {
            // `f64` display never uses an exponent, so it always lexes.
            NumberState::Defined => value
                .to_string()
                .parse()
                .unwrap_or_else(|_| Decimal::nan()),
            state => Decimal::undefined(state),
        }
    }

    pub fn state(&self) -> NumberState {
        if self.undefined {
            NumberState::from_sentinel(&self.unscaled)
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

    pub fn is_zero(&self) -> bool {
        !self.undefined && self.unscaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// `true` for defined values with no fractional part.
    pub fn is_integral(&self) -> bool {
        !self.undefined && self.scale == 0
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn to_f64(&self) -> f64 {
        match self.state() {
            NumberState::Defined => self.to_string().parse().unwrap_or(f64::NAN),
            NumberState::NaN => f64::NAN,
            NumberState::PositiveInfinity => f64::INFINITY,
            NumberState::NegativeInfinity => f64::NEG_INFINITY,
        }
    }

    /// The whole part as an `Integer` (truncated toward zero). Undefined
    /// states carry over.
    pub fn to_integer(&self) -> Integer {
        if self.undefined {
            return Integer::undefined(self.state());
        }
        Integer::new(&self.unscaled / pow10(self.scale))
    }

    fn operand(&self) -> Operand {
        let sign = if self.unscaled.is_negative() {
            -1
        } else {
            i8::from(!self.unscaled.is_zero())
        };
        (self.state(), sign)
    }

    fn resolve(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::Undefined(state) => Decimal::undefined(state),
            Outcome::Zero => Decimal::zero(),
            Outcome::Left => self.clone(),
        }
    }

    fn any_undefined(&self, rhs: &Decimal) -> bool {
        self.undefined || rhs.undefined
    }

    /// Both unscaled values brought to the larger scale.
    fn aligned(&self, rhs: &Decimal) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(rhs.scale);
        (
            &self.unscaled * pow10(scale - self.scale),
            &rhs.unscaled * pow10(scale - rhs.scale),
            scale,
        )
    }

    // Arithmetic

    pub fn plus(&self, rhs: &Decimal) -> Decimal {
        if self.any_undefined(rhs) {
            return self.resolve(undefined_outcome(Op::Add, self.operand(), rhs.operand()));
        }
        let (lhs, rhs, scale) = self.aligned(rhs);
        Decimal::new(lhs + rhs, scale)
    }

    pub fn minus(&self, rhs: &Decimal) -> Decimal {
        if self.any_undefined(rhs) {
            return self.resolve(undefined_outcome(Op::Sub, self.operand(), rhs.operand()));
        }
        let (lhs, rhs, scale) = self.aligned(rhs);
        Decimal::new(lhs - rhs, scale)
    }

    pub fn times(&self, rhs: &Decimal) -> Decimal {
        if self.any_undefined(rhs) {
            return self.resolve(undefined_outcome(Op::Mul, self.operand(), rhs.operand()));
        }
        match self.scale.checked_add(rhs.scale) {
            Some(scale) => Decimal::new(&self.unscaled * &rhs.unscaled, scale),
            None => Decimal::nan(),
        }
    }

    /// Division rounded half-even to [`Decimal::DIVISION_SCALE`] digits.
    pub fn quotient(&self, rhs: &Decimal) -> Decimal {
        self.div_with_scale(rhs, Decimal::DIVISION_SCALE, RoundingMode::HalfEven)
    }

    /// Division keeping `scale` fractional digits, rounded per `mode`.
    pub fn div_with_scale(&self, rhs: &Decimal, scale: u32, mode: RoundingMode) -> Decimal {
        if self.any_undefined(rhs) || rhs.is_zero() {
            return self.resolve(undefined_outcome(Op::Div, self.operand(), rhs.operand()));
        }
        // self / rhs = (a / 10^sa) / (b / 10^sb); scale the numerator so the
        // integer quotient carries `scale` fractional digits.
        let shift = i64::from(scale) + i64::from(rhs.scale) - i64::from(self.scale);
        let (numerator, denominator) = if shift >= 0 {
            (
                &self.unscaled * pow10(u32::try_from(shift).unwrap_or(u32::MAX)),
                rhs.unscaled.clone(),
            )
        } else {
            (
                self.unscaled.clone(),
                &rhs.unscaled * pow10(u32::try_from(-shift).unwrap_or(u32::MAX)),
            )
        };
        Decimal::new(divide_rounded(&numerator, &denominator, mode), scale)
    }

    /// Remainder of truncating division, with the sign of the dividend.
    pub fn modulo(&self, rhs: &Decimal) -> Decimal {
        if self.any_undefined(rhs) || rhs.is_zero() {
            return self.resolve(undefined_outcome(Op::Rem, self.operand(), rhs.operand()));
        }
        let (lhs, rhs, scale) = self.aligned(rhs);
        Decimal::new(lhs % rhs, scale)
    }

    pub fn pow(&self, exponent: u32) -> Decimal {
        if exponent == 0 {
            return Decimal::one();
        }
        if self.undefined {
            return Decimal::undefined(undefined_pow(self.state(), exponent));
        }
        match self.scale.checked_mul(exponent) {
            Some(scale) => Decimal::new(
                num_traits::pow(self.unscaled.clone(), exponent as usize),
                scale,
            ),
            None => Decimal::nan(),
        }
    }

    // Sign operations

    /// `abs(NaN) = NaN`, `abs(±Infinity) = +Infinity`.
    pub fn abs(&self) -> Decimal {
        match self.state() {
            NumberState::Defined => Decimal {
                unscaled: self.unscaled.abs(),
                scale: self.scale,
                undefined: false,
            },
            NumberState::NaN => Decimal::nan(),
            NumberState::PositiveInfinity | NumberState::NegativeInfinity => Decimal::infinity(),
        }
    }

    /// `negate(NaN) = NaN`; infinities swap sign.
    pub fn negate(&self) -> Decimal {
        Decimal {
            unscaled: -&self.unscaled,
            scale: self.scale,
            undefined: self.undefined,
        }
    }

    /// -1, 0 or 1; ±1 for the infinities and NaN for NaN.
    pub fn signum(&self) -> Decimal {
        match self.state() {
            NumberState::NaN => Decimal::nan(),
            _ => Decimal::new(self.unscaled.signum(), 0),
        }
    }

    // Rounding. Undefined values are returned unchanged by every mode
    // except `frac`.

    /// Round to `scale` fractional digits. A no-op when the value already
    /// has at most `scale` digits or is undefined.
    pub fn round_to(&self, scale: u32, mode: RoundingMode) -> Decimal {
        if self.undefined || self.scale <= scale {
            return self.clone();
        }
        let divisor = pow10(self.scale - scale);
        Decimal::new(divide_rounded(&self.unscaled, &divisor, mode), scale)
    }

    pub fn ceil(&self) -> Decimal {
        self.round_to(0, RoundingMode::Ceiling)
    }

    pub fn floor(&self) -> Decimal {
        self.round_to(0, RoundingMode::Floor)
    }

    pub fn round_half_up(&self) -> Decimal {
        self.round_to(0, RoundingMode::HalfUp)
    }

    pub fn round_half_even(&self) -> Decimal {
        self.round_to(0, RoundingMode::HalfEven)
    }

    pub fn truncate(&self) -> Decimal {
        self.round_to(0, RoundingMode::Down)
    }

    pub fn away_from_zero(&self) -> Decimal {
        self.round_to(0, RoundingMode::Up)
    }

    /// Fractional part, keeping the sign. Any undefined input yields NaN.
    pub fn frac(&self) -> Decimal {
        if self.undefined {
            return Decimal::nan();
        }
        self.minus(&self.truncate())
    }
}

forward_binops!(Decimal {
    Add::add => plus,
    Sub::sub => minus,
    Mul::mul => times,
    Div::div => quotient,
    Rem::rem => modulo,
});

impl Default for Decimal {
    fn default() -> Self {
        Decimal::zero()
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_state = self.state().rank().cmp(&other.state().rank());
        if by_state != Ordering::Equal || self.undefined {
            return by_state;
        }
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&Integer> for Decimal {
    fn from(value: &Integer) -> Self {
        if value.is_defined() {
            Decimal::new(value.magnitude().clone(), 0)
        } else {
            Decimal::undefined(value.state())
        }
    }
}

impl From<Integer> for Decimal {
    fn from(value: Integer) -> Self {
        Decimal::from(&value)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::new(value, 0)
    }
}

impl FromStr for Decimal {
    type Err = ParseNumberError;

    /// Decimal text: optional sign, digits with an optional fraction and an
    /// optional exponent (`-1.5e3`, `.25`), or one of the undefined tokens.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match lex(text)? {
            Lexeme::Undefined(state) => Ok(Decimal::undefined(state)),
            Lexeme::Finite {
                negative,
                int_digits,
                frac_digits,
                exponent,
            } => {
                let digits = format!("{int_digits}{frac_digits}");
                let mut unscaled = digits
                    .parse::<BigInt>()
                    .map_err(|_| ParseNumberError::Invalid(text.trim().to_string()))?;
                if negative {
                    unscaled = -unscaled;
                }
                let frac_len = i64::try_from(frac_digits.len())
                    .map_err(|_| ParseNumberError::Invalid(text.trim().to_string()))?;
                let scale = frac_len - exponent;
                if scale >= 0 {
                    let scale = u32::try_from(scale)
                        .map_err(|_| ParseNumberError::ExponentOutOfRange(text.trim().to_string()))?;
                    Ok(Decimal::new(unscaled, scale))
                } else {
                    let shift = u32::try_from(-scale)
                        .map_err(|_| ParseNumberError::ExponentOutOfRange(text.trim().to_string()))?;
                    Ok(Decimal::new(unscaled * pow10(shift), 0))
                }
            }
        }
    }
}

impl fmt::Display for Decimal {
    /// Plain positional notation with every significant digit; language
    /// level rendering goes through `NumberFormat` instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = self.state().token() {
            return f.write_str(token);
        }
        let digits = self.unscaled.abs().to_string();
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
        } else {
            digits
        };
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{whole}.{fraction}")
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests;
