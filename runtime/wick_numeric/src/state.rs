//! Defined/undefined state shared by `Integer` and `Decimal`.
//!
//! Undefined numbers keep a sentinel magnitude whose sign names the state:
//! zero is NaN, positive is +Infinity, negative is -Infinity. Comparing the
//! sentinels therefore orders the infinities correctly without a second
//! lookup.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

/// Token rendered for NaN, independent of number formatting.
pub const NAN_TOKEN: &str = "NaN";
/// Token rendered for +Infinity.
pub const INFINITY_TOKEN: &str = "Infinity";
/// Token rendered for -Infinity.
pub const NEG_INFINITY_TOKEN: &str = "-Infinity";

/// Whether a number holds a magnitude or one of the undefined states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberState {
    Defined,
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl NumberState {
    #[inline]
    pub fn is_defined(self) -> bool {
        matches!(self, NumberState::Defined)
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(
            self,
            NumberState::PositiveInfinity | NumberState::NegativeInfinity
        )
    }

    /// Literal token for an undefined state; `None` for defined numbers.
    pub fn token(self) -> Option<&'static str> {
        match self {
            NumberState::Defined => None,
            NumberState::NaN => Some(NAN_TOKEN),
            NumberState::PositiveInfinity => Some(INFINITY_TOKEN),
            NumberState::NegativeInfinity => Some(NEG_INFINITY_TOKEN),
        }
    }

    /// Sentinel magnitude stored by an undefined number.
    pub(crate) fn sentinel(self) -> BigInt {
        match self {
            NumberState::Defined | NumberState::NaN => BigInt::from(0),
            NumberState::PositiveInfinity => BigInt::from(1),
            NumberState::NegativeInfinity => BigInt::from(-1),
        }
    }

    /// Decode the state of an undefined number from its sentinel.
    pub(crate) fn from_sentinel(magnitude: &BigInt) -> Self {
        if magnitude.is_positive() {
            NumberState::PositiveInfinity
        } else if magnitude.is_negative() {
            NumberState::NegativeInfinity
        } else {
            NumberState::NaN
        }
    }

    /// State of a native float that is NaN or infinite.
    pub(crate) fn of_float(value: f64) -> Self {
        if value.is_nan() {
            NumberState::NaN
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                NumberState::PositiveInfinity
            } else {
                NumberState::NegativeInfinity
            }
        } else {
            NumberState::Defined
        }
    }

    /// Ordering rank: -Infinity < defined < +Infinity < NaN.
    pub(crate) fn rank(self) -> u8 {
        match self {
            NumberState::NegativeInfinity => 0,
            NumberState::Defined => 1,
            NumberState::PositiveInfinity => 2,
            NumberState::NaN => 3,
        }
    }
}

impl fmt::Display for NumberState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("defined"))
    }
}

/// Binary operation evaluated on at least one undefined operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Result of an operation that cannot be computed on magnitudes alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The result is this undefined state.
    Undefined(NumberState),
    /// The result is a defined zero.
    Zero,
    /// The result is the left operand unchanged.
    Left,
}

/// Operand summary: its state and, for defined values, the sign (-1, 0, 1).
pub(crate) type Operand = (NumberState, i8);

/// IEEE-754 stand-in for an operand. Defined magnitudes only matter through
/// their sign here, so a unit value with the same sign is exact enough.
fn proxy((state, sign): Operand) -> f64 {
    match state {
        NumberState::Defined => f64::from(sign),
        NumberState::NaN => f64::NAN,
        NumberState::PositiveInfinity => f64::INFINITY,
        NumberState::NegativeInfinity => f64::NEG_INFINITY,
    }
}

/// Outcome of `left op right` when either operand is undefined or the
/// operation divides by a defined zero.
pub(crate) fn undefined_outcome(op: Op, left: Operand, right: Operand) -> Outcome {
    let (l, r) = (proxy(left), proxy(right));
    let result = match op {
        Op::Add => l + r,
        Op::Sub => l - r,
        Op::Mul => l * r,
        Op::Div => l / r,
        Op::Rem => l % r,
    };
    match NumberState::of_float(result) {
        NumberState::Defined if op == Op::Rem => Outcome::Left,
        NumberState::Defined => Outcome::Zero,
        state => Outcome::Undefined(state),
    }
}

/// State of `base ^ exponent` for an undefined base and positive exponent.
pub(crate) fn undefined_pow(base: NumberState, exponent: u32) -> NumberState {
    match base {
        NumberState::NegativeInfinity if exponent % 2 == 1 => NumberState::NegativeInfinity,
        NumberState::NegativeInfinity | NumberState::PositiveInfinity => {
            NumberState::PositiveInfinity
        }
        NumberState::NaN | NumberState::Defined => NumberState::NaN,
    }
}
