//! Rounding modes and the quotient adjustment shared by both numeric kinds.

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::{Signed, Zero};

/// How a discarded fraction adjusts the kept digits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Toward +Infinity.
    Ceiling,
    /// Toward -Infinity.
    Floor,
    /// Nearest neighbor; ties away from zero.
    HalfUp,
    /// Nearest neighbor; ties to the even neighbor.
    HalfEven,
    /// Toward zero (truncate).
    Down,
    /// Away from zero.
    Up,
}

/// `10^exponent`.
pub(crate) fn pow10(exponent: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}

/// Divide `numerator` by a non-zero `denominator`, rounding per `mode`.
pub(crate) fn divide_rounded(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    let (numerator, denominator) = if denominator.is_negative() {
        (-numerator, -denominator)
    } else {
        (numerator.clone(), denominator.clone())
    };
    let (quotient, remainder) = numerator.div_rem(&denominator);
    if remainder.is_zero() {
        return quotient;
    }

    // The denominator is positive, so the remainder carries the sign of the
    // exact result.
    let negative = remainder.is_negative();
    let away = if negative {
        &quotient - 1
    } else {
        &quotient + 1
    };
    let twice: BigInt = remainder.abs() * 2u8;

    match mode {
        RoundingMode::Down => quotient,
        RoundingMode::Up => away,
        RoundingMode::Ceiling => {
            if negative {
                quotient
            } else {
                away
            }
        }
        RoundingMode::Floor => {
            if negative {
                away
            } else {
                quotient
            }
        }
        RoundingMode::HalfUp => {
            if twice >= denominator {
                away
            } else {
                quotient
            }
        }
        RoundingMode::HalfEven => match twice.cmp(&denominator) {
            std::cmp::Ordering::Greater => away,
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Equal => {
                if quotient.is_odd() {
                    away
                } else {
                    quotient
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(n: i64, d: i64, mode: RoundingMode) -> i64 {
        let q = divide_rounded(&BigInt::from(n), &BigInt::from(d), mode);
        i64::try_from(q).unwrap_or(i64::MIN)
    }

    #[test]
    fn half_up_rounds_ties_away_from_zero() {
        assert_eq!(round(25, 10, RoundingMode::HalfUp), 3);
        assert_eq!(round(-25, 10, RoundingMode::HalfUp), -3);
        assert_eq!(round(24, 10, RoundingMode::HalfUp), 2);
    }

    #[test]
    fn half_even_rounds_ties_to_even() {
        assert_eq!(round(25, 10, RoundingMode::HalfEven), 2);
        assert_eq!(round(35, 10, RoundingMode::HalfEven), 4);
        assert_eq!(round(-25, 10, RoundingMode::HalfEven), -2);
        assert_eq!(round(26, 10, RoundingMode::HalfEven), 3);
    }

    #[test]
    fn directed_modes() {
        assert_eq!(round(21, 10, RoundingMode::Ceiling), 3);
        assert_eq!(round(-21, 10, RoundingMode::Ceiling), -2);
        assert_eq!(round(21, 10, RoundingMode::Floor), 2);
        assert_eq!(round(-21, 10, RoundingMode::Floor), -3);
        assert_eq!(round(-29, 10, RoundingMode::Down), -2);
        assert_eq!(round(-21, 10, RoundingMode::Up), -3);
    }

    #[test]
    fn negative_denominator_is_normalized() {
        assert_eq!(round(7, -2, RoundingMode::Floor), -4);
        assert_eq!(round(-7, -2, RoundingMode::Down), 3);
    }

    #[test]
    fn ties_beyond_machine_width() {
        let denominator = pow10(30);
        let numerator = &denominator * 7u8 + &denominator / 2u8;
        assert_eq!(
            divide_rounded(&numerator, &denominator, RoundingMode::HalfEven),
            BigInt::from(8u8)
        );
        assert_eq!(
            divide_rounded(&-numerator, &denominator, RoundingMode::HalfUp),
            BigInt::from(-8i8)
        );
    }

    #[test]
    fn exact_division_is_untouched() {
        for mode in [
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfEven,
            RoundingMode::Down,
            RoundingMode::Up,
        ] {
            assert_eq!(round(40, 10, mode), 4);
        }
    }
}
