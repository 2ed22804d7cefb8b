use super::*;
use pretty_assertions::assert_eq;

fn int(n: i64) -> Integer {
    Integer::from(n)
}

#[test]
fn nan_equals_only_nan() {
    assert_eq!(Integer::nan(), Integer::nan());
    assert_ne!(Integer::nan(), Integer::infinity());
    assert_ne!(Integer::nan(), Integer::zero());
    assert_ne!(Integer::nan(), Integer::neg_infinity());
}

#[test]
fn states_decode_from_sentinels() {
    assert_eq!(Integer::nan().state(), NumberState::NaN);
    assert_eq!(Integer::infinity().state(), NumberState::PositiveInfinity);
    assert_eq!(Integer::neg_infinity().state(), NumberState::NegativeInfinity);
    assert_eq!(int(-5).state(), NumberState::Defined);
}

#[test]
fn ordering_places_infinities_around_defined_values() {
    let mut values = vec![
        Integer::nan(),
        int(3),
        Integer::infinity(),
        int(-10),
        Integer::neg_infinity(),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            Integer::neg_infinity(),
            int(-10),
            int(3),
            Integer::infinity(),
            Integer::nan(),
        ]
    );
}

#[test]
fn abs_and_negate_on_undefined() {
    assert_eq!(Integer::nan().abs(), Integer::nan());
    assert_eq!(Integer::neg_infinity().abs(), Integer::infinity());
    assert_eq!(Integer::infinity().abs(), Integer::infinity());
    assert_eq!(Integer::nan().negate(), Integer::nan());
    assert_eq!(Integer::infinity().negate(), Integer::neg_infinity());
    assert_eq!(Integer::infinity().negate().negate(), Integer::infinity());
}

#[test]
fn signum_of_each_state() {
    assert_eq!(Integer::infinity().signum(), int(1));
    assert_eq!(Integer::neg_infinity().signum(), int(-1));
    assert_eq!(Integer::nan().signum(), Integer::nan());
    assert_eq!(int(-42).signum(), int(-1));
    assert_eq!(int(0).signum(), int(0));
}

#[test]
fn from_f64_maps_special_values() {
    assert_eq!(Integer::from_f64(f64::NAN), Integer::nan());
    assert_eq!(Integer::from_f64(f64::INFINITY), Integer::infinity());
    assert_eq!(Integer::from_f64(f64::NEG_INFINITY), Integer::neg_infinity());
    assert_eq!(Integer::from_f64(3.9), int(3));
    assert_eq!(Integer::from_f64(-3.9), int(-3));
}

#[test]
fn arithmetic_on_defined_values() {
    assert_eq!(int(7) + int(5), int(12));
    assert_eq!(int(7) - int(10), int(-3));
    assert_eq!(&int(7) * &int(6), int(42));
    assert_eq!(int(7) / int(2), int(3));
    assert_eq!(int(-7) / int(2), int(-3));
    assert_eq!(int(-7) % int(2), int(-1));
    assert_eq!(-int(4), int(-4));
}

#[test]
fn arithmetic_beyond_i64() {
    let big = int(i64::MAX) * int(i64::MAX);
    assert_eq!(
        big.to_string(),
        "85070591730234615847396907784232501249"
    );
    assert_eq!(big.to_i64(), None);
}

#[test]
fn division_by_zero() {
    assert_eq!(int(5) / int(0), Integer::infinity());
    assert_eq!(int(-5) / int(0), Integer::neg_infinity());
    assert_eq!(int(0) / int(0), Integer::nan());
    assert_eq!(int(5) % int(0), Integer::nan());
}

#[test]
fn undefined_arithmetic() {
    assert_eq!(Integer::infinity() + int(1), Integer::infinity());
    assert_eq!(Integer::infinity() - Integer::infinity(), Integer::nan());
    assert_eq!(Integer::neg_infinity() * int(-2), Integer::infinity());
    assert_eq!(Integer::infinity() * int(0), Integer::nan());
    assert_eq!(int(9) / Integer::infinity(), int(0));
    assert_eq!(int(9) % Integer::infinity(), int(9));
    assert_eq!(Integer::nan() + int(1), Integer::nan());
}

#[test]
fn pow_covers_states() {
    assert_eq!(int(2).pow(10), int(1024));
    assert_eq!(int(-3).pow(3), int(-27));
    assert_eq!(Integer::nan().pow(0), int(1));
    assert_eq!(Integer::neg_infinity().pow(3), Integer::neg_infinity());
    assert_eq!(Integer::neg_infinity().pow(2), Integer::infinity());
}

#[test]
fn rounding_is_identity_and_frac_is_zero_or_nan() {
    let n = int(-17);
    assert_eq!(n.ceil(), n);
    assert_eq!(n.floor(), n);
    assert_eq!(n.round_half_up(), n);
    assert_eq!(n.round_half_even(), n);
    assert_eq!(n.truncate(), n);
    assert_eq!(n.away_from_zero(), n);
    assert_eq!(n.frac(), int(0));
    assert_eq!(Integer::infinity().floor(), Integer::infinity());
    assert_eq!(Integer::infinity().frac(), Integer::nan());
}

#[test]
fn parse_whole_numbers() {
    assert_eq!("42".parse::<Integer>(), Ok(int(42)));
    assert_eq!("  -17 ".parse::<Integer>(), Ok(int(-17)));
    assert_eq!("+3.000".parse::<Integer>(), Ok(int(3)));
    assert_eq!("NaN".parse::<Integer>(), Ok(Integer::nan()));
    assert_eq!("-infinity".parse::<Integer>(), Ok(Integer::neg_infinity()));
}

#[test]
fn parse_rejects_fractions_and_text() {
    assert_eq!(
        "3.5".parse::<Integer>(),
        Err(ParseNumberError::NotWhole("3.5".to_string()))
    );
    assert!("1e3".parse::<Integer>().is_err());
    assert!(".0".parse::<Integer>().is_err());
    assert!("abc".parse::<Integer>().is_err());
    assert_eq!("".parse::<Integer>(), Err(ParseNumberError::Empty));
}

#[test]
fn display_uses_literal_tokens() {
    assert_eq!(Integer::nan().to_string(), "NaN");
    assert_eq!(Integer::infinity().to_string(), "Infinity");
    assert_eq!(Integer::neg_infinity().to_string(), "-Infinity");
    assert_eq!(int(-8).to_string(), "-8");
}
