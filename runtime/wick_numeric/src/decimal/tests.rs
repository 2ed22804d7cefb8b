use super::*;
use pretty_assertions::assert_eq;

fn dec(text: &str) -> Decimal {
    match text.parse() {
        Ok(value) => value,
        Err(err) => panic!("bad test literal {text:?}: {err}"),
    }
}

#[test]
fn normalization_makes_equal_values_equal() {
    assert_eq!(Decimal::new(1500, 3), dec("1.5"));
    assert_eq!(dec("1.50"), dec("1.5"));
    assert_eq!(dec("-0.0"), Decimal::zero());
    assert_eq!(dec("1.500").scale(), 1);
}

#[test]
fn parse_forms() {
    assert_eq!(dec(".25").to_string(), "0.25");
    assert_eq!(dec("1.5e3").to_string(), "1500");
    assert_eq!(dec("-12.5E-2").to_string(), "-0.125");
    assert_eq!(dec(" +7 ").to_string(), "7");
    assert_eq!(dec("infinity"), Decimal::infinity());
    assert_eq!(dec("NAN"), Decimal::nan());
    assert!("1.2.3".parse::<Decimal>().is_err());
    assert_eq!("".parse::<Decimal>(), Err(ParseNumberError::Empty));
}

#[test]
fn display_pads_small_fractions() {
    assert_eq!(Decimal::new(-5, 3).to_string(), "-0.005");
    assert_eq!(Decimal::new(12345, 2).to_string(), "123.45");
    assert_eq!(Decimal::neg_infinity().to_string(), "-Infinity");
}

#[test]
fn addition_aligns_scales() {
    assert_eq!(dec("1.25") + dec("2.5"), dec("3.75"));
    assert_eq!(dec("0.1") + dec("0.2"), dec("0.3"));
    assert_eq!(dec("5") - dec("7.5"), dec("-2.5"));
    assert_eq!(&dec("1.5") * &dec("-1.5"), dec("-2.25"));
}

#[test]
fn division_rounds_half_even_at_division_scale() {
    assert_eq!(
        (dec("1") / dec("3")).to_string(),
        "0.33333333333333333333333333333333"
    );
    assert_eq!(
        (dec("2") / dec("3")).to_string(),
        "0.66666666666666666666666666666667"
    );
    assert_eq!(dec("1") / dec("0.5"), dec("2"));
    assert_eq!(dec("7.5") / dec("2.5"), dec("3"));
}

#[test]
fn division_with_explicit_scale() {
    let third = dec("10").div_with_scale(&dec("3"), 2, RoundingMode::HalfEven);
    assert_eq!(third, dec("3.33"));
    let up = dec("10").div_with_scale(&dec("3"), 0, RoundingMode::Up);
    assert_eq!(up, dec("4"));
}

#[test]
fn division_by_zero() {
    assert_eq!(dec("1.5") / Decimal::zero(), Decimal::infinity());
    assert_eq!(dec("-1.5") / Decimal::zero(), Decimal::neg_infinity());
    assert_eq!(Decimal::zero() / Decimal::zero(), Decimal::nan());
    assert_eq!(dec("1.5") % Decimal::zero(), Decimal::nan());
}

#[test]
fn remainder_keeps_dividend_sign() {
    assert_eq!(dec("-7.5") % dec("2"), dec("-1.5"));
    assert_eq!(dec("7.5") % dec("-2"), dec("1.5"));
}

#[test]
fn undefined_algebra() {
    assert_eq!(Decimal::nan(), Decimal::nan());
    assert_ne!(Decimal::nan(), Decimal::infinity());
    assert_eq!(Decimal::infinity().negate().negate(), Decimal::infinity());
    assert_eq!(Decimal::neg_infinity().abs(), Decimal::infinity());
    assert_eq!(Decimal::nan().abs(), Decimal::nan());
    assert_eq!(Decimal::neg_infinity().signum(), dec("-1"));
    assert_eq!(Decimal::nan().signum(), Decimal::nan());
    assert_eq!(Decimal::infinity() + Decimal::neg_infinity(), Decimal::nan());
    assert_eq!(dec("2.5") / Decimal::infinity(), Decimal::zero());
}

#[test]
fn rounding_modes() {
    assert_eq!(dec("2.5").round_half_even(), dec("2"));
    assert_eq!(dec("3.5").round_half_even(), dec("4"));
    assert_eq!(dec("-2.5").round_half_up(), dec("-3"));
    assert_eq!(dec("-1.5").ceil(), dec("-1"));
    assert_eq!(dec("-1.5").floor(), dec("-2"));
    assert_eq!(dec("-1.9").truncate(), dec("-1"));
    assert_eq!(dec("1.1").away_from_zero(), dec("2"));
    assert_eq!(dec("1.25").round_to(1, RoundingMode::HalfEven), dec("1.2"));
    assert_eq!(dec("1.25").round_to(4, RoundingMode::HalfEven), dec("1.25"));
}

#[test]
fn rounding_leaves_undefined_unchanged() {
    for value in [Decimal::nan(), Decimal::infinity(), Decimal::neg_infinity()] {
        assert_eq!(value.ceil(), value);
        assert_eq!(value.floor(), value);
        assert_eq!(value.round_half_up(), value);
        assert_eq!(value.round_half_even(), value);
        assert_eq!(value.truncate(), value);
        assert_eq!(value.away_from_zero(), value);
        assert_eq!(value.frac(), Decimal::nan());
    }
}

#[test]
fn frac_keeps_sign() {
    assert_eq!(dec("-1.75").frac(), dec("-0.75"));
    assert_eq!(dec("4").frac(), Decimal::zero());
}

#[test]
fn pow_scales_fraction() {
    assert_eq!(dec("1.5").pow(2), dec("2.25"));
    assert_eq!(dec("-0.1").pow(3), dec("-0.001"));
    assert_eq!(Decimal::infinity().pow(0), Decimal::one());
}

#[test]
fn conversions_with_integer_and_float() {
    assert_eq!(dec("-7.9").to_integer(), Integer::from(-7));
    assert_eq!(Decimal::infinity().to_integer(), Integer::infinity());
    assert_eq!(Decimal::from(Integer::from(12)), dec("12"));
    assert_eq!(Decimal::from(&Integer::nan()), Decimal::nan());
    assert_eq!(Decimal::from_f64(0.1), dec("0.1"));
    assert_eq!(Decimal::from_f64(f64::NEG_INFINITY), Decimal::neg_infinity());
    assert!(Decimal::from_f64(f64::NAN).is_nan());
    assert_eq!(dec("2.5").to_f64(), 2.5);
}

#[test]
fn ordering_across_states() {
    let mut values = vec![
        Decimal::nan(),
        dec("2"),
        Decimal::neg_infinity(),
        dec("1.5"),
        Decimal::infinity(),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            Decimal::neg_infinity(),
            dec("1.5"),
            dec("2"),
            Decimal::infinity(),
            Decimal::nan(),
        ]
    );
}
