use super::*;
use pretty_assertions::assert_eq;

fn dec(text: &str) -> Decimal {
    match text.parse() {
        Ok(value) => value,
        Err(err) => panic!("bad test literal {text:?}: {err}"),
    }
}

fn format(pattern: &str) -> NumberFormat {
    match pattern.parse() {
        Ok(format) => format,
        Err(err) => panic!("bad test pattern {pattern:?}: {err}"),
    }
}

#[test]
fn default_pattern() {
    let format = NumberFormat::default();
    assert_eq!(format, self::format(DEFAULT_PATTERN));
    assert_eq!(format.format_decimal(&dec("1.5")), "1.5");
    assert_eq!(format.format_decimal(&(dec("1") / dec("3"))), "0.333333");
    assert_eq!(format.format_decimal(&(dec("2") / dec("3"))), "0.666667");
    assert_eq!(format.format_integer(&Integer::from(42)), "42");
}

#[test]
fn rounded_away_fraction_has_no_sign() {
    let format = NumberFormat::default();
    assert_eq!(format.format_decimal(&dec("0.0000001")), "0");
    assert_eq!(format.format_decimal(&dec("-0.0000001")), "0");
}

#[test]
fn undefined_values_render_tokens() {
    let format = self::format("000.00");
    assert_eq!(format.format_integer(&Integer::nan()), "NaN");
    assert_eq!(format.format_decimal(&Decimal::infinity()), "Infinity");
    assert_eq!(format.format_decimal(&Decimal::neg_infinity()), "-Infinity");
}

#[test]
fn minimum_digits_pad() {
    let format = self::format("000.00");
    assert_eq!(format.format_integer(&Integer::from(7)), "007.00");
    assert_eq!(format.format_integer(&Integer::from(-7)), "-007.00");
    assert_eq!(format.format_decimal(&dec("1.5")), "001.50");
    assert_eq!(format.format_decimal(&dec("1234.5")), "1234.50");
}

#[test]
fn maximum_fraction_rounds_half_even() {
    assert_eq!(format("0.##").format_decimal(&dec("2.675")), "2.68");
    assert_eq!(format("0.##").format_decimal(&dec("2.665")), "2.66");
    assert_eq!(format("0").format_decimal(&dec("2.5")), "2");
    assert_eq!(format("0").format_decimal(&dec("3.5")), "4");
}

#[test]
fn optional_integer_digit_drops_leading_zero() {
    assert_eq!(format("#.##").format_decimal(&dec("0.5")), ".5");
    assert_eq!(format("#.##").format_decimal(&dec("0")), "0");
}

#[test]
fn rejects_malformed_patterns() {
    for pattern in ["", "abc", "0.#0", "0.0.0", "0,00"] {
        assert_eq!(
            pattern.parse::<NumberFormat>(),
            Err(ParseNumberError::InvalidFormat(pattern.to_string())),
            "{pattern:?}"
        );
    }
}

#[test]
fn pattern_accessors() {
    let format = format("00.0##");
    assert_eq!(format.min_integer_digits(), 2);
    assert_eq!(format.min_fraction_digits(), 1);
    assert_eq!(format.max_fraction_digits(), 3);
    assert_eq!(format.to_string(), "00.0##");
}
