//! Lexing of numeric text shared by the `FromStr` implementations.

use thiserror::Error;

use crate::state::NumberState;

/// Largest accepted decimal exponent magnitude (`1e10000`).
const MAX_EXPONENT: i64 = 10_000;

/// Error returned when text is not a number of the requested kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    #[error("empty text is not a number")]
    Empty,
    #[error("'{0}' is not a number")]
    Invalid(String),
    #[error("exponent of '{0}' is out of range")]
    ExponentOutOfRange(String),
    #[error("'{0}' is not a whole number")]
    NotWhole(String),
    #[error("'{0}' is not a valid number format")]
    InvalidFormat(String),
}

/// Lexical shape of a numeric literal.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Lexeme<'a> {
    /// One of the undefined literal tokens.
    Undefined(NumberState),
    /// `[sign] int_digits [. frac_digits] [e exponent]`.
    Finite {
        negative: bool,
        int_digits: &'a str,
        frac_digits: &'a str,
        exponent: i64,
    },
}

fn undefined_token(text: &str) -> Option<NumberState> {
    if text.eq_ignore_ascii_case("nan") {
        Some(NumberState::NaN)
    } else if text.eq_ignore_ascii_case("infinity") || text.eq_ignore_ascii_case("+infinity") {
        Some(NumberState::PositiveInfinity)
    } else if text.eq_ignore_ascii_case("-infinity") {
        Some(NumberState::NegativeInfinity)
    } else {
        None
    }
}

fn leading_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Split surrounding-whitespace-trimmed `text` into its numeric parts.
pub(crate) fn lex(text: &str) -> Result<Lexeme<'_>, ParseNumberError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseNumberError::Empty);
    }
    if let Some(state) = undefined_token(trimmed) {
        return Ok(Lexeme::Undefined(state));
    }
    let invalid = || ParseNumberError::Invalid(trimmed.to_string());

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (int_digits, rest) = leading_digits(rest);
    let (frac_digits, rest) = match rest.strip_prefix('.') {
        Some(after_point) => leading_digits(after_point),
        None => ("", rest),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(invalid());
    }

    let exponent = if rest.is_empty() {
        0
    } else {
        let body = rest
            .strip_prefix('e')
            .or_else(|| rest.strip_prefix('E'))
            .ok_or_else(invalid)?;
        let (exp_negative, body) = match body.as_bytes().first() {
            Some(b'-') => (true, &body[1..]),
            Some(b'+') => (false, &body[1..]),
            _ => (false, body),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude: i64 = body
            .parse()
            .map_err(|_| ParseNumberError::ExponentOutOfRange(trimmed.to_string()))?;
        if magnitude > MAX_EXPONENT {
            return Err(ParseNumberError::ExponentOutOfRange(trimmed.to_string()));
        }
        if exp_negative {
            -magnitude
        } else {
            magnitude
        }
    };

    Ok(Lexeme::Finite {
        negative,
        int_digits,
        frac_digits,
        exponent,
    })
}
