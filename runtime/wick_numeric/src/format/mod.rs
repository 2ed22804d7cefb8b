//! Script-visible number rendering.
//!
//! A format pattern looks like `"0.######"`: the zeros before the point give
//! the minimum number of integer digits, the zeros after it the minimum
//! number of fraction digits, and zeros plus `#` after it the maximum.
//! Fractions are rounded half-even to the maximum.

use std::fmt;
use std::str::FromStr;

use crate::decimal::Decimal;
use crate::integer::Integer;
use crate::number::Number;
use crate::parse::ParseNumberError;
use crate::rounding::RoundingMode;

/// Pattern used when nothing else is configured.
pub const DEFAULT_PATTERN: &str = "0.######";

/// Parsed number format pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    min_integer_digits: usize,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
    pattern: String,
}

impl NumberFormat {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn min_integer_digits(&self) -> usize {
        self.min_integer_digits
    }

    pub fn min_fraction_digits(&self) -> u32 {
        self.min_fraction_digits
    }

    pub fn max_fraction_digits(&self) -> u32 {
        self.max_fraction_digits
    }

    pub fn format_integer(&self, value: &Integer) -> String {
        if let Some(token) = value.state().token() {
            return token.to_string();
        }
        self.assemble(&value.to_string(), "")
    }

    pub fn format_decimal(&self, value: &Decimal) -> String {
        if let Some(token) = value.state().token() {
            return token.to_string();
        }
        let rounded = value.round_to(self.max_fraction_digits, RoundingMode::HalfEven);
        let text = rounded.to_string();
        match text.split_once('.') {
            Some((whole, fraction)) => self.assemble(whole, fraction),
            None => self.assemble(&text, ""),
        }
    }

    pub fn format_number(&self, value: &Number) -> String {
        match value {
            Number::Integer(value) => self.format_integer(value),
            Number::Decimal(value) => self.format_decimal(value),
        }
    }

    /// Join a signed whole part and fraction digits, padding both to their
    /// minimums.
    fn assemble(&self, whole: &str, fraction: &str) -> String {
        let (sign, digits) = match whole.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", whole),
        };
        let mut out = String::with_capacity(whole.len() + fraction.len() + 4);
        out.push_str(sign);

        let digits = if self.min_integer_digits == 0 && digits == "0" && !fraction.is_empty() {
            ""
        } else {
            digits
        };
        for _ in digits.len()..self.min_integer_digits {
            out.push('0');
        }
        out.push_str(digits);

        let min_fraction = self.min_fraction_digits as usize;
        if fraction.is_empty() && min_fraction == 0 {
            return out;
        }
        out.push('.');
        out.push_str(fraction);
        for _ in fraction.len()..min_fraction {
            out.push('0');
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 6,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl FromStr for NumberFormat {
    type Err = ParseNumberError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNumberError::InvalidFormat(pattern.to_string());
        if pattern.is_empty() {
            return Err(invalid());
        }
        let (whole, fraction) = match pattern.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (pattern, ""),
        };
        if !whole.chars().all(|c| c == '0' || c == '#') {
            return Err(invalid());
        }

        let min_fraction = fraction.chars().take_while(|&c| c == '0').count();
        let optional = &fraction[min_fraction..];
        if !optional.chars().all(|c| c == '#') {
            return Err(invalid());
        }
        let to_u32 = |n: usize| u32::try_from(n).map_err(|_| invalid());

        Ok(NumberFormat {
            min_integer_digits: whole.chars().filter(|&c| c == '0').count(),
            min_fraction_digits: to_u32(min_fraction)?,
            max_fraction_digits: to_u32(fraction.len())?,
            pattern: pattern.to_string(),
        })
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests;
