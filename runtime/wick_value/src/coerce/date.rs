//! Date target. Dates are naive UTC timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use wick_numeric::Decimal;

use super::Coerce;
use crate::config::Resolver;
use crate::value::{Value, ValueKind};

/// Formats tried, in order, after the configured date format.
///
/// Two-digit years come before four-digit ones: `%Y` also accepts two
/// digits and would read `1/2/24` as the year 24.
pub const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%A, %B %d, %Y",
];

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Whole Unix seconds and the sub-second nanoseconds.
pub(super) fn unix_seconds(date: &NaiveDateTime) -> (i64, u32) {
    let utc = date.and_utc();
    (utc.timestamp(), utc.timestamp_subsec_nanos())
}

/// Unix seconds with the sub-second part as a fraction.
pub(super) fn from_unix_decimal(date: &NaiveDateTime) -> Decimal {
    let (seconds, nanos) = unix_seconds(date);
    let scaled = i128::from(seconds) * i128::from(NANOS_PER_SECOND) + i128::from(nanos);
    Decimal::new(scaled, 9)
}

fn from_unix(seconds: i64, nanos: u32) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(seconds, nanos).map(|utc| utc.naive_utc())
}

fn from_unix_seconds(seconds: &Decimal) -> Option<NaiveDateTime> {
    if !seconds.is_defined() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = seconds
        .minus(&whole)
        .times(&Decimal::from(NANOS_PER_SECOND))
        .to_integer()
        .to_i64()?;
    from_unix(whole.to_integer().to_i64()?, u32::try_from(nanos).ok()?)
}

fn parse_with(text: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, format).ok().or_else(|| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

impl Coerce for NaiveDateTime {
    const TARGET: ValueKind = ValueKind::Date;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Numbers are Unix seconds.
    fn structural(value: &Value, _resolver: &dyn Resolver) -> Option<Self> {
        match value {
            Value::Integer(n) => from_unix(n.to_i64()?, 0),
            Value::Decimal(n) => from_unix_seconds(n),
            _ => None,
        }
    }

    fn parse_text(text: &str, resolver: &dyn Resolver) -> Option<Self> {
        let text = text.trim();
        let configured = resolver.config().date_format.as_str();
        std::iter::once(configured)
            .chain(DATE_FORMATS)
            .find_map(|format| parse_with(text, format))
    }
}
