//! Keyed sorting styles on top of `VariableStore::sort_by`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use wick_numeric::Number;

use super::VariableStore;
use crate::coerce::Coerce;
use crate::config::Resolver;
use crate::error::{access_failed, ValueError, ValueResult};
use crate::value::Value;

/// How chunks are compared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortStyle {
    /// Case-insensitive text; ties broken by exact text.
    #[default]
    Text,
    /// By numeric value. Chunks that are not numbers go last.
    Numeric,
    /// By date. Chunks that are not dates go last.
    DateTime,
}

impl FromStr for SortStyle {
    type Err = ValueError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(SortStyle::Text),
            "numeric" => Ok(SortStyle::Numeric),
            "datetime" => Ok(SortStyle::DateTime),
            _ => Err(access_failed(format!("unknown sort style '{name}'"))),
        }
    }
}

impl fmt::Display for SortStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortStyle::Text => "text",
            SortStyle::Numeric => "numeric",
            SortStyle::DateTime => "datetime",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Precomputed comparison key of one chunk.
enum SortKey {
    Text { folded: String, exact: String },
    Number(Option<Number>),
    Date(Option<NaiveDateTime>),
}

impl SortKey {
    fn of(style: SortStyle, value: &Value, resolver: &dyn Resolver) -> ValueResult<SortKey> {
        Ok(match style {
            SortStyle::Text => {
                let exact = value.to_text(resolver)?;
                SortKey::Text {
                    folded: exact.to_lowercase(),
                    exact,
                }
            }
            // Blank chunks would coerce to zero; they sort with non-numbers.
            SortStyle::Numeric if value.is_empty() => SortKey::Number(None),
            SortStyle::Numeric => SortKey::Number(Number::convert(value, resolver).ok()),
            SortStyle::DateTime => SortKey::Date(NaiveDateTime::convert(value, resolver).ok()),
        })
    }

    fn compare(&self, other: &SortKey, direction: SortDirection) -> Ordering {
        match (self, other) {
            (
                SortKey::Text { folded, exact },
                SortKey::Text {
                    folded: other_folded,
                    exact: other_exact,
                },
            ) => direction.apply(folded.cmp(other_folded).then_with(|| exact.cmp(other_exact))),
            (SortKey::Number(a), SortKey::Number(b)) => missing_last(a.as_ref(), b.as_ref(), direction),
            (SortKey::Date(a), SortKey::Date(b)) => missing_last(a.as_ref(), b.as_ref(), direction),
            _ => Ordering::Equal,
        }
    }
}

/// Present keys in `direction`, then missing ones in their original order.
fn missing_last<T: Ord>(a: Option<&T>, b: Option<&T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl VariableStore {
    /// Sort the chunks of `name` by `style`. The sort is stable.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sort(&mut self, name: &str, style: SortStyle, direction: SortDirection) -> ValueResult<()> {
        self.rearrange(name, |resolver, chunks| {
            let mut keyed = Vec::with_capacity(chunks.len());
            for chunk in chunks.drain(..) {
                keyed.push((SortKey::of(style, &chunk, resolver)?, chunk));
            }
            keyed.sort_by(|(a, _), (b, _)| a.compare(b, direction));
            chunks.extend(keyed.into_iter().map(|(_, chunk)| chunk));
            Ok(())
        })
    }
}
