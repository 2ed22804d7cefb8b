//! Coercion Engine: turn any value into a requested kind, or fail.
//!
//! Each target type implements [`Coerce`] by supplying the per-kind steps;
//! the trait's provided methods run them in a fixed order:
//!
//! 1. resolve containers (`as_primitive`)
//! 2. a one-element list converts as its sole element, when that works
//! 3. a value already of the target kind is returned unchanged
//! 4. the empty value becomes the target's default, if it has one
//! 5. kind-specific structural conversion
//! 6. parse the value's text
//! 7. otherwise a coercion failure naming the target
//!
//! The two-operand form treats empty as an identity on both sides, merges
//! operands that already have the target kind where the target allows it,
//! and otherwise parses the concatenated text.

mod date;
mod numeric;
mod targets;

use chrono::NaiveDateTime;
use wick_numeric::{Decimal, Integer, Number};

use crate::config::Resolver;
use crate::container::ResolveGuard;
use crate::dictionary::Dictionary;
use crate::error::{coercion_failed, ValueError, ValueResult};
use crate::stack::ensure_sufficient_stack;
use crate::value::{Value, ValueKind};

pub use date::DATE_FORMATS;

/// A type values can be coerced to.
pub trait Coerce: Sized + Into<Value> {
    /// Kind named in coercion failures.
    const TARGET: ValueKind;

    /// Whether a one-element list converts as its element. Off for lists
    /// themselves, which must come back unchanged.
    const UNWRAP_SINGLETON: bool = true;

    /// The payload of a value that already has this kind.
    fn identity(value: &Value) -> Option<Self>;

    /// What the empty value converts to.
    fn empty_default() -> Option<Self> {
        None
    }

    /// Direct conversion from another primitive kind.
    fn structural(_value: &Value, _resolver: &dyn Resolver) -> Option<Self> {
        None
    }

    fn parse_text(text: &str, resolver: &dyn Resolver) -> Option<Self>;

    /// Combine two operands that both already have this kind.
    fn merge(_left: Self, _right: Self) -> Option<Self> {
        None
    }

    /// Combine two non-empty operands before falling back to their
    /// concatenated text.
    fn concat(_left: &Value, _right: &Value, _resolver: &dyn Resolver) -> ValueResult<Option<Self>> {
        Ok(None)
    }

    fn convert(value: &Value, resolver: &dyn Resolver) -> ValueResult<Self> {
        let _guard = ResolveGuard::for_value(value)?;
        ensure_sufficient_stack(|| {
            let value = value.as_primitive(resolver)?;

            if Self::UNWRAP_SINGLETON {
                if let Value::List(items) = &value {
                    if let [only] = items.as_slice() {
                        if let Ok(converted) = Self::convert(only, resolver) {
                            return Ok(converted);
                        }
                    }
                }
            }
            if let Some(same) = Self::identity(&value) {
                return Ok(same);
            }
            if value.is_empty() {
                if let Some(default) = Self::empty_default() {
                    return Ok(default);
                }
            }
            if let Some(converted) = Self::structural(&value, resolver) {
                return Ok(converted);
            }
            let text = value.to_text(resolver)?;
            Self::parse_text(&text, resolver).ok_or_else(|| failure::<Self>(&value))
        })
    }

    fn can_convert(value: &Value, resolver: &dyn Resolver) -> bool {
        Self::convert(value, resolver).is_ok()
    }

    /// Convert `left` and `right` as one operand.
    fn convert_concat(left: &Value, right: &Value, resolver: &dyn Resolver) -> ValueResult<Self> {
        ensure_sufficient_stack(|| {
            let left = left.as_primitive(resolver)?;
            let right = right.as_primitive(resolver)?;
            if left.is_empty() {
                return Self::convert(&right, resolver);
            }
            if right.is_empty() {
                return Self::convert(&left, resolver);
            }

            if let (Some(l), Some(r)) = (Self::identity(&left), Self::identity(&right)) {
                if let Some(merged) = Self::merge(l, r) {
                    return Ok(merged);
                }
            }
            if let Some(joined) = Self::concat(&left, &right, resolver)? {
                return Ok(joined);
            }
            let mut text = left.to_text(resolver)?;
            text.push_str(&right.to_text(resolver)?);
            Self::parse_text(&text, resolver).ok_or_else(|| failure::<Self>(&left))
        })
    }

    fn can_convert_concat(left: &Value, right: &Value, resolver: &dyn Resolver) -> bool {
        Self::convert_concat(left, right, resolver).is_ok()
    }
}

#[cold]
fn failure<T: Coerce>(from: &Value) -> ValueError {
    tracing::debug!(target_kind = %T::TARGET, from = %from.kind(), "coercion failed");
    coercion_failed(T::TARGET.name())
}

/// Convert `value` to `kind`, chosen at runtime.
///
/// `Number` yields an Integer or Decimal value. `Container` resolves text
/// naming a variable to that variable.
#[tracing::instrument(level = "trace", skip(value, resolver))]
pub fn convert_to(kind: ValueKind, value: &Value, resolver: &dyn Resolver) -> ValueResult<Value> {
    match kind {
        ValueKind::Empty => {
            if value.as_primitive(resolver)?.is_empty() {
                Ok(Value::Empty)
            } else {
                Err(coercion_failed(kind.name()))
            }
        }
        ValueKind::Text => String::convert(value, resolver).map(Value::from),
        ValueKind::Integer => Integer::convert(value, resolver).map(Value::from),
        ValueKind::Decimal => Decimal::convert(value, resolver).map(Value::from),
        ValueKind::Number => Number::convert(value, resolver).map(Value::from),
        ValueKind::Boolean => bool::convert(value, resolver).map(Value::from),
        ValueKind::Binary => Vec::<u8>::convert(value, resolver).map(Value::from),
        ValueKind::Dictionary => Dictionary::convert(value, resolver).map(Value::from),
        ValueKind::List => Vec::<Value>::convert(value, resolver).map(Value::from),
        ValueKind::Date => NaiveDateTime::convert(value, resolver).map(Value::from),
        ValueKind::Container => value
            .as_container(true)
            .map(Value::from)
            .map_err(|_| coercion_failed(kind.name())),
    }
}

pub fn can_convert_to(kind: ValueKind, value: &Value, resolver: &dyn Resolver) -> bool {
    convert_to(kind, value, resolver).is_ok()
}

/// Convert `left` and `right` as one operand to `kind`.
#[tracing::instrument(level = "trace", skip(left, right, resolver))]
pub fn convert_concat_to(
    kind: ValueKind,
    left: &Value,
    right: &Value,
    resolver: &dyn Resolver,
) -> ValueResult<Value> {
    match kind {
        ValueKind::Text => String::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Integer => Integer::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Decimal => Decimal::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Number => Number::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Boolean => bool::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Binary => Vec::<u8>::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Dictionary => {
            Dictionary::convert_concat(left, right, resolver).map(Value::from)
        }
        ValueKind::List => Vec::<Value>::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Date => NaiveDateTime::convert_concat(left, right, resolver).map(Value::from),
        ValueKind::Empty | ValueKind::Container => {
            if left.as_primitive(resolver)?.is_empty() {
                convert_to(kind, right, resolver)
            } else if right.as_primitive(resolver)?.is_empty() {
                convert_to(kind, left, resolver)
            } else {
                Err(coercion_failed(kind.name()))
            }
        }
    }
}

pub fn can_convert_concat_to(
    kind: ValueKind,
    left: &Value,
    right: &Value,
    resolver: &dyn Resolver,
) -> bool {
    convert_concat_to(kind, left, right, resolver).is_ok()
}
