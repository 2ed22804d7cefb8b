//! The Variant: one closed sum type over every script value kind.
//!
//! Heap-backed payloads (`Text`, `Binary`, `List`) are wrapped in [`Heap`],
//! whose constructor is crate-private, so they are always built through the
//! factory methods here:
//!
//! ```text
//! let s = Value::text("hello");             // OK
//! let l = Value::list(vec![Value::Empty]);  // OK
//! let s = Value::Text(Heap::new(...));      // ERROR: Heap::new is pub(crate)
//! ```
//!
//! The capability contract (`as_value`, `as_primitive`, `as_container`,
//! `to_text`, `to_variant_list`) takes a [`Resolver`] because reading a
//! container may consult variables and rendering consults the settings.

mod heap;
mod kind;

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use wick_numeric::{Decimal, Integer, Number};

use crate::config::{Resolver, DEFAULT_DATE_FORMAT};
use crate::container::{Address, ChunkRef, Container, ResolveGuard};
use crate::dictionary::Dictionary;
use crate::error::{container_cycle, not_a_container, ValueResult};

pub use heap::Heap;
pub use kind::ValueKind;

/// Container references resolved before giving up on a cycle.
pub const MAX_CONTAINER_DEPTH: usize = 64;

/// Runtime value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The canonical empty value; identity for concatenation.
    #[default]
    Empty,
    Text(Heap<String>),
    Integer(Integer),
    Decimal(Decimal),
    Boolean(bool),
    Binary(Heap<Vec<u8>>),
    Dictionary(Dictionary),
    List(Heap<Vec<Value>>),
    Date(NaiveDateTime),
    /// An assignable location: a variable or a chunk of another value.
    Container(Container),
}

// Factory methods

impl Value {
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(Heap::new(s.into()))
    }

    #[inline]
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Binary(Heap::new(bytes.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn integer(n: impl Into<Integer>) -> Self {
        Value::Integer(n.into())
    }

    /// Reference to a named variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Value::Container(Container::Variable(name.into()))
    }

    /// Reference to part of `parent`.
    pub fn chunk(parent: Value, address: Address) -> Self {
        Value::Container(Container::Chunk(Heap::new(ChunkRef { parent, address })))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(Integer::from(n))
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Value::Integer(n)
    }
}

impl From<Decimal> for Value {
    fn from(n: Decimal) -> Self {
        Value::Decimal(n)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(n) => Value::Integer(n),
            Number::Decimal(n) => Value::Decimal(n),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::binary(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<Dictionary> for Value {
    fn from(dict: Dictionary) -> Self {
        Value::Dictionary(dict)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(date: NaiveDateTime) -> Self {
        Value::Date(date)
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        Value::Container(container)
    }
}

// Queries

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Empty => ValueKind::Empty,
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Binary(_) => ValueKind::Binary,
            Value::Dictionary(_) => ValueKind::Dictionary,
            Value::List(_) => ValueKind::List,
            Value::Date(_) => ValueKind::Date,
            Value::Container(_) => ValueKind::Container,
        }
    }

    /// `Empty` or empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

// Variant capability contract

impl Value {
    /// Strip container semantics: a container yields what it addresses,
    /// anything else itself.
    pub fn as_value(&self, resolver: &dyn Resolver) -> ValueResult<Value> {
        match self {
            Value::Container(container) => container.read(resolver),
            other => Ok(other.clone()),
        }
    }

    /// Resolve containers until a plain value is reached.
    pub fn as_primitive(&self, resolver: &dyn Resolver) -> ValueResult<Value> {
        let mut current = self.clone();
        for _ in 0..MAX_CONTAINER_DEPTH {
            match current {
                Value::Container(container) => current = container.read(resolver)?,
                plain => return Ok(plain),
            }
        }
        tracing::warn!(
            limit = MAX_CONTAINER_DEPTH,
            "container references did not resolve; probable cycle"
        );
        Err(container_cycle(MAX_CONTAINER_DEPTH))
    }

    /// This value as an assignable location. Text that looks like a
    /// variable name becomes a variable reference when
    /// `allow_name_resolution` is set.
    pub fn as_container(&self, allow_name_resolution: bool) -> ValueResult<Container> {
        match self {
            Value::Container(container) => Ok(container.clone()),
            Value::Text(name) if allow_name_resolution && is_identifier(name) => {
                Ok(Container::Variable(name.to_string()))
            }
            Value::Text(text) => Err(not_a_container(&format!("text \"{}\"", text.as_str()))),
            other => Err(not_a_container(&format!("a {} value", other.kind()))),
        }
    }

    /// Language-level text of the value.
    pub fn to_text(&self, resolver: &dyn Resolver) -> ValueResult<String> {
        let _guard = ResolveGuard::for_value(self)?;
        let config = resolver.config();
        Ok(match self.as_primitive(resolver)? {
            Value::Empty => String::new(),
            Value::Text(s) => s.into_inner(),
            Value::Integer(n) => config.number_format.format_integer(&n),
            Value::Decimal(n) => config.number_format.format_decimal(&n),
            Value::Boolean(b) => b.to_string(),
            Value::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Value::Dictionary(dict) => dict.render(resolver)?,
            Value::List(items) => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(config.delimiters.item);
                    }
                    out.push_str(&item.to_text(resolver)?);
                }
                out
            }
            Value::Date(date) => format_date(&date, &config.date_format),
            // as_primitive never returns a container
            Value::Container(_) => String::new(),
        })
    }

    /// Elements of a list, or the value alone in a one-element list.
    pub fn to_variant_list(&self, resolver: &dyn Resolver) -> ValueResult<Vec<Value>> {
        Ok(match self.as_primitive(resolver)? {
            Value::List(items) => items.into_inner(),
            other => vec![other],
        })
    }
}

/// Render `date` with `pattern`, falling back to the default pattern when
/// `pattern` is not valid strftime.
pub(crate) fn format_date(date: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    out
}

/// Letters, digits and underscores, not starting with a digit.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
