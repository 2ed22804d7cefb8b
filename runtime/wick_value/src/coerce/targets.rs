//! Text, boolean, binary, dictionary and list targets.

use super::Coerce;
use crate::config::Resolver;
use crate::dictionary::{self, Dictionary};
use crate::error::ValueResult;
use crate::value::{Value, ValueKind};

impl Coerce for String {
    const TARGET: ValueKind = ValueKind::Text;

    fn identity(value: &Value) -> Option<Self> {
        value.as_text().map(str::to_string)
    }

    fn empty_default() -> Option<Self> {
        Some(String::new())
    }

    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        Some(text.to_string())
    }

    fn merge(mut left: Self, right: Self) -> Option<Self> {
        left.push_str(&right);
        Some(left)
    }
}

impl Coerce for bool {
    const TARGET: ValueKind = ValueKind::Boolean;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl Coerce for Vec<u8> {
    const TARGET: ValueKind = ValueKind::Binary;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::Binary(bytes) => Some(bytes.to_vec()),
            _ => None,
        }
    }

    fn empty_default() -> Option<Self> {
        Some(Vec::new())
    }

    /// UTF-8 bytes of the text.
    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        Some(text.as_bytes().to_vec())
    }

    fn merge(mut left: Self, right: Self) -> Option<Self> {
        left.extend_from_slice(&right);
        Some(left)
    }

    /// Byte concatenation, so binary operands are not re-read as text.
    fn concat(left: &Value, right: &Value, resolver: &dyn Resolver) -> ValueResult<Option<Self>> {
        let mut bytes = Vec::<u8>::convert(left, resolver)?;
        bytes.extend(Vec::<u8>::convert(right, resolver)?);
        Ok(Some(bytes))
    }
}

impl Coerce for Dictionary {
    const TARGET: ValueKind = ValueKind::Dictionary;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::Dictionary(dict) => Some(dict.clone()),
            _ => None,
        }
    }

    fn empty_default() -> Option<Self> {
        Some(Dictionary::new())
    }

    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        dictionary::parse(text)
    }

    /// Key-wise; the right operand wins on collision.
    fn merge(left: Self, right: Self) -> Option<Self> {
        Some(left.merge(&right))
    }
}

impl Coerce for Vec<Value> {
    const TARGET: ValueKind = ValueKind::List;
    const UNWRAP_SINGLETON: bool = false;

    fn identity(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => Some(items.to_vec()),
            _ => None,
        }
    }

    fn empty_default() -> Option<Self> {
        Some(Vec::new())
    }

    /// Any other value becomes a one-element list.
    fn structural(value: &Value, _resolver: &dyn Resolver) -> Option<Self> {
        Some(vec![value.clone()])
    }

    fn parse_text(text: &str, _resolver: &dyn Resolver) -> Option<Self> {
        Some(vec![Value::text(text)])
    }

    fn merge(mut left: Self, right: Self) -> Option<Self> {
        left.extend(right);
        Some(left)
    }

    fn concat(left: &Value, right: &Value, resolver: &dyn Resolver) -> ValueResult<Option<Self>> {
        let mut items = left.to_variant_list(resolver)?;
        items.extend(right.to_variant_list(resolver)?);
        Ok(Some(items))
    }
}
