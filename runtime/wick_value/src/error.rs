//! Errors surfaced by the value core.
//!
//! `ValueErrorKind` gives the structured category; factory functions
//! (`coercion_failed()`, `access_failed()`, ...) are the public way to build
//! a `ValueError` and fill in both `kind` and `message`.

use thiserror::Error;

/// Result of a value-core operation.
pub type ValueResult<T> = Result<T, ValueError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueErrorKind {
    /// No conversion path produced the requested kind.
    #[error("cannot convert value to {target}")]
    CoercionFailed { target: String },

    /// The value or variable does not support the operation.
    #[error("{operation}")]
    AccessFailed { operation: String },

    #[error("unknown value kind '{name}'")]
    UnknownKind { name: String },
}

/// Error raised by coercion, container access and variable operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValueError {
    pub kind: ValueErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl ValueError {
    fn from_kind(kind: ValueErrorKind) -> Self {
        let message = kind.to_string();
        ValueError { kind, message }
    }

    pub fn is_coercion_failure(&self) -> bool {
        matches!(self.kind, ValueErrorKind::CoercionFailed { .. })
    }

    pub fn is_access_failure(&self) -> bool {
        matches!(self.kind, ValueErrorKind::AccessFailed { .. })
    }
}

// Coercion

/// The value cannot be converted to `target`.
#[cold]
pub fn coercion_failed(target: &str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::CoercionFailed {
        target: target.to_string(),
    })
}

#[cold]
pub fn unknown_kind(name: &str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::UnknownKind {
        name: name.to_string(),
    })
}

// Access

/// Generic unsupported operation.
#[cold]
pub fn access_failed(operation: impl Into<String>) -> ValueError {
    ValueError::from_kind(ValueErrorKind::AccessFailed {
        operation: operation.into(),
    })
}

/// A value was used where an assignable location is required.
#[cold]
pub fn not_a_container(description: &str) -> ValueError {
    access_failed(format!("{description} is not a container"))
}

#[cold]
pub fn undeclared_variable(name: &str) -> ValueError {
    access_failed(format!("variable '{name}' is not declared"))
}

/// Container references nest deeper than `limit`, usually because a
/// variable refers back to itself.
#[cold]
pub fn container_cycle(limit: usize) -> ValueError {
    access_failed(format!(
        "container references nest deeper than {limit} levels"
    ))
}

/// The chunk kind has no addressing semantics for this value.
#[cold]
pub fn not_addressable(chunk: &str, kind: &str) -> ValueError {
    access_failed(format!("cannot address {chunk} of a {kind} value"))
}

/// A chunk write whose parent cannot be written back.
#[cold]
pub fn read_only_chunk(address: &str) -> ValueError {
    access_failed(format!(
        "cannot write {address}: its parent is not a container"
    ))
}
