//! Wick Value - the runtime value core of the Wick scripting runtime.
//!
//! Scripts are untyped text on the surface; this crate gives every value a
//! kind and decides how kinds turn into one another:
//!
//! - `Value` is the closed sum type over every value kind, with the
//!   container capability contract (`as_value`, `as_primitive`,
//!   `as_container`, `to_text`, `to_variant_list`)
//! - `Coerce` and `convert_to` implement the Coercion Engine
//! - `Dictionary` is the ordered dictionary value and its textual grammar
//! - `Container` addresses variables, chunks and dictionary entries
//! - `VariableStore` holds named, typed, case-insensitive variables
//!
//! Numbers come from `wick_numeric` and chunk arithmetic from `wick_chunk`.

mod coerce;
mod config;
mod container;
mod dictionary;
mod error;
mod stack;
mod value;
mod variables;

pub use coerce::{
    can_convert_concat_to, can_convert_to, convert_concat_to, convert_to, Coerce, DATE_FORMATS,
};
pub use config::{LineEnding, Resolver, ValueConfig, DEFAULT_DATE_FORMAT};
pub use container::{Address, ChunkRef, Container, Store};
pub use dictionary::Dictionary;
pub use error::{
    access_failed, coercion_failed, container_cycle, not_a_container, not_addressable,
    read_only_chunk, undeclared_variable, unknown_kind, ValueError, ValueErrorKind, ValueResult,
};
pub use stack::ensure_sufficient_stack;
pub use value::{Heap, Value, ValueKind, MAX_CONTAINER_DEPTH};
pub use variables::{SortDirection, SortStyle, VariableStore, DEFAULT_KIND};

/// Dictionary text format.
pub mod grammar {
    pub use crate::dictionary::{parse, render, render_key};
}

pub use wick_chunk::{ChunkKind, ChunkSpec, Delimiters, Ordinal, Preposition};
pub use wick_numeric::{Decimal, Integer, Number, NumberFormat};
