//! Assignable locations: named variables and chunks of other values.
//!
//! A container owns nothing. `Variable` names a slot in a [`Store`];
//! `Chunk` pairs a parent value with an [`Address`] and reads or writes
//! through to that parent. Writing a chunk computes the parent's new value
//! and puts it back into the parent, which must itself be a container:
//!
//! ```text
//! put "x" into item 2 of line 3 of v
//!   -> new line 3  = splice(line 3 of v, item 2, "x")
//!   -> new v       = splice(v, line 3, new line 3)
//!   -> assign v
//! ```

use std::cell::Cell;
use std::fmt;
use std::ops::Range;

use wick_chunk::{ChunkKind, ChunkSpec, Preposition, Segmenter};

use crate::coerce::Coerce;
use crate::config::Resolver;
use crate::dictionary::Dictionary;
use crate::error::{container_cycle, not_addressable, read_only_chunk, ValueResult};
use crate::stack::ensure_sufficient_stack;
use crate::value::{Heap, Value, MAX_CONTAINER_DEPTH};

thread_local! {
    /// Containers whose content is in use by an unfinished operation on
    /// this thread.
    static RESOLVING: Cell<usize> = const { Cell::new(0) };
}

/// Held while an operation works on what a container addresses.
///
/// A container that reaches itself again through a chunk parent, a list
/// element or a dictionary entry re-enters before the first guard drops,
/// so nesting deeper than [`MAX_CONTAINER_DEPTH`] is reported as a cycle
/// instead of recursing until the stack is exhausted.
pub(crate) struct ResolveGuard(());

impl ResolveGuard {
    pub(crate) fn enter() -> ValueResult<Self> {
        RESOLVING.with(|depth| {
            let current = depth.get();
            if current >= MAX_CONTAINER_DEPTH {
                tracing::warn!(
                    limit = MAX_CONTAINER_DEPTH,
                    "container references did not resolve; probable cycle"
                );
                return Err(container_cycle(MAX_CONTAINER_DEPTH));
            }
            depth.set(current + 1);
            Ok(ResolveGuard(()))
        })
    }

    /// A guard when `value` is a container, nothing for plain values.
    pub(crate) fn for_value(value: &Value) -> ValueResult<Option<Self>> {
        match value {
            Value::Container(_) => ResolveGuard::enter().map(Some),
            _ => Ok(None),
        }
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        RESOLVING.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// What part of the parent a chunk reference names.
#[derive(Clone, Debug, PartialEq)]
pub enum Address {
    /// `word 2`, `item 3 to 5`, `last line`, ...
    Chunk(ChunkSpec),
    /// A dictionary entry.
    Key(String),
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Chunk(spec) => write!(f, "{spec}"),
            Address::Key(key) => write!(f, "entry \"{key}\""),
        }
    }
}

impl From<ChunkSpec> for Address {
    fn from(spec: ChunkSpec) -> Self {
        Address::Chunk(spec)
    }
}

/// "Part `address` of `parent`".
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkRef {
    pub parent: Value,
    pub address: Address,
}

/// An assignable location.
#[derive(Clone, Debug, PartialEq)]
pub enum Container {
    Variable(String),
    Chunk(Heap<ChunkRef>),
}

/// Mutable variable storage that container writes land in.
pub trait Store: Resolver {
    fn as_resolver(&self) -> &dyn Resolver;

    /// Write `value` into, before or after the variable `name`, coercing
    /// to its declared kind.
    fn assign_with(&mut self, name: &str, value: Value, preposition: Preposition)
        -> ValueResult<()>;
}

impl Container {
    /// Current value at this location.
    ///
    /// An undeclared variable reads as its own name, so unquoted words in
    /// scripts behave as literals.
    pub fn read(&self, resolver: &dyn Resolver) -> ValueResult<Value> {
        match self {
            Container::Variable(name) => {
                Ok(resolver.variable(name).unwrap_or_else(|| Value::text(name.as_str())))
            }
            Container::Chunk(chunk) => chunk.read(resolver),
        }
    }

    /// Write `value` at this location.
    pub fn put(&self, value: Value, preposition: Preposition, store: &mut dyn Store) -> ValueResult<()> {
        match self {
            Container::Variable(name) => store.assign_with(name, value, preposition),
            Container::Chunk(chunk) => {
                let updated = chunk.with_written(value, preposition, store.as_resolver())?;
                chunk.write_back(updated, store)
            }
        }
    }

    /// Remove what this location addresses. A variable is emptied.
    pub fn delete(&self, store: &mut dyn Store) -> ValueResult<()> {
        match self {
            Container::Variable(name) => store.assign_with(name, Value::Empty, Preposition::Into),
            Container::Chunk(chunk) => {
                let updated = chunk.with_deleted(store.as_resolver())?;
                chunk.write_back(updated, store)
            }
        }
    }
}

impl ChunkRef {
    fn read(&self, resolver: &dyn Resolver) -> ValueResult<Value> {
        let _guard = ResolveGuard::enter()?;
        ensure_sufficient_stack(|| {
            let parent = self.parent.as_primitive(resolver)?;
            match &self.address {
                Address::Key(key) => {
                    let dict = Dictionary::convert(&parent, resolver)?;
                    Ok(dict.get(key).cloned().unwrap_or_default())
                }
                Address::Chunk(spec) => read_chunk(parent, spec, resolver),
            }
        })
    }

    /// The parent's value for writing. An undeclared variable starts out
    /// empty here instead of reading as its name.
    fn current_parent(&self, resolver: &dyn Resolver) -> ValueResult<Value> {
        match &self.parent {
            Value::Container(Container::Variable(name)) => match resolver.variable(name) {
                Some(value) => value.as_primitive(resolver),
                None => Ok(Value::Empty),
            },
            other => other.as_primitive(resolver),
        }
    }

    /// The parent as it would be after writing `value`.
    fn with_written(
        &self,
        value: Value,
        preposition: Preposition,
        resolver: &dyn Resolver,
    ) -> ValueResult<Value> {
        let _guard = ResolveGuard::enter()?;
        ensure_sufficient_stack(|| {
            let parent = self.current_parent(resolver)?;
            let delimiters = &resolver.config().delimiters;
            match &self.address {
                Address::Key(key) => {
                    let dict = Dictionary::convert(&parent, resolver)?;
                    let existing = dict.get(key).cloned().unwrap_or_default();
                    let entry = match preposition {
                        Preposition::Into => value.as_value(resolver)?,
                        Preposition::Before => Value::text(
                            value.to_text(resolver)? + &existing.to_text(resolver)?,
                        ),
                        Preposition::After => Value::text(
                            existing.to_text(resolver)? + &value.to_text(resolver)?,
                        ),
                    };
                    Ok(Value::Dictionary(dict.with(key.as_str(), entry)))
                }
                Address::Chunk(spec) => match parent {
                    Value::List(items) if addresses_elements(spec.kind) => {
                        let value = value.as_value(resolver)?;
                        Ok(Value::list(splice_elements(&items, spec, preposition, value)))
                    }
                    Value::Binary(bytes) => {
                        let replacement = Vec::<u8>::convert(&value, resolver)?;
                        let segmenter = Segmenter::new(bytes.as_slice(), spec.kind, delimiters);
                        Ok(Value::binary(segmenter.splice(spec, preposition, &replacement)))
                    }
                    Value::Dictionary(_) => Err(not_addressable(&spec.to_string(), "dictionary")),
                    other => {
                        let text = other.to_text(resolver)?;
                        let replacement = value.to_text(resolver)?;
                        Ok(Value::text(wick_chunk::text::put(
                            &text,
                            spec,
                            preposition,
                            &replacement,
                            delimiters,
                        )))
                    }
                },
            }
        })
    }

    /// The parent as it would be without the addressed part.
    fn with_deleted(&self, resolver: &dyn Resolver) -> ValueResult<Value> {
        let _guard = ResolveGuard::enter()?;
        let parent = self.current_parent(resolver)?;
        let delimiters = &resolver.config().delimiters;
        match &self.address {
            Address::Key(key) => {
                let dict = Dictionary::convert(&parent, resolver)?;
                Ok(Value::Dictionary(dict.without(key)))
            }
            Address::Chunk(spec) => match parent {
                Value::List(items) if addresses_elements(spec.kind) => {
                    let range = element_range(items.len(), spec);
                    let mut remaining = items.into_inner();
                    remaining.drain(range);
                    Ok(Value::list(remaining))
                }
                Value::Binary(bytes) => {
                    let segmenter = Segmenter::new(bytes.as_slice(), spec.kind, delimiters);
                    Ok(Value::binary(segmenter.delete(spec)))
                }
                Value::Dictionary(_) => Err(not_addressable(&spec.to_string(), "dictionary")),
                other => {
                    let text = other.to_text(resolver)?;
                    Ok(Value::text(wick_chunk::text::delete(&text, spec, delimiters)))
                }
            },
        }
    }

    fn write_back(&self, updated: Value, store: &mut dyn Store) -> ValueResult<()> {
        let target = self
            .parent
            .as_container(false)
            .map_err(|_| read_only_chunk(&self.address.to_string()))?;
        ensure_sufficient_stack(|| target.put(updated, Preposition::Into, store))
    }
}

fn read_chunk(parent: Value, spec: &ChunkSpec, resolver: &dyn Resolver) -> ValueResult<Value> {
    let delimiters = &resolver.config().delimiters;
    match parent {
        Value::List(items) if addresses_elements(spec.kind) => {
            Ok(match &items[element_range(items.len(), spec)] {
                [] => Value::Empty,
                [only] => only.clone(),
                several => Value::list(several.to_vec()),
            })
        }
        Value::Binary(bytes) => {
            let segmenter = Segmenter::new(bytes.as_slice(), spec.kind, delimiters);
            Ok(Value::binary(segmenter.extract(spec)))
        }
        Value::Dictionary(_) => Err(not_addressable(&spec.to_string(), "dictionary")),
        other => {
            let text = other.to_text(resolver)?;
            Ok(Value::text(wick_chunk::text::get(&text, spec, delimiters)))
        }
    }
}

/// Lists are divided into their elements by the chunk kinds that name
/// separated units; words, sentences and characters see the list's text.
fn addresses_elements(kind: ChunkKind) -> bool {
    matches!(
        kind,
        ChunkKind::Line | ChunkKind::Item | ChunkKind::Column | ChunkKind::Row
    )
}

/// 0-based element range for `spec`, clamped to `len`.
fn element_range(len: usize, spec: &ChunkSpec) -> Range<usize> {
    let (first, last) = spec.bounds(len);
    let first = usize::try_from(first.max(1)).unwrap_or(usize::MAX);
    let last = usize::try_from(last).unwrap_or(0).min(len);
    if first > len {
        len..len
    } else if last < first {
        first - 1..first - 1
    } else {
        first - 1..last
    }
}

/// `items` with `value` written at `spec`, padding with empty elements
/// when the address lies past the end.
fn splice_elements(
    items: &[Value],
    spec: &ChunkSpec,
    preposition: Preposition,
    value: Value,
) -> Vec<Value> {
    let (first, _) = spec.bounds(items.len());
    let first = usize::try_from(first.max(1)).unwrap_or(usize::MAX);
    if first > items.len() {
        let mut out = items.to_vec();
        out.resize(first - 1, Value::Empty);
        out.push(value);
        return out;
    }

    let range = element_range(items.len(), spec);
    let (cut_start, cut_end) = match preposition {
        Preposition::Into => (range.start, range.end),
        Preposition::Before => (range.start, range.start),
        Preposition::After => (range.end, range.end),
    };
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(&items[..cut_start]);
    out.push(value);
    out.extend_from_slice(&items[cut_end..]);
    out
}
