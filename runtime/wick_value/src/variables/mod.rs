//! Variable Store: named, typed, case-insensitive slots in nested scopes.
//!
//! Every write goes through the Coercion Engine. `set` converts the
//! incoming value to the slot's declared kind; `prepend` and `append` use
//! the two-operand form so the old and new values are read as one operand.
//!
//! The store is single-owner: it takes `&mut self` for every mutation and
//! provides no internal synchronization.

mod sort;

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use wick_chunk::{ChunkKind, Preposition};

use crate::coerce::{convert_concat_to, convert_to, Coerce};
use crate::config::{Resolver, ValueConfig};
use crate::container::Store;
use crate::error::{undeclared_variable, ValueResult};
use crate::value::{Value, ValueKind};

pub use sort::{SortDirection, SortStyle};

/// Kind given to variables that are assigned without being declared.
pub const DEFAULT_KIND: ValueKind = ValueKind::Text;

#[derive(Clone, Debug)]
struct Slot {
    /// Name as first declared, for diagnostics.
    name: String,
    kind: ValueKind,
    value: Value,
}

type Scope = FxHashMap<String, Slot>;

/// Lookup key: names that differ only in case share a slot.
fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Scoped variable storage.
///
/// The outermost (global) scope always exists. Lookups search from the
/// innermost scope outwards.
#[derive(Clone, Debug)]
pub struct VariableStore {
    scopes: Vec<Scope>,
    config: ValueConfig,
}

impl Default for VariableStore {
    fn default() -> Self {
        VariableStore::new()
    }
}

impl VariableStore {
    pub fn new() -> Self {
        VariableStore::with_config(ValueConfig::default())
    }

    pub fn with_config(config: ValueConfig) -> Self {
        VariableStore {
            scopes: vec![Scope::default()],
            config,
        }
    }

    pub fn config(&self) -> &ValueConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ValueConfig {
        &mut self.config
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Drop the innermost scope and its variables. The global scope is
    /// never dropped; returns `false` when only it remains.
    pub fn pop_scope(&mut self) -> bool {
        if self.scopes.len() == 1 {
            return false;
        }
        self.scopes.pop();
        true
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    fn slot(&self, name: &str) -> Option<&Slot> {
        let key = fold(name);
        self.scopes.iter().rev().find_map(|scope| scope.get(&key))
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Slot> {
        let key = fold(name);
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(&key))
    }

    fn innermost(&mut self) -> &mut Scope {
        if self.scopes.is_empty() {
            self.scopes.push(Scope::default());
        }
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Declare `name` in the innermost scope, replacing any declaration
    /// there. `kind` defaults to text. The initial value is coerced to the
    /// kind; without one the slot holds the kind's empty default, or empty
    /// when the kind has none.
    pub fn declare(
        &mut self,
        name: &str,
        kind: Option<ValueKind>,
        initial: Option<Value>,
    ) -> ValueResult<()> {
        let kind = kind.unwrap_or(DEFAULT_KIND);
        let value = match initial {
            Some(initial) => convert_to(kind, &initial, &*self)?,
            None => convert_to(kind, &Value::Empty, &*self).unwrap_or_default(),
        };
        tracing::trace!(name, %kind, "declare variable");
        self.innermost().insert(
            fold(name),
            Slot {
                name: name.to_string(),
                kind,
                value,
            },
        );
        Ok(())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.slot(name).is_some()
    }

    /// Current value, `None` when undeclared.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.slot(name).map(|slot| slot.value.clone())
    }

    /// Current value, or the name itself as text when undeclared.
    pub fn contents(&self, name: &str) -> Value {
        self.get(name).unwrap_or_else(|| Value::text(name))
    }

    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.slot(name).map(|slot| slot.kind)
    }

    /// The name as it was declared.
    pub fn declared_name(&self, name: &str) -> Option<&str> {
        self.slot(name).map(|slot| slot.name.as_str())
    }

    /// Remove the innermost declaration of `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let key = fold(name);
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.remove(&key))
            .map(|slot| slot.value)
    }

    /// Store `value`, coerced to the declared kind. Undeclared names are
    /// declared as text in the innermost scope.
    #[tracing::instrument(level = "debug", skip(self, value))]
    pub fn set(&mut self, name: &str, value: Value) -> ValueResult<()> {
        let kind = self.kind_of(name).unwrap_or(DEFAULT_KIND);
        let coerced = convert_to(kind, &value, &*self)?;
        self.store(name, kind, coerced);
        Ok(())
    }

    /// Store `value` ahead of the current contents.
    pub fn prepend(&mut self, name: &str, value: Value) -> ValueResult<()> {
        let kind = self.kind_of(name).unwrap_or(DEFAULT_KIND);
        let current = self.get(name).unwrap_or_default();
        let combined = convert_concat_to(kind, &value, &current, &*self)?;
        self.store(name, kind, combined);
        Ok(())
    }

    /// Store `value` after the current contents.
    pub fn append(&mut self, name: &str, value: Value) -> ValueResult<()> {
        let kind = self.kind_of(name).unwrap_or(DEFAULT_KIND);
        let current = self.get(name).unwrap_or_default();
        let combined = convert_concat_to(kind, &current, &value, &*self)?;
        self.store(name, kind, combined);
        Ok(())
    }

    fn store(&mut self, name: &str, kind: ValueKind, value: Value) {
        match self.slot_mut(name) {
            Some(slot) => slot.value = value,
            None => {
                self.innermost().insert(
                    fold(name),
                    Slot {
                        name: name.to_string(),
                        kind,
                        value,
                    },
                );
            }
        }
    }

    /// Sort the chunks of a variable's value with `compare`.
    ///
    /// Lists sort their elements, binary values their bytes, and anything
    /// else the lines of its text. The result is reassembled (text lines
    /// joined with the configured line ending) and stored with `set`.
    #[tracing::instrument(level = "debug", skip(self, compare))]
    pub fn sort_by<F>(&mut self, name: &str, mut compare: F) -> ValueResult<()>
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.rearrange(name, |_, chunks| {
            chunks.sort_by(|a, b| compare(a, b));
            Ok(())
        })
    }

    /// Decompose the value of `name`, let `arrange` reorder the chunks
    /// while the store is still readable, then reassemble and store.
    fn rearrange<F>(&mut self, name: &str, arrange: F) -> ValueResult<()>
    where
        F: FnOnce(&dyn Resolver, &mut Vec<Value>) -> ValueResult<()>,
    {
        let current = self
            .get(name)
            .ok_or_else(|| undeclared_variable(name))?
            .as_primitive(&*self)?;
        let (mut chunks, shape) = Shape::decompose(current, &*self)?;
        arrange(&*self, &mut chunks)?;
        let sorted = shape.reassemble(chunks, &*self)?;
        self.set(name, sorted)
    }
}

/// How a sorted value was divided, and so how it is put back together.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Shape {
    List,
    Binary,
    Lines,
}

impl Shape {
    fn decompose(value: Value, resolver: &dyn Resolver) -> ValueResult<(Vec<Value>, Shape)> {
        Ok(match value {
            Value::List(items) => (items.into_inner(), Shape::List),
            Value::Binary(bytes) => (
                bytes.iter().map(|byte| Value::binary(vec![*byte])).collect(),
                Shape::Binary,
            ),
            other => {
                let text = other.to_text(resolver)?;
                let lines =
                    wick_chunk::text::split(&text, ChunkKind::Line, &resolver.config().delimiters);
                (lines.into_iter().map(Value::text).collect(), Shape::Lines)
            }
        })
    }

    fn reassemble(self, chunks: Vec<Value>, resolver: &dyn Resolver) -> ValueResult<Value> {
        match self {
            Shape::List => Ok(Value::list(chunks)),
            Shape::Binary => {
                let mut bytes = Vec::with_capacity(chunks.len());
                for chunk in &chunks {
                    bytes.extend(Vec::<u8>::convert(chunk, resolver)?);
                }
                Ok(Value::binary(bytes))
            }
            Shape::Lines => {
                let separator = resolver.config().line_ending.as_str();
                let mut text = String::new();
                for (i, chunk) in chunks.iter().enumerate() {
                    if i > 0 {
                        text.push_str(separator);
                    }
                    text.push_str(&chunk.to_text(resolver)?);
                }
                Ok(Value::text(text))
            }
        }
    }
}

impl Resolver for VariableStore {
    fn config(&self) -> &ValueConfig {
        &self.config
    }

    fn variable(&self, name: &str) -> Option<Value> {
        self.get(name)
    }
}

impl Store for VariableStore {
    fn as_resolver(&self) -> &dyn Resolver {
        self
    }

    fn assign_with(&mut self, name: &str, value: Value, preposition: Preposition) -> ValueResult<()> {
        match preposition {
            Preposition::Into => self.set(name, value),
            Preposition::Before => self.prepend(name, value),
            Preposition::After => self.append(name, value),
        }
    }
}

#[cfg(test)]
mod tests;
