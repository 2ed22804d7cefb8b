//! Ordered, string-keyed dictionary values.
//!
//! Keys are case-sensitive and keep insertion order. A dictionary is
//! immutable once built: `with`, `without` and `merge` return new
//! dictionaries and share storage with the original until they diverge.

mod grammar;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::config::Resolver;
use crate::error::ValueResult;
use crate::value::{Heap, Value};

pub use grammar::{parse, render, render_key};

type Entries = IndexMap<String, Value, FxBuildHasher>;

/// Ordered key to value mapping. Values may themselves be dictionaries.
///
/// Equality compares entries regardless of order.
#[derive(Clone, PartialEq, Default)]
pub struct Dictionary(Heap<Entries>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut map = Entries::default();
        for (key, value) in entries {
            map.insert(key.into(), value);
        }
        Dictionary(Heap::new(map))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// A copy with `key` set. An existing key keeps its position.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: Value) -> Dictionary {
        let mut next = self.clone();
        next.0.make_mut().insert(key.into(), value);
        next
    }

    /// A copy without `key`; the remaining entries keep their order.
    #[must_use]
    pub fn without(&self, key: &str) -> Dictionary {
        if !self.contains_key(key) {
            return self.clone();
        }
        let mut next = self.clone();
        next.0.make_mut().shift_remove(key);
        next
    }

    /// Key-wise merge. Entries of `other` override ours on collision; new
    /// keys are appended in `other`'s order.
    #[must_use]
    pub fn merge(&self, other: &Dictionary) -> Dictionary {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut next = self.clone();
        let entries = next.0.make_mut();
        for (key, value) in other.0.iter() {
            entries.insert(key.clone(), value.clone());
        }
        next
    }

    /// Textual form; see [`render`].
    pub fn render(&self, resolver: &dyn Resolver) -> ValueResult<String> {
        render(self, resolver)
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Dictionary::from_entries(iter)
    }
}
