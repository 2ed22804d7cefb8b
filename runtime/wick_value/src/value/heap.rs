//! Shared immutable storage for heap-backed values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted payload of a heap value.
///
/// The constructor is crate-private: outside code builds heap values
/// through the `Value` factory methods (`Value::text`, `Value::list`, ...).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: Clone> Heap<T> {
    /// Mutable access, cloning the payload first if it is shared.
    #[inline]
    pub(crate) fn make_mut(&mut self) -> &mut T {
        Arc::make_mut(&mut self.0)
    }

    /// The payload, cloned only if it is shared.
    pub fn into_inner(self) -> T {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Heap<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_allocation() {
        let first = Heap::new(vec![1, 2, 3]);
        let second = first.clone();
        assert!(Arc::ptr_eq(&first.0, &second.0));
        assert_eq!(*first, *second);
    }

    #[test]
    fn make_mut_detaches_shared_payload() {
        let first = Heap::new("a".to_string());
        let mut second = first.clone();
        second.make_mut().push('b');
        assert_eq!(first.as_str(), "a");
        assert_eq!(second.as_str(), "ab");
    }

    #[test]
    fn into_inner_avoids_clone_when_unique() {
        let heap = Heap::new(vec![7]);
        assert_eq!(heap.into_inner(), vec![7]);
    }
}
