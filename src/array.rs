//! Array store: the array-list semantics with a fixed initial capacity.
//!
//! Operation-for-operation this behaves exactly like
//! [`ArrayListStore`](crate::ArrayListStore); the only difference is that
//! [`create`](ArrayStore::create) takes no size and every container starts
//! at the default capacity.

use crate::cursor::{Cursor, Sequence};
use crate::registry::{Error, Handle};
use crate::ArrayListStore;

pub struct ArrayStore<T> {
    inner: ArrayListStore<T>,
}

impl<T> ArrayStore<T> {
    pub fn new() -> Self {
        Self {
            inner: ArrayListStore::new(),
        }
    }

    /// Allocate a container at the default capacity. The array kind never
    /// takes a caller-supplied size.
    pub fn create(&mut self) -> Result<Handle, Error> {
        self.inner.create()
    }

    pub fn purge(&mut self, handle: Handle) -> Result<(), Error> {
        self.inner.purge(handle)
    }

    pub fn dispose(&mut self, handle: Handle) -> Result<(), Error> {
        self.inner.dispose(handle)
    }

    pub fn push(&mut self, handle: Handle, value: T) -> Result<&T, Error> {
        self.inner.push(handle, value)
    }

    pub fn get(&self, handle: Handle, index: usize) -> Result<Option<&T>, Error> {
        self.inner.get(handle, index)
    }

    pub fn insert(&mut self, handle: Handle, index: usize, value: T) -> Result<Option<&T>, Error> {
        self.inner.insert(handle, index, value)
    }

    pub fn remove(&mut self, handle: Handle, index: usize) -> Result<Option<T>, Error> {
        self.inner.remove(handle, index)
    }

    pub fn len(&self, handle: Handle) -> Result<usize, Error> {
        self.inner.len(handle)
    }

    pub fn is_empty(&self, handle: Handle) -> Result<bool, Error> {
        self.inner.is_empty(handle)
    }

    pub fn capacity(&self, handle: Handle) -> Result<usize, Error> {
        self.inner.capacity(handle)
    }

    pub fn as_slice(&self, handle: Handle) -> Result<&[T], Error> {
        self.inner.as_slice(handle)
    }

    pub fn iter(&self, handle: Handle) -> Result<core::slice::Iter<'_, T>, Error> {
        self.inner.iter(handle)
    }

    pub fn cursor(&self, handle: Handle) -> Result<Cursor, Error> {
        self.inner.cursor(handle)
    }

    pub fn live(&self) -> usize {
        self.inner.live()
    }
}

impl<T> Default for ArrayStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for ArrayStore<T> {
    fn size(&self, handle: Handle) -> Result<usize, Error> {
        self.len(handle)
    }

    fn element(&self, handle: Handle, index: usize) -> Result<Option<&T>, Error> {
        self.get(handle, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DEFAULT_CAPACITY;

    /// Invariant: containers start at the default capacity.
    #[test]
    fn create_uses_default_capacity() {
        let mut s: ArrayStore<u32> = ArrayStore::new();
        let h = s.create().unwrap();
        assert_eq!(s.capacity(h).unwrap(), DEFAULT_CAPACITY);
        assert!(s.is_empty(h).unwrap());
    }

    /// Invariant: the array kind shares the array-list operation semantics.
    #[test]
    fn operations_match_array_list_semantics() {
        let mut s: ArrayStore<i32> = ArrayStore::new();
        let h = s.create().unwrap();
        s.push(h, 1).unwrap();
        s.push(h, 3).unwrap();
        s.insert(h, 1, 2).unwrap();
        assert_eq!(s.as_slice(h).unwrap(), &[1, 2, 3]);
        assert_eq!(s.remove(h, 0).unwrap(), Some(1));
        assert_eq!(s.as_slice(h).unwrap(), &[2, 3]);
    }
}
