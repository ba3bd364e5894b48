//! Array-list store: contiguous growable buffers behind handles.

use crate::cursor::{Cursor, Sequence};
use crate::registry::{exceeds_load, Backing, Error, Handle, Registry, DEFAULT_CAPACITY};

/// One contiguous container: a buffer of elements plus the capacity the
/// growth policy is tracked against.
pub(crate) struct BufSlot<T> {
    cap: usize,
    buf: Vec<T>,
}

impl<T> BufSlot<T> {
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, Error> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(cap)?;
        Ok(Self { cap, buf })
    }

    /// Apply the growth policy after a length increase: double the tracked
    /// capacity until occupancy is back under the load factor, then make
    /// the buffer at least that large.
    fn grow_past_load(&mut self) -> Result<(), Error> {
        if !exceeds_load(self.buf.len(), self.cap) {
            return Ok(());
        }
        while exceeds_load(self.buf.len(), self.cap) {
            self.cap = if self.cap == 0 { 1 } else { self.cap * 2 };
        }
        if self.cap > self.buf.capacity() {
            let additional = self.cap - self.buf.len();
            self.buf.try_reserve_exact(additional)?;
        }
        Ok(())
    }

    fn reserve_one(&mut self) -> Result<(), Error> {
        if self.buf.len() == self.buf.capacity() {
            self.buf.try_reserve(1)?;
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, value: T) -> Result<&T, Error> {
        self.reserve_one()?;
        self.buf.push(value);
        self.grow_past_load()?;
        Ok(self.buf.last().expect("push leaves a last element"))
    }

    /// Insert semantics: place `value` at `index`, shifting the rest right.
    /// `index == len` appends; anything past that inserts nothing.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<Option<&T>, Error> {
        if index > self.buf.len() {
            return Ok(None);
        }
        self.reserve_one()?;
        self.buf.insert(index, value);
        self.grow_past_load()?;
        Ok(Some(&self.buf[index]))
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.buf.len() {
            return None;
        }
        Some(self.buf.remove(index))
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.buf
    }
}

impl<T> Backing for BufSlot<T> {
    fn reset(&mut self) -> Result<(), Error> {
        // Shed any grown buffer and start over at the default capacity.
        let mut fresh = Vec::new();
        fresh.try_reserve_exact(DEFAULT_CAPACITY)?;
        self.buf = fresh;
        self.cap = DEFAULT_CAPACITY;
        Ok(())
    }
}

/// Store of contiguous containers whose initial capacity the caller picks.
///
/// Every operation takes the [`Handle`] returned by [`create`] as its first
/// argument; a handle whose container was disposed fails with
/// [`Error::InvalidHandle`]. Elements are never inspected or cloned by the
/// store. External synchronization is the caller's job in the usual Rust
/// sense: mutation requires `&mut self`.
///
/// [`create`]: ArrayListStore::create
pub struct ArrayListStore<T> {
    registry: Registry<BufSlot<T>>,
}

impl<T> ArrayListStore<T> {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Allocate a container with the default initial capacity.
    pub fn create(&mut self) -> Result<Handle, Error> {
        self.create_with_capacity(DEFAULT_CAPACITY)
    }

    /// Allocate a container whose buffer starts at `capacity` elements.
    pub fn create_with_capacity(&mut self, capacity: usize) -> Result<Handle, Error> {
        let slot = BufSlot::with_capacity(capacity)?;
        self.registry.allocate(slot)
    }

    /// Drop the container's contents and reallocate its buffer at the
    /// default capacity. The handle stays live.
    pub fn purge(&mut self, handle: Handle) -> Result<(), Error> {
        self.registry.reset(handle)
    }

    /// Drop the container and vacate its slot for reuse by a later
    /// [`create`](ArrayListStore::create).
    pub fn dispose(&mut self, handle: Handle) -> Result<(), Error> {
        self.registry.release(handle).map(drop)
    }

    /// Append `value` and return a reference to it in place.
    pub fn push(&mut self, handle: Handle, value: T) -> Result<&T, Error> {
        self.registry.slot_mut(handle)?.push(value)
    }

    /// Element at `index`, or `None` once `index` reaches the element
    /// count. Allocated-but-unused buffer space is never readable.
    pub fn get(&self, handle: Handle, index: usize) -> Result<Option<&T>, Error> {
        Ok(self.registry.slot(handle)?.get(index))
    }

    /// Insert `value` at `index`, shifting later elements right. `index ==
    /// len` appends; a larger index inserts nothing and returns `None`.
    pub fn insert(&mut self, handle: Handle, index: usize, value: T) -> Result<Option<&T>, Error> {
        self.registry.slot_mut(handle)?.insert(index, value)
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left. Out-of-range indices return `None`.
    pub fn remove(&mut self, handle: Handle, index: usize) -> Result<Option<T>, Error> {
        Ok(self.registry.slot_mut(handle)?.remove(index))
    }

    pub fn len(&self, handle: Handle) -> Result<usize, Error> {
        Ok(self.registry.slot(handle)?.len())
    }

    pub fn is_empty(&self, handle: Handle) -> Result<bool, Error> {
        Ok(self.registry.slot(handle)?.len() == 0)
    }

    /// Capacity currently tracked by the growth policy for this container.
    pub fn capacity(&self, handle: Handle) -> Result<usize, Error> {
        Ok(self.registry.slot(handle)?.capacity())
    }

    /// Direct view of the live backing buffer. The borrow ends before any
    /// mutating call can reallocate it.
    pub fn as_slice(&self, handle: Handle) -> Result<&[T], Error> {
        Ok(self.registry.slot(handle)?.as_slice())
    }

    pub fn iter(&self, handle: Handle) -> Result<core::slice::Iter<'_, T>, Error> {
        Ok(self.registry.slot(handle)?.as_slice().iter())
    }

    /// Detached bidirectional cursor starting at position zero.
    pub fn cursor(&self, handle: Handle) -> Result<Cursor, Error> {
        if !self.registry.contains(handle) {
            return Err(Error::InvalidHandle);
        }
        Ok(Cursor::bound(handle))
    }

    /// Number of live containers in this store.
    pub fn live(&self) -> usize {
        self.registry.live()
    }
}

impl<T> Default for ArrayListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for ArrayListStore<T> {
    fn size(&self, handle: Handle) -> Result<usize, Error> {
        self.len(handle)
    }

    fn element(&self, handle: Handle, index: usize) -> Result<Option<&T>, Error> {
        self.get(handle, index)
    }
}
