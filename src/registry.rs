//! Slot registry: handle allocation, first-free reuse, and table growth.
//!
//! Every store owns one registry. The registry is a growable table of
//! optional slots; a [`Handle`] is the index of an occupied slot. Disposing
//! a slot vacates it and the next allocation reuses the lowest vacant
//! index, so a disposed handle's numeric identity can be handed out again.
//! In between, any access through the stale handle fails with
//! [`Error::InvalidHandle`] because the slot is vacant.

use core::fmt;
use std::collections::TryReserveError;

/// Default sizing used for the slot table and for contiguous element
/// buffers created without an explicit capacity.
pub(crate) const DEFAULT_CAPACITY: usize = 30;

/// Load-factor test shared by the slot table and the contiguous buffers:
/// occupancy strictly above three quarters of capacity triggers doubling.
#[inline]
pub(crate) fn exceeds_load(used: usize, capacity: usize) -> bool {
    used * 4 > capacity * 3
}

/// Identifier of one container inside a store.
///
/// Handles are plain slot indices. They are only meaningful for the store
/// that produced them, and they carry no generation: after `dispose`, a
/// later `create` on the same store may return an equal handle naming a
/// fresh container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(usize);

impl Handle {
    pub(crate) fn new(index: usize) -> Self {
        Handle(index)
    }

    /// The underlying slot index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Per-call failure of a store operation.
///
/// Allocation failures are reported instead of aborting, and a handle that
/// does not name a live slot is rejected before any state is touched.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Backing storage could not be allocated or grown.
    OutOfMemory,
    /// The handle does not name a live container in this store.
    InvalidHandle,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => f.write_str("storage allocation failed"),
            Error::InvalidHandle => f.write_str("handle does not name a live container"),
        }
    }
}

impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// Backing storage held in a registry slot.
pub(crate) trait Backing {
    /// Clear contents and return the storage to its default-capacity shape.
    /// The slot itself stays allocated.
    fn reset(&mut self) -> Result<(), Error>;
}

/// Growable table of slots addressed by [`Handle`].
pub(crate) struct Registry<S> {
    slots: Vec<Option<S>>,
    used: usize,
}

impl<S> Registry<S> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            used: 0,
        }
    }

    /// Place `slot` into the first vacant index and return its handle.
    ///
    /// The table is sized lazily on first use and doubled whenever the
    /// occupied count crosses the load factor, so a vacancy always exists
    /// by the time the scan runs.
    pub(crate) fn allocate(&mut self, slot: S) -> Result<Handle, Error> {
        if self.slots.is_empty() {
            self.slots.try_reserve_exact(DEFAULT_CAPACITY)?;
            self.slots.resize_with(DEFAULT_CAPACITY, || None);
        } else if exceeds_load(self.used, self.slots.len()) {
            let mut target = self.slots.len();
            while exceeds_load(self.used, target) {
                target *= 2;
            }
            self.slots.try_reserve_exact(target - self.slots.len())?;
            self.slots.resize_with(target, || None);
        }
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .expect("slot table keeps vacancies under the load factor");
        self.slots[index] = Some(slot);
        self.used += 1;
        Ok(Handle::new(index))
    }

    /// Vacate the slot and hand its storage back to the caller.
    pub(crate) fn release(&mut self, handle: Handle) -> Result<S, Error> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .ok_or(Error::InvalidHandle)?
            .take()
            .ok_or(Error::InvalidHandle)?;
        self.used -= 1;
        Ok(slot)
    }

    /// Clear the slot's contents while keeping the handle live.
    pub(crate) fn reset(&mut self, handle: Handle) -> Result<(), Error>
    where
        S: Backing,
    {
        self.slot_mut(handle)?.reset()
    }

    pub(crate) fn slot(&self, handle: Handle) -> Result<&S, Error> {
        self.slots
            .get(handle.index())
            .and_then(Option::as_ref)
            .ok_or(Error::InvalidHandle)
    }

    pub(crate) fn slot_mut(&mut self, handle: Handle) -> Result<&mut S, Error> {
        self.slots
            .get_mut(handle.index())
            .and_then(Option::as_mut)
            .ok_or(Error::InvalidHandle)
    }

    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.slots
            .get(handle.index())
            .map(Option::is_some)
            .unwrap_or(false)
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.used
    }

    #[cfg(test)]
    pub(crate) fn table_len(&self) -> usize {
        self.slots.len()
    }
}
