//! handle-collections: sequence containers addressed through small integer
//! handles instead of references.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: route every container operation through a slot registry so that
//!   callers hold only a [`Handle`], never a reference, and so that the
//!   growth and reuse machinery can be reasoned about in one place.
//! - Layers:
//!   - Registry (internal): a growable table of optional slots. Allocates
//!     handles by scanning for the lowest vacancy, doubles itself past a
//!     3/4 load factor, and owns the purge/dispose lifecycle shared by all
//!     store kinds.
//!   - Stores: [`ArrayStore`] and [`ArrayListStore`] keep elements in
//!     contiguous buffers governed by the same 3/4-doubling policy as the
//!     registry table; [`LinkedListStore`] keeps a doubly linked node
//!     chain per slot, arena-backed with index links. The two contiguous
//!     kinds share one implementation and differ only in whether the
//!     caller picks the initial capacity.
//!   - [`Cursor`]: a detached bidirectional position over any store kind,
//!     dispatched through the [`Sequence`] trait. No snapshot: bounds are
//!     re-read from the live container on every step.
//!
//! Constraints
//! - Single-threaded use is the caller's contract in the ordinary Rust
//!   sense: mutation takes `&mut self`, there is no interior locking.
//! - Elements are opaque. Stores move values in and out but never clone,
//!   compare, or otherwise inspect them.
//! - Handles carry no generation. `dispose` vacates a slot and a later
//!   `create` may hand out the same index for a fresh container; in
//!   between, every use of the stale handle fails with
//!   [`Error::InvalidHandle`].
//! - Failures are per-call values: allocation failure surfaces as
//!   [`Error::OutOfMemory`] through `try_reserve`, never as an abort.
//!
//! Notes and non-goals
//! - No panics on the handle path: a bad handle or index is an
//!   `Err`/`None`, not a panic.
//! - No custom growth policies; one load factor and doubling rate govern
//!   the registry table and the contiguous buffers alike.
//! - Public surface is the three stores, `Handle`, `Error`, `Cursor`, and
//!   `Sequence`; the registry and slot types are implementation details.

pub mod array;
pub mod array_list;
pub mod cursor;
pub mod linked_list;
mod registry;
mod store_proptest;

// Public surface
pub use array::ArrayStore;
pub use array_list::ArrayListStore;
pub use cursor::{Cursor, Sequence};
pub use linked_list::LinkedListStore;
pub use registry::{Error, Handle};
