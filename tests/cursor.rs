// Cursor test suite, run against both backing kinds through the
// Sequence trait.
//
// The core invariants exercised:
// - Forward traversal yields the stored sequence; backward traversal
//   from the end yields the reverse; the turnaround element appears
//   once per direction.
// - Bounds come from the live container, so edits between steps are
//   visible immediately.
// - A cursor survives its container only as a value: once the handle is
//   dead every step fails with InvalidHandle.
use handle_collections::{ArrayListStore, Cursor, Error, LinkedListStore, Sequence};

fn drain_forward<T: Copy, S: Sequence<T>>(cursor: &mut Cursor, store: &S) -> Vec<T> {
    let mut out = Vec::new();
    while let Some(v) = cursor.next(store).unwrap() {
        out.push(*v);
    }
    out
}

fn drain_backward<T: Copy, S: Sequence<T>>(cursor: &mut Cursor, store: &S) -> Vec<T> {
    let mut out = Vec::new();
    while let Some(v) = cursor.prev(store).unwrap() {
        out.push(*v);
    }
    out
}

// Test: full walk out and back over a contiguous container.
// Assumes: next reads then advances, prev retreats then reads.
// Verifies: the x,y,z,z,y,x shape with the cursor back at the front.
#[test]
fn array_list_walk_out_and_back() {
    let mut store: ArrayListStore<&str> = ArrayListStore::new();
    let h = store.create().unwrap();
    for v in ["x", "y", "z"] {
        store.push(h, v).unwrap();
    }

    let mut c = store.cursor(h).unwrap();
    let forward = drain_forward(&mut c, &store);
    let backward = drain_backward(&mut c, &store);
    assert_eq!(forward, ["x", "y", "z"]);
    assert_eq!(backward, ["z", "y", "x"]);
    assert!(!c.has_prev());
    assert!(c.has_next(&store).unwrap());
}

// Test: the same walk over a linked container.
// Assumes: the cursor is kind-agnostic through Sequence.
// Verifies: identical traversal shape over chain storage.
#[test]
fn linked_list_walk_out_and_back() {
    let mut store: LinkedListStore<&str> = LinkedListStore::new();
    let h = store.create().unwrap();
    for v in ["x", "y", "z"] {
        store.push(h, v).unwrap();
    }

    let mut c = store.cursor(h).unwrap();
    assert_eq!(drain_forward(&mut c, &store), ["x", "y", "z"]);
    assert_eq!(drain_backward(&mut c, &store), ["z", "y", "x"]);
    assert_eq!(c.position(), 0);
}

// Test: reset rewinds to the first element.
// Assumes: reset touches only the position.
// Verifies: next after reset returns the first element again.
#[test]
fn reset_restarts_traversal() {
    let mut store: LinkedListStore<i32> = LinkedListStore::new();
    let h = store.create().unwrap();
    store.push(h, 1).unwrap();
    store.push(h, 2).unwrap();

    let mut c = store.cursor(h).unwrap();
    c.next(&store).unwrap();
    c.next(&store).unwrap();
    c.reset();
    assert_eq!(c.next(&store).unwrap(), Some(&1));
}

// Test: no snapshot isolation.
// Assumes: bounds are recomputed from the live container each step.
// Verifies: an element pushed mid-walk is visited; a removal mid-walk
// shortens the walk.
#[test]
fn mutation_between_steps_is_visible() {
    let mut store: ArrayListStore<i32> = ArrayListStore::new();
    let h = store.create().unwrap();
    store.push(h, 1).unwrap();

    let mut c = store.cursor(h).unwrap();
    assert_eq!(c.next(&store).unwrap(), Some(&1));
    assert_eq!(c.next(&store).unwrap(), None);

    store.push(h, 2).unwrap();
    assert_eq!(c.next(&store).unwrap(), Some(&2));

    store.remove(h, 0).unwrap();
    store.remove(h, 0).unwrap();
    assert_eq!(c.next(&store).unwrap(), None);
    assert!(!c.has_next(&store).unwrap());
}

// Test: cursor on a disposed handle.
// Assumes: validity is checked on every step.
// Verifies: InvalidHandle from next/prev/has_next once the container is
// gone, and cursor creation itself rejects a dead handle.
#[test]
fn dead_handle_is_rejected() {
    let mut store: ArrayListStore<i32> = ArrayListStore::new();
    let h = store.create().unwrap();
    store.push(h, 1).unwrap();
    let mut c = store.cursor(h).unwrap();
    store.dispose(h).unwrap();

    assert_eq!(c.next(&store).err(), Some(Error::InvalidHandle));
    assert_eq!(c.has_next(&store).err(), Some(Error::InvalidHandle));
    assert_eq!(store.cursor(h).err(), Some(Error::InvalidHandle));
}

// Test: one cursor per container, several containers per store.
// Assumes: cursors are bound to their handle only.
// Verifies: interleaved cursors over two containers do not interfere.
#[test]
fn cursors_are_per_container() {
    let mut store: ArrayListStore<i32> = ArrayListStore::new();
    let a = store.create().unwrap();
    let b = store.create().unwrap();
    store.push(a, 1).unwrap();
    store.push(a, 2).unwrap();
    store.push(b, 10).unwrap();

    let mut ca = store.cursor(a).unwrap();
    let mut cb = store.cursor(b).unwrap();
    assert_eq!(ca.next(&store).unwrap(), Some(&1));
    assert_eq!(cb.next(&store).unwrap(), Some(&10));
    assert_eq!(ca.next(&store).unwrap(), Some(&2));
    assert_eq!(cb.next(&store).unwrap(), None);
}
