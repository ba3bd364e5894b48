#![cfg(test)]

// Property tests for the stores kept inside the crate so they can read
// internal constants like the default capacity.
//
// The state machine drives a fixed pool of containers through random
// create/push/insert/remove/purge/dispose sequences against Vec models.
// Handle aliasing is modeled faithfully: an operation through a stale
// handle resolves to whichever live container currently occupies that
// slot index, and must fail with InvalidHandle when none does.

use crate::registry::DEFAULT_CAPACITY;
use crate::{ArrayListStore, Error, Handle, LinkedListStore};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Create(usize),
    Push(usize, i32),
    Insert(usize, u8, i32),
    Remove(usize, u8),
    Get(usize, u8),
    Purge(usize),
    Dispose(usize),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..=4).prop_flat_map(|pool| {
        let slot = 0..pool;
        let op = prop_oneof![
            slot.clone().prop_map(Op::Create),
            (slot.clone(), any::<i32>()).prop_map(|(s, v)| Op::Push(s, v)),
            (slot.clone(), any::<u8>(), any::<i32>()).prop_map(|(s, at, v)| Op::Insert(s, at, v)),
            (slot.clone(), any::<u8>()).prop_map(|(s, at)| Op::Remove(s, at)),
            (slot.clone(), any::<u8>()).prop_map(|(s, at)| Op::Get(s, at)),
            slot.clone().prop_map(Op::Purge),
            slot.clone().prop_map(Op::Dispose),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool, ops))
    })
}

/// Pool entry: the handle the slot last received and, while live, its
/// model contents. `None` marks a disposed container whose handle may
/// since have been reused by another entry.
type Tracked = Vec<(Handle, Option<Vec<i32>>)>;

/// Index of the live pool entry currently occupying `h`'s slot, if any.
fn resolve(tracked: &Tracked, h: Handle) -> Option<usize> {
    tracked
        .iter()
        .position(|(hh, m)| m.is_some() && *hh == h)
}

// Property: State-machine equivalence of ArrayListStore against Vec.
// Invariants exercised across random operation sequences:
// - Push/insert/remove/get parity with the model, including insert at the
//   end (append) and rejected past-the-end indices.
// - Purge clears contents and restores the default capacity.
// - Dispose invalidates the handle until the slot index is reused; a
//   reused index aliases the new container.
// - live() equals the number of live models after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_array_list_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ArrayListStore<i32> = ArrayListStore::new();
        let mut tracked: Tracked = Vec::new();
        for s in 0..pool {
            // Small initial capacities keep the growth policy busy.
            let h = sut.create_with_capacity(s).unwrap();
            tracked.push((h, Some(Vec::new())));
        }

        for op in ops {
            match op {
                Op::Create(s) => {
                    if tracked[s].1.is_none() {
                        let h = sut.create_with_capacity(s).unwrap();
                        tracked[s] = (h, Some(Vec::new()));
                    }
                }
                Op::Push(s, v) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            prop_assert_eq!(*sut.push(h, v).unwrap(), v);
                            tracked[j].1.as_mut().unwrap().push(v);
                        }
                        None => prop_assert_eq!(sut.push(h, v).err(), Some(Error::InvalidHandle)),
                    }
                }
                Op::Insert(s, at, v) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            let m = tracked[j].1.as_mut().unwrap();
                            let at = at as usize % (m.len() + 2);
                            let res = sut.insert(h, at, v).unwrap();
                            if at <= m.len() {
                                prop_assert_eq!(res, Some(&v));
                                m.insert(at, v);
                            } else {
                                prop_assert_eq!(res, None);
                            }
                        }
                        None => {
                            prop_assert_eq!(sut.insert(h, 0, v).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Remove(s, at) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            let m = tracked[j].1.as_mut().unwrap();
                            let at = at as usize % (m.len() + 2);
                            let got = sut.remove(h, at).unwrap();
                            if at < m.len() {
                                prop_assert_eq!(got, Some(m.remove(at)));
                            } else {
                                prop_assert_eq!(got, None);
                            }
                        }
                        None => {
                            prop_assert_eq!(sut.remove(h, 0).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Get(s, at) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            let m = tracked[j].1.as_ref().unwrap();
                            let at = at as usize % (m.len() + 2);
                            prop_assert_eq!(sut.get(h, at).unwrap(), m.get(at));
                        }
                        None => {
                            prop_assert_eq!(sut.get(h, 0).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Purge(s) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            sut.purge(h).unwrap();
                            tracked[j].1.as_mut().unwrap().clear();
                            prop_assert_eq!(sut.capacity(h).unwrap(), DEFAULT_CAPACITY);
                        }
                        None => {
                            prop_assert_eq!(sut.purge(h).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Dispose(s) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            sut.dispose(h).unwrap();
                            tracked[j].1 = None;
                        }
                        None => {
                            prop_assert_eq!(sut.dispose(h).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
            }

            // Post-conditions after each op
            // 1) Live-count parity
            let live = tracked.iter().filter(|(_, m)| m.is_some()).count();
            prop_assert_eq!(sut.live(), live);
            // 2) Content parity for every live container
            for (h, m) in &tracked {
                if let Some(m) = m {
                    prop_assert_eq!(sut.len(*h).unwrap(), m.len());
                    prop_assert_eq!(sut.as_slice(*h).unwrap(), m.as_slice());
                }
            }
            // 3) Stale handles with no live alias must not resolve
            for (h, m) in &tracked {
                if m.is_none() && resolve(&tracked, *h).is_none() {
                    prop_assert_eq!(sut.len(*h).err(), Some(Error::InvalidHandle));
                }
            }
        }
    }
}

// Property: Same state machine for LinkedListStore, with the chain checked
// in both directions so head, tail, and the prev mirror links stay
// consistent under arbitrary edits.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_linked_list_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: LinkedListStore<i32> = LinkedListStore::new();
        let mut tracked: Tracked = Vec::new();
        for _ in 0..pool {
            let h = sut.create().unwrap();
            tracked.push((h, Some(Vec::new())));
        }

        for op in ops {
            match op {
                Op::Create(s) => {
                    if tracked[s].1.is_none() {
                        let h = sut.create().unwrap();
                        tracked[s] = (h, Some(Vec::new()));
                    }
                }
                Op::Push(s, v) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            prop_assert_eq!(*sut.push(h, v).unwrap(), v);
                            tracked[j].1.as_mut().unwrap().push(v);
                        }
                        None => prop_assert_eq!(sut.push(h, v).err(), Some(Error::InvalidHandle)),
                    }
                }
                Op::Insert(s, at, v) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            let m = tracked[j].1.as_mut().unwrap();
                            let at = at as usize % (m.len() + 2);
                            let res = sut.insert(h, at, v).unwrap();
                            if at <= m.len() {
                                prop_assert_eq!(res, Some(&v));
                                m.insert(at, v);
                            } else {
                                prop_assert_eq!(res, None);
                            }
                        }
                        None => {
                            prop_assert_eq!(sut.insert(h, 0, v).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Remove(s, at) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            let m = tracked[j].1.as_mut().unwrap();
                            let at = at as usize % (m.len() + 2);
                            let got = sut.remove(h, at).unwrap();
                            if at < m.len() {
                                prop_assert_eq!(got, Some(m.remove(at)));
                            } else {
                                prop_assert_eq!(got, None);
                            }
                        }
                        None => {
                            prop_assert_eq!(sut.remove(h, 0).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Get(s, at) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            let m = tracked[j].1.as_ref().unwrap();
                            let at = at as usize % (m.len() + 2);
                            prop_assert_eq!(sut.get(h, at).unwrap(), m.get(at));
                        }
                        None => {
                            prop_assert_eq!(sut.get(h, 0).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Purge(s) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            sut.purge(h).unwrap();
                            tracked[j].1.as_mut().unwrap().clear();
                        }
                        None => {
                            prop_assert_eq!(sut.purge(h).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
                Op::Dispose(s) => {
                    let h = tracked[s].0;
                    match resolve(&tracked, h) {
                        Some(j) => {
                            sut.dispose(h).unwrap();
                            tracked[j].1 = None;
                        }
                        None => {
                            prop_assert_eq!(sut.dispose(h).err(), Some(Error::InvalidHandle));
                        }
                    }
                }
            }

            let live = tracked.iter().filter(|(_, m)| m.is_some()).count();
            prop_assert_eq!(sut.live(), live);
            for (h, m) in &tracked {
                if let Some(m) = m {
                    prop_assert_eq!(sut.len(*h).unwrap(), m.len());
                    let fwd: Vec<i32> = sut.iter(*h).unwrap().copied().collect();
                    prop_assert_eq!(&fwd, m);
                    let bwd: Vec<i32> = sut.iter(*h).unwrap().rev().copied().collect();
                    let rev: Vec<i32> = m.iter().rev().copied().collect();
                    prop_assert_eq!(bwd, rev);
                }
            }
            for (h, m) in &tracked {
                if m.is_none() && resolve(&tracked, *h).is_none() {
                    prop_assert_eq!(sut.len(*h).err(), Some(Error::InvalidHandle));
                }
            }
        }
    }
}
