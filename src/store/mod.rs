//! `NodeStore`: five parallel fields (`base`, `parent`, `value`, `aux1`,
//! `aux2`) making up one automaton node, stored column-wise so each field
//! grows independently but is written together via [`NodeStore::write_all`].
//!
//! Node 0 is the root and is live from construction; every other index `i`
//! is occupied iff `parent[i] != RESERVED`.

mod storage;

use crate::vector::SafeVector;
use storage::Storage;

pub(crate) const RESERVED: i32 = i32::MIN;

/// Column-wise storage for every automaton node.
#[derive(Debug, Clone)]
pub(crate) struct NodeStore {
    base: Storage,
    parent: Storage,
    value: Storage,
    aux1: Storage,
    aux2: Storage,
    frozen: bool,
}

impl NodeStore {
    pub(crate) fn new(chunk_size: usize) -> Self {
        let mut store = Self {
            base: Storage::chunked(chunk_size, RESERVED),
            parent: Storage::chunked(chunk_size, RESERVED),
            value: Storage::chunked(chunk_size, RESERVED),
            aux1: Storage::chunked(chunk_size, RESERVED),
            aux2: Storage::chunked(chunk_size, RESERVED),
            frozen: false,
        };
        // Root: base=1, parent=0 (self, "always live"), everything else RESERVED.
        store.write_all(0, 1, 0, RESERVED, RESERVED, RESERVED);
        store
    }

    /// Number of node slots ever touched (root included); not all are occupied.
    pub(crate) fn len(&self) -> usize {
        self.base.size()
    }

    pub(crate) fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Copies each field's chunked backing into a freshly-sized contiguous
    /// array and discards the chunked version. Idempotent.
    pub(crate) fn freeze(&mut self, growth_rate: f64) {
        if self.frozen {
            return;
        }
        self.base.freeze(growth_rate);
        self.parent.freeze(growth_rate);
        self.value.freeze(growth_rate);
        self.aux1.freeze(growth_rate);
        self.aux2.freeze(growth_rate);
        self.frozen = true;
    }

    /// Writes all five fields for node `i`. Grows the base field first; if
    /// that grew the store, the remaining fields are grown too, otherwise a
    /// plain (non-growing) `set` is used since they are already in range.
    pub(crate) fn write_all(&mut self, i: usize, base: i32, parent: i32, value: i32, aux1: i32, aux2: i32) {
        let grew = self.base.safe_set(i, base);
        if grew {
            self.parent.safe_set(i, parent);
            self.value.safe_set(i, value);
            self.aux1.safe_set(i, aux1);
            self.aux2.safe_set(i, aux2);
        } else {
            // All five fields are only ever grown together (here and
            // nowhere else), so if `base` was already in range the other
            // four are too: a plain `set` always succeeds.
            self.parent.set(i, parent).expect("fields grow in lockstep");
            self.value.set(i, value).expect("fields grow in lockstep");
            self.aux1.set(i, aux1).expect("fields grow in lockstep");
            self.aux2.set(i, aux2).expect("fields grow in lockstep");
        }
    }

    pub(crate) fn base(&self, i: i32) -> i32 {
        safe_get_signed(&self.base, i)
    }

    pub(crate) fn parent(&self, i: i32) -> i32 {
        safe_get_signed(&self.parent, i)
    }

    pub(crate) fn value(&self, i: i32) -> i32 {
        safe_get_signed(&self.value, i)
    }

    pub(crate) fn aux1(&self, i: i32) -> i32 {
        safe_get_signed(&self.aux1, i)
    }

    pub(crate) fn aux2(&self, i: i32) -> i32 {
        safe_get_signed(&self.aux2, i)
    }

    pub(crate) fn set_base(&mut self, i: i32, v: i32) {
        if i >= 0 {
            self.base.safe_set(i as usize, v);
        }
    }

    pub(crate) fn set_parent(&mut self, i: i32, v: i32) {
        if i >= 0 {
            self.parent.safe_set(i as usize, v);
        }
    }

    pub(crate) fn set_value(&mut self, i: i32, v: i32) {
        if i >= 0 {
            self.value.safe_set(i as usize, v);
        }
    }

    pub(crate) fn set_aux1(&mut self, i: i32, v: i32) {
        if i >= 0 {
            self.aux1.safe_set(i as usize, v);
        }
    }

    pub(crate) fn set_aux2(&mut self, i: i32, v: i32) {
        if i >= 0 {
            self.aux2.safe_set(i as usize, v);
        }
    }
}

/// Reads a field for node index `node`, treating any negative or
/// out-of-i32-range logical index as `RESERVED` (never occupied) instead of
/// panicking on the `usize` cast.
fn safe_get_signed(field: &Storage, node: i32) -> i32 {
    if node < 0 {
        return RESERVED;
    }
    field.safe_get(node as usize)
}
