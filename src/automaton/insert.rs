//! Trie insertion: free-slot search, new-child splicing, and the
//! collision-resolution relocation that keeps the double array dense.

use super::core::AutomatonCore;
use crate::error::{Error, Result};
use crate::store::RESERVED;

impl AutomatonCore {
    /// Inserts `units` with `value`, creating any missing trie nodes along
    /// the way. Returns the terminal node so callers can detect
    /// already-present keys before overwriting their value.
    pub(crate) fn add_entry(&mut self, units: &[u16], value: i32) -> Result<i32> {
        if self.built {
            return Err(Error::AlreadyBuilt);
        }
        if units.is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut cur = 0i32;
        for &unit in units {
            let u = i32::from(unit);
            if self.store.base(cur) == RESERVED {
                let slot = self.find_single(u);
                self.store.set_base(cur, slot - u);
            }
            let mut c = self.child_at(cur, u);
            let owner = self.store.parent(c);
            if owner == cur {
                // already a child, just descend
            } else if owner == RESERVED {
                self.insert_child(cur, c);
            } else {
                cur = self.resolve_collision(cur, u);
                c = self.child_at(cur, u);
                self.insert_child(cur, c);
            }
            cur = c;
        }
        if self.store.value(cur) == RESERVED {
            self.pattern_count += 1;
        }
        self.store.set_value(cur, value);
        Ok(cur)
    }

    fn child_at(&self, parent: i32, u: i32) -> i32 {
        self.store.base(parent) + u
    }

    /// Finds a slot for `parent`'s first (and so far only) child at offset
    /// `u`: a cache hole if one fits, otherwise the next unoccupied index at
    /// or past `single_child_cursor`.
    fn find_single(&mut self, u: i32) -> i32 {
        let store = &self.store;
        let slot = self.cache.pop_for(u, |v| store.parent(v) != RESERVED);
        if slot != 0 {
            return slot;
        }
        if self.single_child_cursor < u - 1 {
            self.single_child_cursor = u - 1;
        }
        loop {
            self.single_child_cursor += 1;
            if self.store.parent(self.single_child_cursor) == RESERVED {
                return self.single_child_cursor;
            }
        }
    }

    /// Finds a base `b` such that `b + o` is unoccupied for every offset `o`
    /// in `offsets`. Falls back to [`Self::find_single`] for a singleton set.
    fn find_multi(&mut self, offsets: &[i32]) -> i32 {
        if offsets.len() == 1 {
            return self.find_single(offsets[0]);
        }
        if self.multi_child_cursor < self.single_child_cursor {
            self.multi_child_cursor = self.single_child_cursor;
        }
        loop {
            self.multi_child_cursor += 1;
            let b = self.multi_child_cursor;
            if offsets.iter().all(|&o| self.store.parent(b + o) == RESERVED) {
                return b;
            }
        }
    }

    /// Splices a freshly-discovered child into `parent`'s circular sibling
    /// list in O(1), right after the list head.
    fn insert_child(&mut self, parent: i32, child: i32) {
        self.node_count += 1;
        let first_offset = self.store.aux2(parent);
        let offset = child - self.store.base(parent);
        if first_offset == RESERVED {
            self.store.set_aux2(parent, offset);
            // sole child: circular list of one, self-referencing offset
            self.store.write_all(child as usize, RESERVED, parent, RESERVED, offset, RESERVED);
        } else {
            let head = self.store.base(parent) + first_offset;
            let head_next_offset = self.store.aux1(head);
            self.store
                .write_all(child as usize, RESERVED, parent, RESERVED, head_next_offset, RESERVED);
            self.store.set_aux1(head, offset);
        }
    }

    /// Enumerates `parent`'s children (as offsets from `parent`'s base) via
    /// its circular sibling list into `out`, clearing `out` first.
    fn children_offsets(&self, parent: i32, out: &mut Vec<i32>) {
        out.clear();
        let first = self.store.aux2(parent);
        if first == RESERVED {
            return;
        }
        let base = self.store.base(parent);
        let mut offset = first;
        loop {
            out.push(offset);
            let child = base + offset;
            let next = self.store.aux1(child);
            if next == first {
                break;
            }
            offset = next;
        }
    }

    /// Repoints every child of `old_parent` to `new_parent` (their `parent`
    /// field only; the children themselves don't move).
    fn reparent_children(&mut self, old_parent: i32, new_parent: i32) {
        let first = self.store.aux2(old_parent);
        if first == RESERVED {
            return;
        }
        let base = self.store.base(old_parent);
        let mut offset = first;
        loop {
            let child = base + offset;
            self.store.set_parent(child, new_parent);
            let next = self.store.aux1(child);
            if next == first {
                break;
            }
            offset = next;
        }
    }

    /// Resolves a collision at `child_at(cur, u)`, owned by some other node
    /// `q`. Relocates whichever of `cur`/`q` has fewer children (ties favor
    /// `cur`, the encroaching side) to a fresh base that has room, then
    /// returns the index the caller should now treat as `cur` — adjusted if
    /// `cur` was itself one of `q`'s relocated direct children.
    pub(super) fn resolve_collision(&mut self, cur: i32, u: i32) -> i32 {
        let c = self.child_at(cur, u);
        let q = self.store.parent(c);
        let cur_is_direct_child_of_q = self.store.parent(cur) == q;
        tracing::trace!(cur, q, offset = u, "collision, relocating");

        let mut offsets_q = std::mem::take(&mut self.scratch_a);
        let mut offsets_b = std::mem::take(&mut self.scratch_b);
        self.children_offsets(q, &mut offsets_q);
        self.children_offsets(cur, &mut offsets_b);
        offsets_b.push(u); // reserve room for the child about to be inserted

        let move_cur = offsets_b.len() <= offsets_q.len();
        let moved = if move_cur { cur } else { q };
        // offsets actually used to size the search for a new base: includes
        // the reserved slot for `u` when `cur` is the one being moved, since
        // it will need a home under the new base right after this returns.
        let search_offsets: &[i32] = if move_cur { &offsets_b } else { &offsets_q };

        let old_base = self.store.base(moved);
        let new_base = self.find_multi(search_offsets);

        // Relocation itself only copies *existing* children: `u` isn't a
        // real child yet, just a reservation, so it's excluded here.
        let relocate_offsets: &[i32] = if move_cur {
            &offsets_b[..offsets_b.len() - 1]
        } else {
            &offsets_q
        };

        for &o in relocate_offsets {
            let old_child = old_base + o;
            let new_child = new_base + o;
            self.reparent_children(old_child, new_child);
            let (b, p, v, a1, a2) = (
                self.store.base(old_child),
                self.store.parent(old_child),
                self.store.value(old_child),
                self.store.aux1(old_child),
                self.store.aux2(old_child),
            );
            self.store.write_all(new_child as usize, b, p, v, a1, a2);
            self.store.set_parent(old_child, RESERVED);
            if old_child < self.single_child_cursor {
                self.cache.add(old_child);
            }
        }
        self.store.set_base(moved, new_base);

        self.scratch_a = offsets_q;
        self.scratch_b = offsets_b;

        if !move_cur && cur_is_direct_child_of_q {
            cur + (new_base - old_base)
        } else {
            cur
        }
    }
}
