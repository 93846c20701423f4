//! Failure-link and prefix-link construction: a breadth-first walk over the
//! finished trie that reuses each node's `aux1` field, in turn, as a
//! sibling-offset (already there from insertion), then a BFS queue
//! "next" pointer, then finally the failure link itself. No queue is
//! allocated; the trie's own fields carry the traversal state.

use super::core::AutomatonCore;
use crate::error::{Error, Result};
use crate::store::RESERVED;

impl AutomatonCore {
    /// Freezes node storage and computes failure/prefix links. Idempotent
    /// guard only: calling twice returns an error, matching insertion's
    /// post-build lockout.
    pub(crate) fn build(&mut self) -> Result<()> {
        if self.built {
            return Err(Error::AlreadyBuilt);
        }
        let _span = tracing::debug_span!("automaton_build", nodes = self.node_count).entered();
        self.store.freeze(self.build_config().growth_rate);

        if self.store.aux2(0) != RESERVED {
            self.construct_links();
        }
        self.built = true;
        tracing::debug!(nodes = self.node_count, "automaton built");
        Ok(())
    }

    /// The breadth-first walk described in the module doc comment. Assumes
    /// the root has at least one child (callers check `aux2(0)`).
    fn construct_links(&mut self) {
        let root_base = self.store.base(0);
        let first_offset = self.store.aux2(0);
        // Root's own prefix link is always empty; aux2(0) is never visited
        // by the main loop below (root is never `cursor`), so it would
        // otherwise keep holding its pre-build "first child offset" value.
        self.store.set_aux2(0, RESERVED);

        // Thread root's children into a queue chain via aux1, fixing any
        // unset base along the way. Nothing else can be enqueued until the
        // main loop starts, so real "next" values can be written directly
        // (no placeholder-then-patch needed at this level).
        let mut node = root_base + first_offset;
        let mut tail = node;
        loop {
            let next_offset = self.store.aux1(node); // old meaning: sibling offset
            if self.store.base(node) == RESERVED {
                self.store.set_base(node, 0);
            }
            if next_offset == first_offset {
                self.store.set_aux1(node, RESERVED); // end of queue (for now)
                tail = node;
                break;
            }
            let next_node = root_base + next_offset;
            self.store.set_aux1(node, next_node);
            tail = node;
            node = next_node;
        }
        let queue_head = root_base + first_offset;
        self.store.set_aux1(0, queue_head);

        let mut cursor = queue_head;
        loop {
            // Read this node's "next in queue" before anything below has a
            // chance to overwrite it (it can, if this node is still the
            // tail when its own children get appended).
            let next_in_queue = self.store.aux1(cursor);
            let parent = self.store.parent(cursor);

            // Enumerate cursor's own children (its aux2/sibling chain is
            // still untouched) and append each to the queue tail.
            let first_child_offset = self.store.aux2(cursor);
            if first_child_offset != RESERVED {
                let base = self.store.base(cursor);
                let mut offset = first_child_offset;
                loop {
                    let child = base + offset;
                    let sibling_next_offset = self.store.aux1(child); // old meaning
                    if self.store.base(child) == RESERVED {
                        self.store.set_base(child, 0);
                    }
                    self.store.set_aux1(tail, child);
                    self.store.set_aux1(child, RESERVED); // tentative: last in queue
                    tail = child;
                    if sibling_next_offset == first_child_offset {
                        break;
                    }
                    offset = sibling_next_offset;
                }
            }

            if parent == 0 {
                // Depth-1 nodes fail straight to the root.
                self.store.set_aux1(cursor, 0);
                self.store.set_aux2(cursor, RESERVED);
            } else {
                let u = cursor - self.store.base(parent);
                let mut g = self.store.aux1(parent); // parent's own failure link, already final
                let mut t = self.store.base(g) + u;
                while g != 0 && self.store.parent(t) != g {
                    g = self.store.aux1(g);
                    t = self.store.base(g) + u;
                }
                let f = if self.store.parent(t) == g { t } else { 0 };
                let p = if self.store.value(f) != RESERVED {
                    f
                } else {
                    self.store.aux2(f)
                };
                self.store.set_aux1(cursor, f);
                self.store.set_aux2(cursor, p);
            }

            if next_in_queue == RESERVED {
                break;
            }
            cursor = next_in_queue;
        }
    }
}
