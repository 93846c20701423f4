//! Two-level chunked vector: minimal slack while growing, at the cost of an
//! extra indirection per access. Used as the node store's build-time
//! backing; see [`crate::vector::ContiguousVector`] for the frozen runtime
//! backing.

use super::safe::{bounds_error, SafeVector};
use crate::error::Result;

/// A `SafeVector` backed by a top array of pointers to fixed-size leaf
/// chunks, so growth only ever allocates whole leaves instead of
/// reallocating (and copying) one contiguous array.
#[derive(Debug, Clone)]
pub struct ChunkedVector {
    chunk_size: usize,
    default: i32,
    leaves: Vec<Box<[i32]>>,
    size: usize,
}

impl ChunkedVector {
    /// Creates an empty chunked vector using the default chunk size
    /// ([`crate::config::DEFAULT_CHUNK_SIZE`]).
    #[must_use]
    pub fn new(default: i32) -> Self {
        Self::with_chunk_size(crate::config::DEFAULT_CHUNK_SIZE, default)
    }

    /// Creates an empty chunked vector with an explicit chunk size.
    ///
    /// `chunk_size` must be a power of two; this is an internal invariant
    /// enforced by construction (the crate only ever passes the tuned
    /// constant or a config-derived power of two), not a user-reachable
    /// error path.
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize, default: i32) -> Self {
        assert!(chunk_size.is_power_of_two(), "chunk_size must be a power of two");
        Self {
            chunk_size,
            default,
            leaves: Vec::new(),
            size: 0,
        }
    }

    #[inline]
    fn split(&self, i: usize) -> (usize, usize) {
        (i / self.chunk_size, i % self.chunk_size)
    }

    fn ensure_leaf(&mut self, top: usize) {
        while self.leaves.len() <= top {
            self.leaves.push(vec![self.default; self.chunk_size].into_boxed_slice());
        }
    }

    /// Consumes the chunked vector, copying its logical contents into a
    /// freshly-allocated [`super::ContiguousVector`] of the same size and
    /// default. Used by `NodeStore::freeze`.
    #[must_use]
    pub fn into_contiguous(self, growth_rate: f64) -> super::ContiguousVector {
        let mut out = super::ContiguousVector::with_capacity(
            self.size.max(1),
            growth_rate,
            self.default,
        )
        .expect("freeze uses a validated growth rate");
        for i in 0..self.size {
            let (top, low) = self.split(i);
            let v = self.leaves.get(top).map_or(self.default, |leaf| leaf[low]);
            out.safe_set(i, v);
        }
        out
    }
}

impl SafeVector for ChunkedVector {
    fn default_value(&self) -> i32 {
        self.default
    }

    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, i: usize) -> Result<i32> {
        if i >= self.size {
            return Err(bounds_error(i, self.size));
        }
        Ok(self.safe_get(i))
    }

    fn set(&mut self, i: usize, v: i32) -> Result<()> {
        if i >= self.size {
            return Err(bounds_error(i, self.size));
        }
        let (top, low) = self.split(i);
        self.leaves[top][low] = v;
        Ok(())
    }

    fn safe_get(&self, i: usize) -> i32 {
        if i >= self.size {
            return self.default;
        }
        let (top, low) = self.split(i);
        self.leaves.get(top).map_or(self.default, |leaf| leaf[low])
    }

    fn safe_set(&mut self, i: usize, v: i32) -> bool {
        let grew = i >= self.size;
        if grew {
            self.size = i + 1;
        }
        let (top, low) = self.split(i);
        self.ensure_leaf(top);
        self.leaves[top][low] = v;
        grew
    }
}
