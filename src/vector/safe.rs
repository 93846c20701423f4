//! The `SafeVector` contract shared by the chunked and contiguous backings.

use crate::error::{Error, Result};

/// An unbounded, dynamically growing store of 32-bit integers with a fixed
/// default value for indices that have never been written.
///
/// `get`/`set` are the "unsafe" (bounds-checked but non-growing) half of the
/// contract: they return [`Error::IndexOutOfBounds`] rather than growing the
/// store, and correct internal callers only ever reach for them after a
/// `safe_set` (directly or transitively) has already guaranteed the index is
/// in range. `safe_get`/`safe_set` are the growing half used everywhere else.
pub trait SafeVector {
    /// Returns the default value returned by `safe_get` for unwritten indices.
    fn default_value(&self) -> i32;

    /// One past the highest index ever written via `safe_set`.
    fn size(&self) -> usize;

    /// Reads the value at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `i >= size()`.
    fn get(&self, i: usize) -> Result<i32>;

    /// Writes `v` at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `i >= size()`.
    fn set(&mut self, i: usize, v: i32) -> Result<()>;

    /// Reads the value at `i`, or the default value if `i >= size()`.
    fn safe_get(&self, i: usize) -> i32;

    /// Writes `v` at `i`, growing the store so `i < size()` afterwards.
    ///
    /// Returns `true` if the store had to grow to accommodate `i`.
    fn safe_set(&mut self, i: usize, v: i32) -> bool;
}

pub(crate) fn bounds_error(index: usize, size: usize) -> Error {
    Error::IndexOutOfBounds { index, size }
}
