//! `SafeVector` and its two concrete backings.
//!
//! [`ChunkedVector`] minimizes slack while a dictionary is being built;
//! [`ContiguousVector`] is a flat, fast array used once the automaton is
//! frozen. [`crate::store::NodeStore`] owns five of one or the other and
//! switches from chunked to contiguous exactly once, in `build()`.

mod chunked;
mod contiguous;
mod safe;

pub use chunked::ChunkedVector;
pub use contiguous::ContiguousVector;
pub use safe::SafeVector;

#[cfg(test)]
mod tests;
