//! Error types for `lowmem-ac`.
//!
//! A single unified error type covers the three error kinds the automaton
//! can raise: argument errors (bad input), state errors (operation invalid
//! for the automaton's current build stage) and bounds errors (an internal
//! invariant violation that should be unreachable in correct internal use).

use thiserror::Error;

/// Result type alias for automaton operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or using an automaton.
///
/// Each variant carries a short stable code (`AC-XXX`) for log correlation,
/// printed as part of the `Display` message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An empty key was passed to `add` (AC-001).
    #[error("[AC-001] key must not be empty")]
    EmptyKey,

    /// The automaton was already built; mutation is no longer allowed (AC-002).
    #[error("[AC-002] automaton is already built and cannot be modified")]
    AlreadyBuilt,

    /// `parse` was called before `build` (AC-003).
    #[error("[AC-003] automaton must be built before it can be parsed")]
    NotBuilt,

    /// Case folding changed the code-unit length of a key under
    /// `CASE_INSENSITIVE`, which would break the length-based match-start
    /// derivation used by the string façade (AC-004).
    #[error(
        "[AC-004] case-insensitive normalization changed the length of key {key:?} \
         ({original} code units -> {normalized} code units); \
         add it through the generic façade instead"
    )]
    CaseFoldLengthMismatch {
        /// The offending key.
        key: String,
        /// Code-unit length of the key before normalization.
        original: usize,
        /// Code-unit length of the key after normalization.
        normalized: usize,
    },

    /// A `ContiguousVector` was built with a growth rate that would never
    /// grow the backing array (AC-005).
    #[error("[AC-005] growth rate must be greater than 1.0, got {0}")]
    InvalidGrowthRate(f64),

    /// A vector was built with a non-positive initial capacity (AC-006).
    #[error("[AC-006] initial capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// A direct (non-safe) access landed outside the backing store.
    ///
    /// Unreachable in correct internal use; kept as a typed variant rather
    /// than a panic so an embedder can match on it defensively (AC-007).
    #[error("[AC-007] index {index} out of bounds (size {size})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The size of the backing store at the time of access.
        size: usize,
    },
}

impl Error {
    /// Returns the stable short code (e.g. `"AC-001"`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyKey => "AC-001",
            Self::AlreadyBuilt => "AC-002",
            Self::NotBuilt => "AC-003",
            Self::CaseFoldLengthMismatch { .. } => "AC-004",
            Self::InvalidGrowthRate(_) => "AC-005",
            Self::InvalidCapacity(_) => "AC-006",
            Self::IndexOutOfBounds { .. } => "AC-007",
        }
    }

    /// Returns true if a caller could plausibly recover by changing its
    /// own behavior (as opposed to an internal invariant violation).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::IndexOutOfBounds { .. })
    }
}
