//! # `lowmem-ac`
//!
//! A low-memory Aho-Corasick multi-pattern string matcher backed by a
//! modified double-array trie.
//!
//! Every automaton node occupies five `i32` fields (`base`, `parent`,
//! `value`, plus two fields reused across the node's lifetime for sibling
//! chains and, after [`StringMatcher::build`]/[`ValueMatcher::build`],
//! failure and dictionary-suffix links). Peak construction memory runs
//! roughly 20% above steady state; no per-match allocation happens on the
//! [`StringMatcher::parse`]/[`ValueMatcher::parse`] hot path.
//!
//! Two façades share one engine:
//!
//! - [`StringMatcher`] — a key is its own value; only the key's length is
//!   stored, so `add("cat")` costs nothing beyond the trie nodes themselves.
//! - [`ValueMatcher`] — a key is associated with an arbitrary external value
//!   held in a side table.
//!
//! ## Quick start
//!
//! ```
//! use lowmem_ac::{Options, StringMatcher};
//!
//! let mut matcher = StringMatcher::new(Options::new());
//! matcher.add_all(["bobcat", "cat", "at"]).unwrap();
//! matcher.build().unwrap();
//!
//! let found: Vec<_> = matcher
//!     .parse("I have a bobcat")
//!     .unwrap()
//!     .map(|m| (m.start, m.end, m.text))
//!     .collect();
//! assert_eq!(found, vec![(9, 15, "bobcat"), (12, 15, "cat"), (13, 15, "at")]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod automaton;
mod cache;
pub mod config;
mod error;
mod facade;
mod store;
#[cfg(test)]
mod test_support;
mod vector;

pub use config::BuildConfig;
pub use error::{Error, Result};
pub use facade::{Options, StringMatch, StringMatcher, ValueMatch, ValueMatcher};
