//! The automaton engine: a modified double-array trie that becomes an
//! Aho-Corasick matcher once [`AutomatonCore::build`] computes failure and
//! dictionary-suffix links. Shared by every façade in [`crate::facade`].

mod build;
mod core;
mod insert;
mod matcher;

pub(crate) use core::AutomatonCore;
pub(crate) use matcher::RawMatch;
