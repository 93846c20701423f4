//! [`ValueMatcher`]: a façade that associates each key with an arbitrary
//! external value, stored in a side table indexed by the automaton's `i32`
//! node payload.

use super::Options;
use crate::automaton::AutomatonCore;
use crate::config::BuildConfig;
use crate::error::{Error, Result};

/// One match: the byte range in the input and the value associated with
/// the key that matched there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueMatch<'a, V> {
    /// Byte offset of the match start in the input passed to [`ValueMatcher::parse`].
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The value associated with the matching key.
    pub value: &'a V,
}

/// A multi-pattern matcher associating each key with an arbitrary value.
///
/// Values live in a side table (`Vec<V>`), indexed by the `i32` payload the
/// automaton stores at each key's terminal node. Re-adding an existing key
/// with a new value leaves the automaton pointing at the original slot and
/// simply appends an orphaned entry to the table (an accepted memory
/// trade-off: detecting and reclaiming it would require a second lookup on
/// every `add`).
pub struct ValueMatcher<V> {
    core: AutomatonCore,
    values: Vec<V>,
}

impl<V> ValueMatcher<V> {
    /// Creates an empty matcher with the default [`BuildConfig`].
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_config(options, BuildConfig::default())
    }

    /// Creates an empty matcher with explicit storage tuning.
    #[must_use]
    pub fn with_config(options: Options, config: BuildConfig) -> Self {
        Self {
            core: AutomatonCore::new(options.is_case_insensitive(), options.is_whole_words_only(), config),
            values: Vec::new(),
        }
    }

    /// Adds `key` associated with `value`.
    ///
    /// # Errors
    /// [`Error::EmptyKey`] if `key` is empty, [`Error::AlreadyBuilt`] if
    /// [`Self::build`] was already called.
    pub fn add(&mut self, key: &str, value: V) -> Result<()> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let units = self.core.normalize(key);
        let slot = i32::try_from(self.values.len()).map_err(|_| Error::IndexOutOfBounds {
            index: self.values.len(),
            size: i32::MAX as usize,
        })?;
        self.core.add_entry(&units, slot)?;
        self.values.push(value);
        Ok(())
    }

    /// Adds every `(key, value)` pair yielded by `entries`, stopping at the
    /// first error.
    pub fn add_all<I, S>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
    {
        for (key, value) in entries {
            self.add(key.as_ref(), value)?;
        }
        Ok(())
    }

    /// Computes failure/prefix links. No further `add`/`replace` calls are
    /// allowed afterward.
    ///
    /// # Errors
    /// [`Error::AlreadyBuilt`] if already built.
    pub fn build(&mut self) -> Result<()> {
        self.core.build()
    }

    /// Returns the value associated with `key`, if present.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&V> {
        let units = self.core.normalize(key);
        self.core.value_of(&units).map(|slot| &self.values[slot as usize])
    }

    /// Overwrites the value for an existing `key` in place, or inserts it
    /// fresh when `key` is absent and `insert_on_fail` is set. Returns
    /// whether an existing key's value was overwritten (`true`) versus a
    /// fresh insert or no-op (`false`).
    ///
    /// # Errors
    /// [`Error::AlreadyBuilt`] if [`Self::build`] was already called,
    /// [`Error::EmptyKey`] if `key` is empty.
    pub fn replace(&mut self, key: &str, value: V, insert_on_fail: bool) -> Result<bool> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let units = self.core.normalize(key);
        let slot = i32::try_from(self.values.len()).map_err(|_| Error::IndexOutOfBounds {
            index: self.values.len(),
            size: i32::MAX as usize,
        })?;
        if self.core.try_replace(&units, slot)? {
            self.values.push(value);
            Ok(true)
        } else if insert_on_fail {
            self.core.add_entry(&units, slot)?;
            self.values.push(value);
            Ok(false)
        } else {
            Ok(false)
        }
    }

    /// Returns every match in `input`, lazily, ordered by end position
    /// ascending and, within a position, by match length descending.
    ///
    /// # Errors
    /// [`Error::NotBuilt`] if [`Self::build`] has not been called yet.
    pub fn parse<'a>(&'a self, input: &'a str) -> Result<impl Iterator<Item = ValueMatch<'a, V>> + 'a> {
        if !self.core.is_built() {
            return Err(Error::NotBuilt);
        }
        Ok(self.core.matches(input).map(move |m| ValueMatch {
            start: m.start,
            end: m.end,
            value: &self.values[m.value as usize],
        }))
    }

    /// Whether `key` is present, at any build stage.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.core.contains(&self.core.normalize(key))
    }

    /// Total node count, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.core.node_count() as usize
    }

    /// Number of distinct keys added.
    #[must_use]
    pub fn len(&self) -> usize {
        self.core.pattern_count() as usize
    }

    /// Whether no keys have been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether [`Self::build`] has been called.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.core.is_built()
    }
}
