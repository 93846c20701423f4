//! [`StringMatcher`]: a façade where each key is also its own value, so
//! only a dummy payload needs to live in the automaton — matched text is
//! read straight back out of the caller's input slice.

use super::Options;
use crate::automaton::AutomatonCore;
use crate::config::BuildConfig;
use crate::error::{Error, Result};

/// One match: the substring of the original input that matched a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringMatch<'a> {
    /// Byte offset of the match start in the input passed to [`StringMatcher::parse`].
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched substring itself, i.e. `&input[start..end]`.
    pub text: &'a str,
}

/// A multi-pattern matcher where the dictionary keys are also the values
/// reported on match.
pub struct StringMatcher {
    core: AutomatonCore,
}

impl StringMatcher {
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
        }
    }

    /// Adds `key` to the dictionary. A no-op besides validation for an
    /// exact duplicate (its dummy payload is simply rewritten).
    ///
    /// # Errors
    /// [`Error::EmptyKey`] if `key` is empty, [`Error::AlreadyBuilt`] if
    /// [`Self::build`] was already called, [`Error::CaseFoldLengthMismatch`]
    /// if `CASE_INSENSITIVE` folding would change `key`'s code-unit length
    /// (use [`crate::ValueMatcher`] instead for such keys).
    pub fn add(&mut self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let original = key.encode_utf16().count();
        let units = self.core.normalize(key);
        if units.len() != original {
            return Err(Error::CaseFoldLengthMismatch {
                key: key.to_string(),
                original,
                normalized: units.len(),
            });
        }
        self.core.add_entry(&units, 0)?;
        Ok(())
    }

    /// Adds every key yielded by `keys`, stopping at the first error.
    pub fn add_all<I, S>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref())?;
        }
        Ok(())
    }

    /// Computes failure/prefix links. No further `add` calls are allowed afterward.
    ///
    /// # Errors
    /// [`Error::AlreadyBuilt`] if already built.
    pub fn build(&mut self) -> Result<()> {
        self.core.build()
    }

    /// Returns every match in `input`, lazily, ordered by end position
    /// ascending and, within a position, by match length descending.
    ///
    /// # Errors
    /// [`Error::NotBuilt`] if [`Self::build`] has not been called yet.
    pub fn parse<'a>(&'a self, input: &'a str) -> Result<impl Iterator<Item = StringMatch<'a>> + 'a> {
        if !self.core.is_built() {
            return Err(Error::NotBuilt);
        }
        Ok(self.core.matches(input).map(move |m| StringMatch {
            start: m.start,
            end: m.end,
            text: &input[m.start..m.end],
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
