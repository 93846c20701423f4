//! Single flat-array `SafeVector` with geometric growth. Used as the frozen,
//! read-heavy runtime backing after `build()`.

use super::safe::{bounds_error, SafeVector};
use crate::error::{Error, Result};

/// A `SafeVector` backed by a single `Vec<i32>`, resized by a geometric
/// growth factor whenever a write lands past the current length.
#[derive(Debug, Clone)]
pub struct ContiguousVector {
    data: Vec<i32>,
    default: i32,
    growth_rate: f64,
}

impl ContiguousVector {
    /// Creates a vector with the given initial capacity and growth rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `initial_capacity < 1`, or
    /// [`Error::InvalidGrowthRate`] if `growth_rate <= 1.0`.
    pub fn with_capacity(initial_capacity: usize, growth_rate: f64, default: i32) -> Result<Self> {
        if initial_capacity < 1 {
            return Err(Error::InvalidCapacity(initial_capacity));
        }
        if !(growth_rate > 1.0) {
            return Err(Error::InvalidGrowthRate(growth_rate));
        }
        Ok(Self {
            data: vec![default; initial_capacity],
            default,
            growth_rate,
        })
    }

    #[inline]
    fn grown_len(&self, required: usize) -> usize {
        let target = (required as f64 * self.growth_rate).ceil() as usize;
        target.max(required + 1)
    }
}

impl SafeVector for ContiguousVector {
    fn default_value(&self) -> i32 {
        self.default
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn get(&self, i: usize) -> Result<i32> {
        self.data.get(i).copied().ok_or_else(|| bounds_error(i, self.data.len()))
    }

    fn set(&mut self, i: usize, v: i32) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(i) {
            Some(slot) => {
                *slot = v;
                Ok(())
            }
            None => Err(bounds_error(i, len)),
        }
    }

    fn safe_get(&self, i: usize) -> i32 {
        self.data.get(i).copied().unwrap_or(self.default)
    }

    fn safe_set(&mut self, i: usize, v: i32) -> bool {
        let grew = i >= self.data.len();
        if grew {
            let new_len = self.grown_len(i);
            self.data.resize(new_len, self.default);
        }
        self.data[i] = v;
        grew
    }
}
