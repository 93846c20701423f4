//! `Storage`: a `SafeVector` that starts out chunked and is frozen to
//! contiguous exactly once.

use crate::error::Result;
use crate::vector::{ChunkedVector, ContiguousVector, SafeVector};

#[derive(Debug, Clone)]
pub(crate) enum Storage {
    Chunked(ChunkedVector),
    Contiguous(ContiguousVector),
}

impl Storage {
    pub(crate) fn chunked(chunk_size: usize, default: i32) -> Self {
        Self::Chunked(ChunkedVector::with_chunk_size(chunk_size, default))
    }

    pub(crate) fn freeze(&mut self, growth_rate: f64) {
        if let Self::Chunked(chunked) = self {
            let frozen = std::mem::replace(chunked, ChunkedVector::new(0)).into_contiguous(growth_rate);
            *self = Self::Contiguous(frozen);
        }
    }
}

impl SafeVector for Storage {
    fn default_value(&self) -> i32 {
        match self {
            Self::Chunked(v) => v.default_value(),
            Self::Contiguous(v) => v.default_value(),
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Chunked(v) => v.size(),
            Self::Contiguous(v) => v.size(),
        }
    }

    fn get(&self, i: usize) -> Result<i32> {
        match self {
            Self::Chunked(v) => v.get(i),
            Self::Contiguous(v) => v.get(i),
        }
    }

    fn set(&mut self, i: usize, v: i32) -> Result<()> {
        match self {
            Self::Chunked(s) => s.set(i, v),
            Self::Contiguous(s) => s.set(i, v),
        }
    }

    fn safe_get(&self, i: usize) -> i32 {
        match self {
            Self::Chunked(v) => v.safe_get(i),
            Self::Contiguous(v) => v.safe_get(i),
        }
    }

    fn safe_set(&mut self, i: usize, v: i32) -> bool {
        match self {
            Self::Chunked(s) => s.safe_set(i, v),
            Self::Contiguous(s) => s.safe_set(i, v),
        }
    }
}
