//! Error types for sequence operations.
//!
//! Only index-based operations and cursor advancement can fail. Everything
//! else on [`IntSequence`](crate::IntSequence) is total.

use thiserror::Error;

/// Errors reported by [`IntSequence`](crate::IntSequence) and its
/// [`Cursor`](crate::Cursor).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index-based operation (`add`, `remove`, `get`) received an index
    /// outside `[0, size)`, or the sequence was empty.
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: isize, size: usize },

    /// The cursor has already yielded every element.
    #[error("no more elements")]
    NoMoreElements,
}

pub type Result<T> = core::result::Result<T, Error>;
