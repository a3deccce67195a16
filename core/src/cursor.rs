//! Forward, one-shot iteration over an [`IntSequence`].
//!
//! A cursor holds a shared borrow of its sequence, so the sequence cannot be
//! mutated while the cursor is alive.

use core::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::sequence::IntSequence;

#[derive(Debug)]
pub struct Cursor<'a> {
    sequence: &'a IntSequence,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(sequence: &'a IntSequence) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }

    /// Whether [`next_value`](Self::next_value) would succeed.
    pub fn has_next(&self) -> bool {
        self.position < self.sequence.size()
    }

    /// Yield the next element and advance.
    ///
    /// # Errors
    ///
    /// [`Error::NoMoreElements`] once every element has been yielded, and on
    /// every call after that.
    pub fn next_value(&mut self) -> Result<i32> {
        let value = *self
            .sequence
            .as_slice()
            .get(self.position)
            .ok_or(Error::NoMoreElements)?;
        self.position += 1;
        Ok(value)
    }
}

impl Iterator for Cursor<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next_value().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.size().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl FusedIterator for Cursor<'_> {}

static_assertions::assert_impl_all!(Cursor<'static>: ExactSizeIterator, FusedIterator);
