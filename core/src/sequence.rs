//! IntSequence: a contiguous, growable list of `i32`.
//!
//! The sequence owns a boxed slice whose length is the capacity. Only the
//! prefix `[0, size)` is meaningful; the tail holds stale (by default zeroed)
//! slots. Insertions and removals shift the live prefix in place, so front
//! and indexed operations cost O(size) while back insertion is amortized O(1)
//! thanks to doubling growth.

use core::fmt;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::options::{ClearPolicy, SequenceOptions};
use crate::{Box, vec};

#[derive(Clone)]
pub struct IntSequence {
    buffer: Box<[i32]>,
    size: usize,
    options: SequenceOptions,
}

fn alloc_buffer(capacity: usize) -> Box<[i32]> {
    vec![0; capacity].into_boxed_slice()
}

impl IntSequence {
    /// Create an empty sequence with the default options (capacity 10).
    pub fn new() -> Self {
        Self::with_options(SequenceOptions::default())
    }

    pub fn with_options(options: SequenceOptions) -> Self {
        Self {
            buffer: alloc_buffer(options.initial_capacity),
            size: 0,
            options,
        }
    }

    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated slots. Never decreases except through a
    /// reallocating [`clear`](Self::clear).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The live elements, in order.
    pub fn as_slice(&self) -> &[i32] {
        &self.buffer[..self.size]
    }

    /// Insert `value` at position 0, shifting every element one slot right.
    pub fn add_front(&mut self, value: i32) {
        self.reserve_one();
        self.buffer.copy_within(0..self.size, 1);
        self.buffer[0] = value;
        self.size += 1;
    }

    /// Append `value` after the last element.
    pub fn add_back(&mut self, value: i32) {
        self.reserve_one();
        self.buffer[self.size] = value;
        self.size += 1;
    }

    /// Insert `value` at `index`, shifting the element there (and everything
    /// after it) one slot right.
    ///
    /// `index` must address an existing element: inserting at `index ==
    /// size()` is rejected, use [`add_back`](Self::add_back) instead.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if the sequence is empty or `index` is not
    /// in `[0, size)`. The buffer may already have grown when this is
    /// reported.
    pub fn add(&mut self, index: isize, value: i32) -> Result<()> {
        self.reserve_one();
        let index = self.check_index("add", index)?;
        self.buffer.copy_within(index..self.size, index + 1);
        self.buffer[index] = value;
        self.size += 1;
        Ok(())
    }

    /// Remove the first element, if any. Does nothing on an empty sequence.
    pub fn remove_front(&mut self) {
        if self.is_empty() {
            return;
        }
        self.buffer.copy_within(1..self.size, 0);
        self.size -= 1;
        self.vacate(self.size);
    }

    /// Remove the last element, if any. Does nothing on an empty sequence.
    pub fn remove_back(&mut self) {
        if self.is_empty() {
            return;
        }
        self.size -= 1;
        self.vacate(self.size);
    }

    /// Remove and return the element at `index`, shifting later elements one
    /// slot left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if the sequence is empty or `index` is not
    /// in `[0, size)`.
    pub fn remove(&mut self, index: isize) -> Result<i32> {
        let index = self.check_index("remove", index)?;
        let removed = self.buffer[index];
        self.buffer.copy_within(index + 1..self.size, index);
        self.size -= 1;
        self.vacate(self.size);
        Ok(removed)
    }

    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if the sequence is empty or `index` is not
    /// in `[0, size)`.
    pub fn get(&self, index: isize) -> Result<i32> {
        let index = self.check_index("get", index)?;
        Ok(self.buffer[index])
    }

    pub fn contains(&self, value: i32) -> bool {
        self.position(value).is_some()
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Index of the first element equal to `value`, or `-1` when absent.
    pub fn index_of(&self, value: i32) -> isize {
        match self.position(value) {
            Some(index) => index as isize,
            None => -1,
        }
    }

    /// Reset to the empty state.
    ///
    /// With [`ClearPolicy::Reallocate`] the buffer is replaced by a fresh one
    /// of the initial capacity, so capacity may shrink here.
    pub fn clear(&mut self) {
        match self.options.clear {
            ClearPolicy::Reallocate => {
                tracing::debug!(
                    old_capacity = self.capacity(),
                    new_capacity = self.options.initial_capacity,
                    "clear: reallocating buffer"
                );
                self.buffer = alloc_buffer(self.options.initial_capacity);
            }
            ClearPolicy::Retain => {
                tracing::debug!(capacity = self.capacity(), "clear: retaining buffer");
                if self.options.zero_vacated {
                    self.buffer[..self.size].fill(0);
                }
            }
        }
        self.size = 0;
    }

    /// A forward, one-shot cursor over the current elements.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    fn check_index(&self, operation: &'static str, index: isize) -> Result<usize> {
        match usize::try_from(index) {
            Ok(i) if i < self.size => Ok(i),
            _ => {
                tracing::debug!(operation, index, size = self.size, "index out of range");
                Err(Error::IndexOutOfRange {
                    index,
                    size: self.size,
                })
            }
        }
    }

    #[inline(always)]
    fn vacate(&mut self, slot: usize) {
        if self.options.zero_vacated {
            self.buffer[slot] = 0;
        }
    }

    #[inline(always)]
    fn reserve_one(&mut self) {
        if self.size == self.capacity() {
            self.reserve_one_unchecked();
        }
    }

    #[cold]
    fn reserve_one_unchecked(&mut self) {
        debug_assert_eq!(self.size, self.capacity());
        let new_capacity = self
            .size
            .checked_mul(2)
            .expect("capacity overflow")
            .max(1);
        self.resize(new_capacity);
    }

    /// Move the contents into a new buffer of `new_capacity` slots.
    ///
    /// The whole old buffer is copied, stale tail included, not only the
    /// live prefix.
    fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        assert!(new_capacity >= old_capacity);
        let mut new_buffer = alloc_buffer(new_capacity);
        new_buffer[..old_capacity].copy_from_slice(&self.buffer);
        tracing::trace!(old_capacity, new_capacity, size = self.size, "grow");
        self.buffer = new_buffer;
    }
}

impl Default for IntSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for IntSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

// Capacity and stale slots are not part of a sequence's value.
impl PartialEq for IntSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntSequence {}

impl Extend<i32> for IntSequence {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add_back(value);
        }
    }
}

impl FromIterator<i32> for IntSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl From<&[i32]> for IntSequence {
    fn from(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a IntSequence {
    type Item = i32;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Cursor<'a> {
        self.cursor()
    }
}

static_assertions::assert_impl_all!(IntSequence: Send, Sync, Clone, Default);

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
