//! The list contract implemented by [`IntSequence`].

use crate::error::Result;
use crate::sequence::IntSequence;

/// A positional list of `i32` values.
///
/// Index-based methods reject any index outside `[0, size)`, including on an
/// empty list. The end-removal methods are no-ops on an empty list.
pub trait IntList {
    /// Insert at position 0.
    fn add_front(&mut self, value: i32);

    /// Insert after the last element.
    fn add_back(&mut self, value: i32);

    /// Insert at `index`, which must address an existing element.
    fn add(&mut self, index: isize, value: i32) -> Result<()>;

    fn remove_front(&mut self);

    fn remove_back(&mut self);

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: isize) -> Result<i32>;

    fn get(&self, index: isize) -> Result<i32>;

    fn contains(&self, value: i32) -> bool;

    /// First index holding `value`, or `-1`.
    fn index_of(&self, value: i32) -> isize;

    fn is_empty(&self) -> bool;

    fn size(&self) -> usize;

    fn clear(&mut self);

    /// Iterate over the elements front to back.
    fn iter(&self) -> impl Iterator<Item = i32> + '_;
}

impl IntList for IntSequence {
    fn add_front(&mut self, value: i32) {
        IntSequence::add_front(self, value)
    }

    fn add_back(&mut self, value: i32) {
        IntSequence::add_back(self, value)
    }

    fn add(&mut self, index: isize, value: i32) -> Result<()> {
        IntSequence::add(self, index, value)
    }

    fn remove_front(&mut self) {
        IntSequence::remove_front(self)
    }

    fn remove_back(&mut self) {
        IntSequence::remove_back(self)
    }

    fn remove(&mut self, index: isize) -> Result<i32> {
        IntSequence::remove(self, index)
    }

    fn get(&self, index: isize) -> Result<i32> {
        IntSequence::get(self, index)
    }

    fn contains(&self, value: i32) -> bool {
        IntSequence::contains(self, value)
    }

    fn index_of(&self, value: i32) -> isize {
        IntSequence::index_of(self, value)
    }

    fn is_empty(&self) -> bool {
        IntSequence::is_empty(self)
    }

    fn size(&self) -> usize {
        IntSequence::size(self)
    }

    fn clear(&mut self) {
        IntSequence::clear(self)
    }

    fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.cursor()
    }
}
