//! Construction options for [`IntSequence`](crate::IntSequence).
//!
//! `SequenceOptions` carries the full configuration; `SequenceOptionsOverride`
//! holds optional replacements that are merged in with
//! [`SequenceOptions::override_with`].

/// Capacity a new sequence starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// What `clear()` does with the backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Drop the buffer and allocate a fresh one of the initial capacity.
    #[default]
    Reallocate,
    /// Keep the current buffer and only reset the size.
    Retain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    /// Number of slots allocated up front and after a reallocating `clear()`.
    ///
    /// Zero is allowed: the first insertion grows the buffer to one slot.
    pub initial_capacity: usize,

    pub clear: ClearPolicy,

    /// Write zero into slots vacated by removals.
    pub zero_vacated: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            clear: ClearPolicy::default(),
            zero_vacated: true,
        }
    }
}

impl SequenceOptions {
    /// Replace every field that is set in `other`.
    pub fn override_with(&mut self, other: &SequenceOptionsOverride) {
        if let Some(initial_capacity) = other.initial_capacity {
            self.initial_capacity = initial_capacity;
        }
        if let Some(clear) = other.clear {
            self.clear = clear;
        }
        if let Some(zero_vacated) = other.zero_vacated {
            self.zero_vacated = zero_vacated;
        }
    }

    /// Return a copy of `self` with `other` applied.
    pub fn merged(mut self, other: &SequenceOptionsOverride) -> Self {
        self.override_with(other);
        self
    }
}

/// Partial [`SequenceOptions`]; `None` keeps the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceOptionsOverride {
    pub initial_capacity: Option<usize>,
    pub clear: Option<ClearPolicy>,
    pub zero_vacated: Option<bool>,
}
