//! intlist - A contiguous, growable list of integers
//!
//! # Overview
//!
//! `intlist` provides [`IntSequence`], a list of `i32` values stored in a
//! single contiguous buffer. It supports:
//!
//! - Insertion at the front, at the back, or before an existing index
//! - Removal from either end (silently doing nothing when empty) or by index
//! - Indexed lookup and linear search
//! - Forward, one-shot iteration through a [`Cursor`]
//!
//! The buffer doubles whenever it fills up and never shrinks on removal.
//!
//! # Quick Start
//!
//! ```
//! use intlist::{Error, IntSequence};
//!
//! let mut seq = IntSequence::new();
//! seq.add_back(1);
//! seq.add_back(2);
//! seq.add_front(0);
//! assert_eq!(seq.to_string(), "[0, 1, 2]");
//!
//! // Index-based operations report out-of-range indices.
//! assert_eq!(seq.remove(1), Ok(1));
//! assert_eq!(seq.get(-1), Err(Error::IndexOutOfRange { index: -1, size: 2 }));
//!
//! // `add` only inserts before an existing element; use `add_back` to append.
//! assert!(seq.add(2, 9).is_err());
//!
//! seq.clear();
//! assert!(seq.is_empty());
//! ```
//!
//! # Iteration
//!
//! A [`Cursor`] exposes an explicit `has_next` / `next_value` protocol and is
//! also a regular [`Iterator`]:
//!
//! ```
//! use intlist::{Error, IntSequence};
//!
//! let seq: IntSequence = [5, 6, 7].into_iter().collect();
//!
//! let mut cursor = seq.cursor();
//! while cursor.has_next() {
//!     let _ = cursor.next_value();
//! }
//! assert_eq!(cursor.next_value(), Err(Error::NoMoreElements));
//!
//! let doubled: Vec<i32> = (&seq).into_iter().map(|v| v * 2).collect();
//! assert_eq!(doubled, [10, 12, 14]);
//! ```
//!
//! # Options
//!
//! ```
//! use intlist::{ClearPolicy, IntSequence, SequenceOptions, SequenceOptionsOverride};
//!
//! let options = SequenceOptions::default().merged(&SequenceOptionsOverride {
//!     initial_capacity: Some(2),
//!     clear: Some(ClearPolicy::Retain),
//!     ..Default::default()
//! });
//! let mut seq = IntSequence::with_options(options);
//! seq.extend([1, 2, 3]);
//! assert_eq!(seq.capacity(), 4);
//!
//! seq.clear();
//! assert_eq!(seq.capacity(), 4);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub use intlist_core::{
    ClearPolicy, Cursor, DEFAULT_INITIAL_CAPACITY, Error, IntList, IntSequence, Result,
    SequenceOptions, SequenceOptionsOverride,
};
