#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Core of `intlist`: a contiguous, growable list of `i32`.
//!
//! [`IntSequence`] keeps its elements in a single boxed slice, shifting them
//! in place on positional insertion and removal and doubling the buffer when
//! it fills up. [`Cursor`] gives forward, one-shot iteration with an explicit
//! `has_next` / `next_value` protocol, and [`IntList`] is the list contract
//! the sequence implements.
//!
//! ```
//! use intlist_core::{Error, IntSequence};
//!
//! let mut seq = IntSequence::new();
//! seq.add_back(1);
//! seq.add_back(2);
//! seq.add_front(0);
//! assert_eq!(seq.as_slice(), &[0, 1, 2]);
//!
//! assert_eq!(seq.remove(1), Ok(1));
//! assert_eq!(seq.get(5), Err(Error::IndexOutOfRange { index: 5, size: 2 }));
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod cursor;
pub mod error;
pub mod int_list;
pub mod options;
pub mod sequence;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use int_list::IntList;
pub use options::{ClearPolicy, DEFAULT_INITIAL_CAPACITY, SequenceOptions, SequenceOptionsOverride};
pub use sequence::IntSequence;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_grow() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
