//! Error types for index operations.
//!
//! ## Design
//!
//! Every fallible operation returns its error synchronously; nothing is
//! retried internally and no failure is fatal to the process. A rejected
//! insert or remove leaves the index exactly as it was.
//!
//! There is no invalid-argument case: the index is reached through
//! `&self`/`&mut self` and the comparator is a type parameter, so a missing
//! handle or callback cannot be expressed.

use thiserror::Error;

/// Errors returned by [`SkipIndex`](crate::SkipIndex) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An element comparing equal to the candidate is already present.
    ///
    /// The index holds at most one element per key; the rejected candidate
    /// is not inserted and the index is unchanged.
    #[error("an equal element is already present")]
    Exists,

    /// No element compares equal to the probe.
    #[error("no element compares equal to the probe")]
    NotFound,

    /// The index was built with a hard element bound and is full.
    ///
    /// Carries the bound the index was built with. Only indexes created
    /// through the `bounded` constructors can return this.
    #[error("index is at capacity ({0} elements)")]
    AtCapacity(usize),
}

/// Convenience alias for results of index operations.
pub type Result<T> = core::result::Result<T, Error>;

// ============================================================================
// Unit Tests
// ============================================================================
