//! Boundary types for the index.
//!
//! Everything the caller injects into or receives from the container lives
//! here: the ordering comparator and the error taxonomy. The predicate used
//! by [`SkipIndex::find_where`](crate::SkipIndex::find_where) and the clone
//! function used by
//! [`SkipIndex::duplicate_with`](crate::SkipIndex::duplicate_with) are plain
//! closures and need no named types.
//!
//! ## Types
//!
//! - [`Compare`]: total order injected at construction, fixed for the
//!   index's lifetime
//! - [`Natural`]: the default comparator, `T: Ord`
//! - [`Error`] / [`Result`]: the synchronous error surface

mod compare;
mod error;

// Re-export all types at module level
pub use compare::{Compare, Natural};
pub use error::{Error, Result};
