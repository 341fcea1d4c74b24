//! The ordered container engine.
//!
//! ## Architecture
//!
//! The index is a leveled linked structure over slab storage:
//!
//! - **Slab-based storage**: node records live in a `slab::Slab` and link
//!   to each other by `usize` slab key, never by reference
//! - **Leveled chains**: level 0 is the complete sorted chain; every level
//!   above it is a sparse shortcut over the one below
//! - **Randomized balance**: each node draws its height once at insertion
//!   from a geometric distribution (promotion probability 1/4, capped at
//!   [`MAX_HEIGHT`])
//!
//! ```text
//! level 3:  head ──────────────────────────────▶ 50 ──────────▶ ∅
//! level 2:  head ──────────▶ 20 ───────────────▶ 50 ──────────▶ ∅
//! level 1:  head ──▶ 10 ──▶ 20 ──────▶ 35 ─────▶ 50 ──▶ 60 ──▶ ∅
//! level 0:  head ──▶ 10 ──▶ 20 ──▶ 25 ──▶ 35 ──▶ 50 ──▶ 60 ──▶ ∅
//! ```
//!
//! ## Components
//!
//! - [`IndexNode`]: value plus forward tower and level-0 back-link
//! - [`LevelGenerator`]: per-instance seedable height source
//! - [`SkipIndex`]: the container itself
//!
//! ## Performance
//!
//! | Operation           | Complexity        |
//! |---------------------|-------------------|
//! | Insert              | expected O(log n) |
//! | Remove by probe     | expected O(log n) |
//! | Lookup by probe     | expected O(log n) |
//! | Pop smallest        | O(height)         |
//! | Pop largest         | O(n)              |
//! | Ascending traversal | O(n)              |
//!
//! ## Example
//!
//! ```
//! use skipindex::SkipIndex;
//!
//! let mut index = SkipIndex::new();
//! for word in ["pear", "apple", "quince"] {
//!     index.insert(word).unwrap();
//! }
//!
//! assert_eq!(index.front(), Some(&"apple"));
//! let sorted: Vec<&str> = index.iter().copied().collect();
//! assert_eq!(sorted, vec!["apple", "pear", "quince"]);
//! ```

pub mod level;
pub mod list;
pub mod node;

pub use level::{LevelGenerator, MAX_HEIGHT};
pub use list::{IntoIter, Iter, SkipIndex};
pub use node::IndexNode;
