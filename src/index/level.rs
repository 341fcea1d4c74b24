//! Random height generation for index nodes.
//!
//! ## Design
//!
//! Each node's height is drawn once at insertion from a geometric
//! distribution: starting at 1, every additional level is granted with
//! probability 1/4, capped at [`MAX_HEIGHT`]. Expected height is
//! 1/(1 - 1/4) ≈ 1.33 links per node, which keeps the upper levels sparse
//! enough for the expected O(log n) descent.
//!
//! ## Randomness
//!
//! The generator owns its RNG. There is no process-global random state:
//! every index instance carries its own [`LevelGenerator`], so independent
//! instances never contend and tests running in parallel stay isolated.
//! Deterministic tests seed the generator explicitly via
//! [`LevelGenerator::with_seed`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Maximum height of any node, and of the head sentinel's link array.
///
/// With promotion probability 1/4, 32 levels comfortably cover element
/// counts far beyond practical memory. Fixed at compile time; changing it
/// would change the structure's balance characteristics.
pub const MAX_HEIGHT: usize = 32;

/// Probability of granting one more level: `BRANCH_NUM / BRANCH_DEN` = 1/4.
const BRANCH_NUM: u32 = 1;
const BRANCH_DEN: u32 = 4;

/// Draws node heights from a geometric distribution.
///
/// One generator per index instance. Clone-able so a duplicated index
/// carries its own independent generator state.
///
/// # Example
///
/// ```
/// use skipindex::{LevelGenerator, MAX_HEIGHT};
///
/// let mut levels = LevelGenerator::with_seed(7);
/// let height = levels.random_height();
/// assert!((1..=MAX_HEIGHT).contains(&height));
/// ```
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    rng: SmallRng,
}

impl LevelGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed.
    ///
    /// Same seed, same height sequence. Used by deterministic tests and by
    /// callers that need reproducible index shapes.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw a height in `1..=MAX_HEIGHT`.
    ///
    /// Each level above the first is granted with probability 1/4.
    pub fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < MAX_HEIGHT && self.rng.gen_ratio(BRANCH_NUM, BRANCH_DEN) {
            height += 1;
        }
        height
    }
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
