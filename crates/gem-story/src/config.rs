//! Configuration for a story session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Narrowest width the text layout accepts.
pub const MIN_WIDTH: usize = 20;

/// Configuration for a story session.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// RNG seed for reproducible rolls. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Column width for wrapped text.
    pub width: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            width: 88,
        }
    }
}

impl StoryConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the text width (at least [`MIN_WIDTH`]).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    /// The configured seed, or a fresh one from OS entropy.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Build the session RNG from [`Self::resolve_seed`].
    pub fn rng(&self) -> (u64, StdRng) {
        let seed = self.resolve_seed();
        (seed, StdRng::seed_from_u64(seed))
    }
}
