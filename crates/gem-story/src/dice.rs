//! Small polyhedral dice.
//!
//! Event narration only ever needs two rolls: a d3 shifted down to 0..=2 for
//! inspiration and lessons, and a d6 for arcane echoes.

use rand::Rng;
use rand::rngs::StdRng;

/// A die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    /// Three-sided die.
    D3,
    /// Six-sided die.
    D6,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> i32 {
        match self {
            Self::D3 => 3,
            Self::D6 => 6,
        }
    }

    /// Roll once, returning a value in `1..=sides`.
    pub fn roll(self, rng: &mut StdRng) -> i32 {
        rng.random_range(1..=self.sides())
    }

    /// Roll once, returning a value in `0..sides`.
    pub fn roll_from_zero(self, rng: &mut StdRng) -> i32 {
        self.roll(rng) - 1
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
