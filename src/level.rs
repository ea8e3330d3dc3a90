//! The three planes of a board.

use core::fmt;
use rand::Rng;

/// Number of levels every board carries.
pub const NUM_LEVELS: usize = 3;

/// A board plane, ordered from the sea floor up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    Deep,
    SeaLevel,
    Air,
}

impl Level {
    /// All levels in index order.
    pub const ALL: [Level; NUM_LEVELS] = [Level::Deep, Level::SeaLevel, Level::Air];

    /// Index of the level along the board's third axis.
    pub fn index(self) -> usize {
        match self {
            Level::Deep => 0,
            Level::SeaLevel => 1,
            Level::Air => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Level> {
        Self::ALL.get(index).copied()
    }

    /// Uniformly random level.
    pub fn random<R: Rng>(rng: &mut R) -> Level {
        Self::ALL[rng.random_range(0..NUM_LEVELS)]
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Deep => "Deep",
            Level::SeaLevel => "Sea_level",
            Level::Air => "Air",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
