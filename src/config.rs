use crate::common::GameError;
use crate::fleet::FleetCatalog;
use crate::level::NUM_LEVELS;

/// Smallest row and column extent the shipped fleet fits in.
pub const MIN_EXTENT: usize = 4;
pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLUMNS: usize = 4;

/// Board extents along (row, column, level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
    pub levels: usize,
}

impl Dimensions {
    /// Validated dimensions. Levels must be exactly three, rows and columns at
    /// least [`MIN_EXTENT`].
    pub fn new(rows: usize, columns: usize, levels: usize) -> Result<Self, GameError> {
        if levels != NUM_LEVELS {
            return Err(GameError::InvalidLevels(levels));
        }
        if rows < MIN_EXTENT || columns < MIN_EXTENT {
            return Err(GameError::BoardTooSmall { rows, columns });
        }
        Ok(Dimensions {
            rows,
            columns,
            levels,
        })
    }

    /// Total number of cells across all levels.
    pub fn volume(&self) -> usize {
        self.rows * self.columns * self.levels
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            levels: NUM_LEVELS,
        }
    }
}

/// Everything needed to set up both boards of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub dimensions: Dimensions,
    pub fleet: FleetCatalog,
}

impl SessionConfig {
    pub fn new(dimensions: Dimensions, fleet: FleetCatalog) -> Self {
        Self { dimensions, fleet }
    }
}
