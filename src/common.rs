//! Common types for Submarines: fire signals and game errors.

use alloc::string::String;

use crate::level::Level;
use crate::vessel::VesselKind;

/// Outcome of firing on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// The cell was empty.
    Miss,
    /// A vessel was damaged but is still afloat.
    Hit,
    /// A vessel was destroyed.
    Kill,
    /// The flagship was destroyed; the game is over.
    End,
}

impl core::fmt::Display for Signal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Signal::Miss => "MISS",
            Signal::Hit => "HIT",
            Signal::Kill => "KILL",
            Signal::End => "END",
        };
        write!(f, "signal.{}", name)
    }
}

/// Errors returned by board construction, placement and targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board was configured with a level count other than three.
    InvalidLevels(usize),
    /// Board rows or columns are below the playable minimum.
    BoardTooSmall { rows: usize, columns: usize },
    /// Fleet catalog does not hold exactly one flagship.
    FlagshipCount(usize),
    /// Identifier does not name a vessel type.
    InvalidVesselType(String),
    /// Summed count of one vessel kind does not fit in a `usize`.
    FleetTooLarge(VesselKind),
    /// Fleet list could not be decoded.
    InvalidFleetSpec(String),
    /// Random placement gave up on this level.
    Overcrowded(Level),
    /// Manual placement does not fit on the board.
    OutOfBounds,
    /// Manual placement overlaps another vessel.
    Overlap,
    /// An occupied cell names a vessel missing from the registry.
    UnknownVessel,
    /// Target is malformed or outside the board.
    InvalidCoordinates,
    /// The session has already ended.
    SessionOver,
}

impl GameError {
    /// Per-turn errors leave the session untouched and can be retried.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidCoordinates | GameError::SessionOver)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidLevels(n) => write!(f, "Board levels must be 3, got {}", n),
            GameError::BoardTooSmall { rows, columns } => write!(
                f,
                "Board {}x{} is too small, rows and columns must be at least 4",
                rows, columns
            ),
            GameError::FlagshipCount(n) => {
                write!(f, "Fleet must hold exactly one general, got {}", n)
            }
            GameError::InvalidVesselType(name) => write!(f, "{} is not a valid vessel type", name),
            GameError::FleetTooLarge(kind) => write!(f, "Too many {} vessels requested", kind),
            GameError::InvalidFleetSpec(spec) => write!(f, "Cannot read fleet entry '{}'", spec),
            GameError::Overcrowded(level) => write!(
                f,
                "{} seems to be too crowded. Board is too small for so many vessels",
                level
            ),
            GameError::OutOfBounds => write!(f, "Vessel placement is out of bounds"),
            GameError::Overlap => write!(f, "Vessel placement overlaps with another vessel"),
            GameError::UnknownVessel => write!(f, "Cell names a vessel that is no longer afloat"),
            GameError::InvalidCoordinates => write!(f, "Invalid coordinates"),
            GameError::SessionOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
