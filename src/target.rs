//! Turn input: target coordinates and player commands.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::level::Level;

/// A cell on a board, indexed (row, column, level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
    pub level: usize,
}

impl Coordinate {
    pub const fn new(row: usize, column: usize, level: usize) -> Self {
        Coordinate { row, column, level }
    }

    pub fn on(row: usize, column: usize, level: Level) -> Self {
        Coordinate::new(row, column, level.index())
    }
}

impl From<(usize, usize, usize)> for Coordinate {
    fn from((row, column, level): (usize, usize, usize)) -> Self {
        Coordinate::new(row, column, level)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.column, self.level)
    }
}

/// Accepts exactly three comma-separated non-negative integers, optionally
/// wrapped in one pair of parentheses: `1,2,0` or `(1, 2, 0)`.
///
/// Range checks against a board happen later, in `BoardGrid::fire`.
impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = match (s.strip_prefix('('), s.strip_suffix(')')) {
            (Some(_), Some(_)) => &s[1..s.len() - 1],
            (None, None) => s,
            _ => return Err(GameError::InvalidCoordinates),
        };
        let mut parts = inner.split(',').map(|p| p.trim().parse::<usize>());
        let mut next = || match parts.next() {
            Some(Ok(v)) => Ok(v),
            _ => Err(GameError::InvalidCoordinates),
        };
        let coord = Coordinate::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(GameError::InvalidCoordinates);
        }
        Ok(coord)
    }
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fire at a coordinate on the opponent's board.
    Fire(Coordinate),
    /// Reveal the acting player's own board.
    Show,
    /// Blank the display.
    Hide,
    /// Abandon the session.
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("show") {
            Ok(Command::Show)
        } else if s.eq_ignore_ascii_case("hide") {
            Ok(Command::Hide)
        } else if s.eq_ignore_ascii_case("quit") {
            Ok(Command::Quit)
        } else {
            s.parse().map(Command::Fire)
        }
    }
}
