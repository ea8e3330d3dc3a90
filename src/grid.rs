//! A player's 3D board: vessel placement and fire resolution.
//!
//! Cells hold an optional [`VesselId`] into the board's vessel registry, so a
//! multi-cell vessel is stored once and referenced by every cell it covers.
//! When a vessel is destroyed its registry slot is emptied and every cell
//! naming it is cleared.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{GameError, Signal};
use crate::config::Dimensions;
use crate::fleet::FleetCatalog;
use crate::level::Level;
use crate::target::Coordinate;
use crate::vessel::{Vessel, VesselKind};

/// Stable handle of a vessel on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VesselId(usize);

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub signal: Signal,
    /// The flagship fell or the board has no occupied cell left.
    pub game_over: bool,
}

#[derive(Clone)]
pub struct BoardGrid {
    dims: Dimensions,
    cells: Vec<Option<VesselId>>,
    vessels: Vec<Option<Vessel>>,
}

impl BoardGrid {
    /// Create an empty board, validating its dimensions.
    pub fn new(dims: Dimensions) -> Result<Self, GameError> {
        let dims = Dimensions::new(dims.rows, dims.columns, dims.levels)?;
        Ok(BoardGrid {
            dims,
            cells: vec![None; dims.volume()],
            vessels: Vec::new(),
        })
    }

    /// Create a board and place every vessel the catalog asks for.
    pub fn populate<R: Rng>(
        dims: Dimensions,
        catalog: &FleetCatalog,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut board = BoardGrid::new(dims)?;
        for (kind, count) in catalog.iter() {
            for ordinal in 1..=count {
                let vessel = Vessel::new(kind, ordinal, rng);
                board.place_vessel(vessel, rng)?;
            }
        }
        log::debug!(
            "board populated with {} vessels over {} cells",
            board.remaining(),
            board.occupied_cells()
        );
        Ok(board)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Place `vessel` at a random free spot on its level.
    ///
    /// Tries at most rows × columns anchors, rotating the vessel after every
    /// failed try. Running out of tries is reported as an overcrowded level
    /// even if a packing exists.
    pub fn place_vessel<R: Rng>(
        &mut self,
        mut vessel: Vessel,
        rng: &mut R,
    ) -> Result<VesselId, GameError> {
        let budget = self.dims.rows * self.dims.columns;
        for attempt in 1..=budget {
            let (height, width) = (vessel.shape().rows(), vessel.shape().columns());
            if height <= self.dims.rows && width <= self.dims.columns {
                let row = rng.random_range(0..=self.dims.rows - height);
                let col = rng.random_range(0..=self.dims.columns - width);
                if self.fits(&vessel, row, col) {
                    log::debug!(
                        "placed {} at ({}, {}) on {} after {} attempts",
                        vessel,
                        row,
                        col,
                        vessel.level(),
                        attempt
                    );
                    return Ok(self.claim(vessel, row, col));
                }
                log::trace!("{} collides at ({}, {}), rotating", vessel, row, col);
            }
            vessel.rotate();
        }
        log::warn!("gave up placing {} on {}", vessel, vessel.level());
        Err(GameError::Overcrowded(vessel.level()))
    }

    /// Place `vessel` with its mask's top-left corner at (`row`, `col`).
    pub fn place_at(&mut self, vessel: Vessel, row: usize, col: usize) -> Result<VesselId, GameError> {
        let shape = vessel.shape();
        let fits_rows = row.checked_add(shape.rows()).is_some_and(|end| end <= self.dims.rows);
        let fits_cols = col
            .checked_add(shape.columns())
            .is_some_and(|end| end <= self.dims.columns);
        if !fits_rows || !fits_cols {
            return Err(GameError::OutOfBounds);
        }
        if !self.fits(&vessel, row, col) {
            return Err(GameError::Overlap);
        }
        Ok(self.claim(vessel, row, col))
    }

    /// Whether every masked cell under the anchor is in bounds and empty.
    fn fits(&self, vessel: &Vessel, row: usize, col: usize) -> bool {
        let level = vessel.level().index();
        vessel.shape().offsets().all(|(dr, dc)| {
            let target = Coordinate::new(row + dr, col + dc, level);
            self.contains(target) && self.cells[self.index(target)].is_none()
        })
    }

    fn claim(&mut self, vessel: Vessel, row: usize, col: usize) -> VesselId {
        let id = VesselId(self.vessels.len());
        let level = vessel.level().index();
        for (dr, dc) in vessel.shape().offsets() {
            let idx = self.index(Coordinate::new(row + dr, col + dc, level));
            self.cells[idx] = Some(id);
        }
        self.vessels.push(Some(vessel));
        id
    }

    fn index(&self, c: Coordinate) -> usize {
        (c.row * self.dims.columns + c.column) * self.dims.levels + c.level
    }

    /// Whether `target` lies on the board.
    pub fn contains(&self, target: Coordinate) -> bool {
        target.row < self.dims.rows
            && target.column < self.dims.columns
            && target.level < self.dims.levels
    }

    /// Decode raw player input into a coordinate on this board.
    ///
    /// Malformed text and out-of-range indices are both reported as
    /// [`GameError::InvalidCoordinates`]. The board is never touched.
    pub fn parse_target(&self, raw: &str) -> Result<Coordinate, GameError> {
        let target: Coordinate = raw.parse()?;
        if !self.contains(target) {
            return Err(GameError::InvalidCoordinates);
        }
        Ok(target)
    }

    /// Fire at `target`.
    ///
    /// Out-of-range targets are rejected without effect. An empty cell is a
    /// miss. Otherwise the vessel takes the hit, and if it is destroyed all of
    /// its cells are cleared.
    pub fn fire(&mut self, target: Coordinate) -> Result<Shot, GameError> {
        if !self.contains(target) {
            return Err(GameError::InvalidCoordinates);
        }
        let idx = self.index(target);
        let Some(id) = self.cells[idx] else {
            log::debug!("fire at {} -> miss", target);
            return Ok(Shot {
                signal: Signal::Miss,
                game_over: false,
            });
        };
        // cells of a destroyed vessel are cleared in the same call
        debug_assert!(self.vessels[id.0].is_some(), "cell names sunk vessel {:?}", id);
        let vessel = self.vessels[id.0]
            .as_mut()
            .ok_or(GameError::UnknownVessel)?;
        let signal = vessel.under_fire();
        log::debug!("fire at {} -> {} on {}", target, signal, vessel);
        if vessel.is_destroyed() {
            self.vessels[id.0] = None;
            for cell in self.cells.iter_mut().filter(|c| **c == Some(id)) {
                *cell = None;
            }
        }
        Ok(Shot {
            signal,
            game_over: signal == Signal::End || self.occupied_cells() == 0,
        })
    }

    /// Vessel covering `target`, if any.
    pub fn vessel_at(&self, target: Coordinate) -> Option<&Vessel> {
        if !self.contains(target) {
            return None;
        }
        self.cells[self.index(target)].and_then(|id| self.vessel(id))
    }

    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0).and_then(Option::as_ref)
    }

    /// Vessels still afloat.
    pub fn vessels(&self) -> impl Iterator<Item = (VesselId, &Vessel)> + '_ {
        self.vessels
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (VesselId(i), v)))
    }

    /// Cells currently naming `id`, in row-major order.
    pub fn footprint(&self, id: VesselId) -> Vec<Coordinate> {
        let mut cells = Vec::new();
        for row in 0..self.dims.rows {
            for column in 0..self.dims.columns {
                for level in 0..self.dims.levels {
                    let c = Coordinate::new(row, column, level);
                    if self.cells[self.index(c)] == Some(id) {
                        cells.push(c);
                    }
                }
            }
        }
        cells
    }

    /// First cell of the first live vessel of `kind`.
    pub fn locate(&self, kind: VesselKind) -> Option<Coordinate> {
        self.vessels()
            .find(|(_, v)| v.kind() == kind)
            .and_then(|(id, _)| self.footprint(id).first().copied())
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of vessels still afloat.
    pub fn remaining(&self) -> usize {
        self.vessels.iter().filter(|v| v.is_some()).count()
    }
}

/// Renders each level as a grid of vessel names, `.` for open water.
impl fmt::Display for BoardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use alloc::string::ToString;

        let width = self
            .vessels()
            .map(|(_, v)| v.to_string().len())
            .max()
            .unwrap_or(1);
        for level in Level::ALL.iter().take(self.dims.levels) {
            writeln!(f, "{}:", level)?;
            for row in 0..self.dims.rows {
                for column in 0..self.dims.columns {
                    let c = Coordinate::on(row, column, *level);
                    match self.vessel_at(c) {
                        Some(v) => write!(f, " {:<width$}", v.to_string(), width = width)?,
                        None => write!(f, " {:<width$}", ".", width = width)?,
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BoardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardGrid")
            .field("dims", &self.dims)
            .field("occupied", &self.occupied_cells())
            .field("vessels", &self.vessels().map(|(_, v)| v).collect::<Vec<_>>())
            .finish()
    }
}
