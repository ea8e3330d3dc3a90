//! Occupancy masks for vessels.
//!
//! A `Shape` is a small row-major boolean grid describing which cells of a
//! bounding rectangle a vessel fills. Shapes rotate in quarter turns; four
//! turns give back the original mask.

use alloc::vec::Vec;
use core::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Build a mask from rows of `0`/`1` values. Short rows are padded empty.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            for c in 0..columns {
                cells.push(row.get(c).is_some_and(|&v| v != 0));
            }
        }
        Shape {
            rows: rows.len(),
            columns,
            cells,
        }
    }

    /// Height of the bounding rectangle.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of the bounding rectangle.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether (`row`, `col`) inside the bounding rectangle is filled.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns && self.cells[row * self.columns + col]
    }

    /// Number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Offsets of filled cells, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| (i / columns, i % columns))
    }

    /// Quarter turn clockwise: `new[i][j] = old[rows - 1 - j][i]`.
    pub fn rotated(&self) -> Shape {
        let (rows, columns) = (self.columns, self.rows);
        let mut cells = Vec::with_capacity(self.cells.len());
        for i in 0..rows {
            for j in 0..columns {
                cells.push(self.get(self.rows - 1 - j, i));
            }
        }
        Shape {
            rows,
            columns,
            cells,
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape {}x{} [", self.rows, self.columns)?;
        for r in 0..self.rows {
            if r > 0 {
                f.write_str(" /")?;
            }
            for c in 0..self.columns {
                f.write_str(if self.get(r, c) { " #" } else { " ." })?;
            }
        }
        f.write_str(" ]")
    }
}
