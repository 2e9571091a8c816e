//! Grid coordinates.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A 1-based grid position. Row 1 is the northern edge, column 1 the western edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Returns the neighbouring cell one step in `dir`, if it lies inside a
    /// `height` x `width` grid.
    pub fn neighbor(self, dir: Direction, width: usize, height: usize) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row == 0 || col == 0 || row > height || col > width {
            return None;
        }
        Some(Cell { row, col })
    }
}

impl std::fmt::Display for Cell {
    /// Formats as `col,row`, the order players type teleport targets in.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}
