//! Slide indicators: where the floating tile is pushed into the grid.
//!
//! An indicator names the grid side the tile enters from and the row
//! (for `e`/`w`) or column (for `n`/`s`) it travels along. The textual form
//! is the side's direction code followed by the index, e.g. `e4`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::direction::Direction;

/// A slide entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideIndicator {
    /// The grid side the tile enters from.
    pub side: Direction,
    /// Row index for east/west entries, column index for north/south entries.
    pub index: usize,
}

/// Errors from parsing the textual form of a slide indicator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndicatorParseError {
    #[error("empty slide indicator")]
    Empty,

    #[error("invalid side character: '{0}'")]
    InvalidSide(char),

    #[error("invalid slide index: '{0}'")]
    InvalidIndex(String),
}

impl SlideIndicator {
    pub const fn new(side: Direction, index: usize) -> Self {
        SlideIndicator { side, index }
    }

    /// Returns the indicator naming where a tile pushed in here leaves the
    /// grid: the opposite side, same line.
    pub const fn exit_point(self) -> SlideIndicator {
        SlideIndicator {
            side: self.side.opposite(),
            index: self.index,
        }
    }

    /// Returns true if the indicator runs along a row (east/west entries).
    pub const fn is_row(self) -> bool {
        matches!(self.side, Direction::East | Direction::West)
    }

    /// Returns the cells of the shifted line, ordered from the entry end to
    /// the ejection end. The caller must have checked the index is in range.
    pub fn line(self, width: usize, height: usize) -> Vec<Cell> {
        let i = self.index;
        match self.side {
            Direction::West => (1..=width).map(|c| Cell::new(i, c)).collect(),
            Direction::East => (1..=width).rev().map(|c| Cell::new(i, c)).collect(),
            Direction::North => (1..=height).map(|r| Cell::new(r, i)).collect(),
            Direction::South => (1..=height).rev().map(|r| Cell::new(r, i)).collect(),
        }
    }
}

impl fmt::Display for SlideIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.code(), self.index)
    }
}

impl FromStr for SlideIndicator {
    type Err = IndicatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let side_char = chars.next().ok_or(IndicatorParseError::Empty)?;
        let side = Direction::from_code(side_char).ok_or(IndicatorParseError::InvalidSide(side_char))?;
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IndicatorParseError::InvalidIndex(rest.to_string()));
        }
        let index = rest
            .parse::<usize>()
            .map_err(|_| IndicatorParseError::InvalidIndex(rest.to_string()))?;
        Ok(SlideIndicator { side, index })
    }
}
