//! Adventurers: the four player pieces.
//!
//! An adventurer's start corner never changes. Its current cell mirrors the
//! occupant marks on the board and is rewritten by the board after moves and
//! slides.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::color::Color;

/// A player piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adventurer {
    pub color: Color,
    start: Cell,
    pub position: Cell,
    relics_collected: u32,
}

impl Adventurer {
    /// Creates an adventurer standing on its starting corner.
    pub fn new(color: Color, start: Cell) -> Self {
        Adventurer {
            color,
            start,
            position: start,
            relics_collected: 0,
        }
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn relics_collected(&self) -> u32 {
        self.relics_collected
    }

    /// Counts one more collected relic. The count only ever goes up.
    pub fn record_relic(&mut self) {
        self.relics_collected += 1;
    }

    pub fn is_home(&self) -> bool {
        self.position == self.start
    }
}

/// Returns the starting corner for `color` on a `width` x `height` grid:
/// Green north-west, Yellow north-east, Red south-west, Blue south-east.
pub fn start_corner(color: Color, width: usize, height: usize) -> Cell {
    match color {
        Color::Green => Cell::new(1, 1),
        Color::Yellow => Cell::new(1, width),
        Color::Red => Cell::new(height, 1),
        Color::Blue => Cell::new(height, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_adventurer_is_home_with_no_relics() {
        let a = Adventurer::new(Color::Red, Cell::new(7, 1));
        assert!(a.is_home());
        assert_eq!(a.relics_collected(), 0);
        assert_eq!(a.position, a.start());
    }

    #[test]
    fn record_relic_increments() {
        let mut a = Adventurer::new(Color::Green, Cell::new(1, 1));
        a.record_relic();
        a.record_relic();
        assert_eq!(a.relics_collected(), 2);
    }

    #[test]
    fn corners() {
        assert_eq!(start_corner(Color::Green, 7, 5), Cell::new(1, 1));
        assert_eq!(start_corner(Color::Yellow, 7, 5), Cell::new(1, 7));
        assert_eq!(start_corner(Color::Red, 7, 5), Cell::new(5, 1));
        assert_eq!(start_corner(Color::Blue, 7, 5), Cell::new(5, 7));
    }
}
