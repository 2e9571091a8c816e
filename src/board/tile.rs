//! Maze tiles.
//!
//! A tile has four edges that are each open or closed, an optional relic,
//! and up to one occupant per color. Openness is a small `Copy` value so a
//! rotation can be previewed without touching the tile.

use serde::{Deserialize, Serialize};

use super::color::{Color, COLOR_COUNT};
use super::direction::{Direction, Rotation};
use super::relic::Relic;

/// Which of a tile's four edges are open, indexed by `Direction as usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Openness(pub [bool; 4]);

/// The path shape a tile's openness forms, ignoring orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Straight,
    Elbow,
    TJunction,
    Cross,
}

impl Openness {
    pub const fn new(north: bool, east: bool, south: bool, west: bool) -> Self {
        Openness([north, east, south, west])
    }

    pub const fn is_open(self, dir: Direction) -> bool {
        self.0[dir as usize]
    }

    /// Returns the openness after a clockwise quarter turn:
    /// new north = old west, new east = old north, and so on.
    pub const fn rotated_clockwise(self) -> Openness {
        let [n, e, s, w] = self.0;
        Openness([w, n, e, s])
    }

    /// Returns the openness after a counter-clockwise quarter turn.
    pub const fn rotated_counter_clockwise(self) -> Openness {
        let [n, e, s, w] = self.0;
        Openness([e, s, w, n])
    }

    pub const fn rotated(self, rotation: Rotation) -> Openness {
        match rotation {
            Rotation::Clockwise => self.rotated_clockwise(),
            Rotation::CounterClockwise => self.rotated_counter_clockwise(),
        }
    }

    pub fn open_count(self) -> usize {
        self.0.iter().filter(|o| **o).count()
    }

    /// Classifies the openness into one of the gameplay shapes.
    ///
    /// Returns `None` for dead ends and fully closed tiles, which are legal
    /// data but never part of a standard tile set.
    pub fn shape(self) -> Option<Shape> {
        let [n, e, s, _] = self.0;
        match self.open_count() {
            2 if n == s && e != n => Some(Shape::Straight),
            2 => Some(Shape::Elbow),
            3 => Some(Shape::TJunction),
            4 => Some(Shape::Cross),
            _ => None,
        }
    }
}

/// A single maze tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    open: Openness,
    occupants: [bool; COLOR_COUNT],
    relic: Option<Relic>,
}

impl Tile {
    pub fn new(open: Openness, relic: Option<Relic>) -> Self {
        Tile {
            open,
            occupants: [false; COLOR_COUNT],
            relic,
        }
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        self.open.is_open(dir)
    }

    pub fn openness(&self) -> Openness {
        self.open
    }

    /// Previews a clockwise rotation without changing the tile.
    pub fn rotate_clockwise(&self) -> Openness {
        self.open.rotated_clockwise()
    }

    /// Previews a counter-clockwise rotation without changing the tile.
    pub fn rotate_counter_clockwise(&self) -> Openness {
        self.open.rotated_counter_clockwise()
    }

    /// Commits a new openness, typically a previewed rotation.
    pub fn set_open_sides(&mut self, open: Openness) {
        self.open = open;
    }

    pub fn has_occupant(&self, color: Color) -> bool {
        self.occupants[color as usize]
    }

    /// Marks `color` as standing on this tile. Adding twice is a no-op.
    pub fn add_occupant(&mut self, color: Color) {
        self.occupants[color as usize] = true;
    }

    /// Removes `color` from this tile. Removing an absent occupant is a no-op.
    pub fn remove_occupant(&mut self, color: Color) {
        self.occupants[color as usize] = false;
    }

    /// Iterates the colors standing on this tile in turn order.
    pub fn occupants(&self) -> impl Iterator<Item = Color> + '_ {
        super::color::ALL_COLORS
            .into_iter()
            .filter(move |c| self.occupants[*c as usize])
    }

    /// Removes and returns every occupant.
    pub fn take_occupants(&mut self) -> [bool; COLOR_COUNT] {
        std::mem::take(&mut self.occupants)
    }

    /// Adds every occupant flagged in `occupants`.
    pub fn receive_occupants(&mut self, occupants: [bool; COLOR_COUNT]) {
        for (slot, incoming) in self.occupants.iter_mut().zip(occupants) {
            *slot |= incoming;
        }
    }

    pub fn has_relic(&self) -> bool {
        self.relic.is_some()
    }

    pub fn relic(&self) -> Option<&Relic> {
        self.relic.as_ref()
    }

    pub fn relic_mut(&mut self) -> Option<&mut Relic> {
        self.relic.as_mut()
    }
}
