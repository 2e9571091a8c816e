//! The maze board: the tile grid plus the floating tile.
//!
//! The grid is stored row-major with 1-based `Cell` coordinates mapped to
//! vector indices. Exactly `width * height` tiles live in the grid and one
//! more is held outside as the floating tile; a slide swaps one in and one
//! out, so the total never changes.
//!
//! Occupant marks on tiles are the board's record of where adventurers
//! stand. `Adventurer::position` is derived from them: every slide ends by
//! rescanning the grid and rewriting the positions of all adventurers,
//! because one slide can move several of them at once.

use tracing::debug;

use super::cell::Cell;
use super::color::Color;
use super::direction::Rotation;
use super::player::Adventurer;
use super::relic::Relic;
use super::slide::SlideIndicator;
use super::tile::{Openness, Tile};

/// Errors building a board from its parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("board dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },

    #[error("a {width}x{height} board has no line that can slide")]
    NoSlideLines { width: usize, height: usize },

    #[error("expected {expected} grid tiles, got {got}")]
    WrongTileCount { expected: usize, got: usize },
}

/// Reasons a slide is refused. The board is untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlideError {
    #[error("cannot slide into odd position {0}")]
    OddIndex(SlideIndicator),

    #[error("slide position {0} is not an interior line of the board")]
    OutOfRange(SlideIndicator),

    #[error("cannot slide into last exit point {0}")]
    LastExitPoint(SlideIndicator),
}

/// The grid of tiles and the floating tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    floating: Tile,
    /// Where the current floating tile was last pushed out, if anywhere.
    last_exit: Option<SlideIndicator>,
}

impl Board {
    /// Builds a board from row-major grid tiles and a floating tile.
    ///
    /// At least one dimension must be 3 or more, so that some interior line
    /// can take a slide.
    pub fn new(width: usize, height: usize, tiles: Vec<Tile>, floating: Tile) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyGrid { width, height });
        }
        if width < 3 && height < 3 {
            return Err(BoardError::NoSlideLines { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;
        if tiles.len() != expected {
            return Err(BoardError::WrongTileCount {
                expected,
                got: tiles.len(),
            });
        }
        Ok(Board {
            width,
            height,
            tiles,
            floating,
            last_exit: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the cell lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.row == 0 || cell.col == 0 || cell.row > self.height || cell.col > self.width {
            return None;
        }
        Some((cell.row - 1) * self.width + (cell.col - 1))
    }

    pub fn tile(&self, cell: Cell) -> Option<&Tile> {
        self.index(cell).map(|i| &self.tiles[i])
    }

    pub(crate) fn tile_mut(&mut self, cell: Cell) -> Option<&mut Tile> {
        match self.index(cell) {
            Some(i) => Some(&mut self.tiles[i]),
            None => None,
        }
    }

    /// Iterates every grid cell with its tile, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, &Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (Cell::new(i / width + 1, i % width + 1), t))
    }

    pub fn floating(&self) -> &Tile {
        &self.floating
    }

    pub fn last_exit(&self) -> Option<SlideIndicator> {
        self.last_exit
    }

    /// Total tiles owned by the board, grid plus floating.
    pub fn tile_count(&self) -> usize {
        self.tiles.len() + 1
    }

    /// Previews the floating tile's openness after `rotation`.
    pub fn preview_rotation(&self, rotation: Rotation) -> Openness {
        self.floating.openness().rotated(rotation)
    }

    /// Rotates the floating tile a quarter turn and returns its new openness.
    /// Tiles already in the grid cannot be rotated.
    pub fn rotate_floating(&mut self, rotation: Rotation) -> Openness {
        let open = self.preview_rotation(rotation);
        self.floating.set_open_sides(open);
        debug!(?rotation, ?open, "rotated floating tile");
        open
    }

    /// Checks whether sliding at `indicator` is currently legal.
    ///
    /// The index must be even, at least 2, and strictly inside the grid
    /// (odd lines, including the perimeter, are fixed). The indicator must
    /// also differ from the floating tile's last exit point.
    pub fn check_slide(&self, indicator: SlideIndicator) -> Result<(), SlideError> {
        if indicator.index % 2 != 0 {
            return Err(SlideError::OddIndex(indicator));
        }
        let line_count = if indicator.is_row() { self.height } else { self.width };
        if indicator.index == 0 || indicator.index >= line_count {
            return Err(SlideError::OutOfRange(indicator));
        }
        if self.last_exit == Some(indicator) {
            return Err(SlideError::LastExitPoint(indicator));
        }
        Ok(())
    }

    /// Pushes the floating tile in at `indicator`.
    ///
    /// Every tile on the line shifts one cell away from the entry side; the
    /// tile at the far end is ejected and becomes the new floating tile, with
    /// its exit point recorded. Adventurers standing on the ejected tile wrap
    /// around onto the inserted tile. Afterwards the positions of all
    /// `players` are resynchronized from the grid.
    ///
    /// Returns the exit point of the ejected tile.
    pub fn slide(
        &mut self,
        indicator: SlideIndicator,
        players: &mut [Adventurer],
    ) -> Result<SlideIndicator, SlideError> {
        self.check_slide(indicator)?;

        let line: Vec<usize> = indicator
            .line(self.width, self.height)
            .into_iter()
            .filter_map(|cell| self.index(cell))
            .collect();

        let placeholder = Tile::new(Openness::default(), None);
        let mut carry = std::mem::replace(&mut self.floating, placeholder);
        for &i in &line {
            carry = std::mem::replace(&mut self.tiles[i], carry);
        }
        let mut ejected = carry;

        let riders = ejected.take_occupants();
        if let Some(&entry) = line.first() {
            self.tiles[entry].receive_occupants(riders);
        }

        let exit = indicator.exit_point();
        self.floating = ejected;
        self.last_exit = Some(exit);
        self.sync_positions(players);

        debug!(%indicator, %exit, "slid floating tile into maze");
        Ok(exit)
    }

    /// Puts `color`'s occupant mark on `cell`. Returns false if the cell is
    /// off the grid.
    pub fn place_occupant(&mut self, color: Color, cell: Cell) -> bool {
        match self.tile_mut(cell) {
            Some(tile) => {
                tile.add_occupant(color);
                true
            }
            None => false,
        }
    }

    /// Moves `color`'s occupant mark from `from` to `to`.
    pub(crate) fn move_occupant(&mut self, color: Color, from: Cell, to: Cell) {
        if let Some(tile) = self.tile_mut(from) {
            tile.remove_occupant(color);
        }
        if let Some(tile) = self.tile_mut(to) {
            tile.add_occupant(color);
        }
    }

    /// Returns the cell holding `color`'s occupant mark.
    pub fn find_occupant(&self, color: Color) -> Option<Cell> {
        self.cells()
            .find(|(_, t)| t.has_occupant(color))
            .map(|(cell, _)| cell)
    }

    /// Rewrites every adventurer's position from the occupant marks.
    pub fn sync_positions(&self, players: &mut [Adventurer]) {
        for player in players.iter_mut() {
            if let Some(cell) = self.find_occupant(player.color) {
                player.position = cell;
            }
        }
    }

    /// Iterates every relic on the board, floating tile first.
    pub(crate) fn relics_mut(&mut self) -> impl Iterator<Item = &mut Relic> + '_ {
        std::iter::once(&mut self.floating)
            .chain(self.tiles.iter_mut())
            .filter_map(|t| t.relic_mut())
    }
}
