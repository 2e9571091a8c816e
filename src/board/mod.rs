//! Board representation.
//!
//! Contains the core data structures for tiles, relics, adventurers, slide
//! indicators, and the board that owns the grid and the floating tile.

pub mod cell;
pub mod color;
pub mod direction;
pub mod player;
pub mod relic;
pub mod slide;
pub mod state;
pub mod tile;

pub use cell::Cell;
pub use color::{Color, ALL_COLORS, COLOR_COUNT};
pub use direction::{Direction, Rotation, ALL_DIRECTIONS};
pub use player::{start_corner, Adventurer};
pub use relic::{Relic, MAX_ORDINAL};
pub use slide::{IndicatorParseError, SlideIndicator};
pub use state::{Board, BoardError, SlideError};
pub use tile::{Openness, Shape, Tile};
