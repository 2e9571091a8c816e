//! Player colors and turn order.

use serde::{Deserialize, Serialize};

/// The number of adventurers in a game.
pub const COLOR_COUNT: usize = 4;

/// An adventurer color. Also identifies which relics belong to whom.
///
/// The discriminant is the turn-order index and the occupant slot on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Green = 0,
    Yellow = 1,
    Red = 2,
    Blue = 3,
}

/// All colors in turn order.
pub const ALL_COLORS: [Color; COLOR_COUNT] = [Color::Green, Color::Yellow, Color::Red, Color::Blue];

impl Color {
    /// Returns the color whose turn follows this one, wrapping Blue -> Green.
    pub const fn next(self) -> Color {
        match self {
            Color::Green => Color::Yellow,
            Color::Yellow => Color::Red,
            Color::Red => Color::Blue,
            Color::Blue => Color::Green,
        }
    }

    /// Returns the lowercase character used for relics in tile encodings.
    pub const fn relic_char(self) -> char {
        match self {
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Red => 'r',
            Color::Blue => 'b',
        }
    }

    /// Parses a color from its lowercase relic character.
    pub fn from_relic_char(c: char) -> Option<Color> {
        match c {
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }

    /// Returns the uppercase character used to mark an adventurer on a tile.
    pub const fn player_char(self) -> char {
        match self {
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Blue => 'B',
        }
    }

    /// Returns the capitalized color name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
