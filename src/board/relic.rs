//! Relics: per-color collectibles with a fixed collection order.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A relic lying on a tile.
///
/// Only the next relic a color still needs is visible. A collected relic is
/// hidden again and never becomes visible afterwards, because unlocking only
/// looks for the ordinal right after the owner's collected count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relic {
    pub ordinal: u8,
    pub color: Color,
    pub hidden: bool,
}

/// Highest relic ordinal. Ordinals are single digits in the board file.
pub const MAX_ORDINAL: u8 = 9;

impl Relic {
    /// Creates a relic in its starting visibility: ordinal 1 is visible,
    /// every later ordinal starts hidden.
    ///
    /// `ordinal` must be in `1..=MAX_ORDINAL`.
    pub fn new(ordinal: u8, color: Color) -> Self {
        debug_assert!((1..=MAX_ORDINAL).contains(&ordinal), "relic ordinal {ordinal} out of range");
        Relic {
            ordinal,
            color,
            hidden: ordinal > 1,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn reveal(&mut self) {
        self.hidden = false;
    }

    /// Returns true if this is the relic `color` must pick up next, given
    /// how many it already holds, and it is currently visible.
    pub fn is_next_for(&self, color: Color, collected: u32) -> bool {
        !self.hidden && self.color == color && u32::from(self.ordinal) == collected + 1
    }
}
