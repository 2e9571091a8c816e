//! Relic collection and unlocking.
//!
//! Each color collects its relics in ordinal order. Only the next relic a
//! color needs is visible; collecting it hides it and reveals the following
//! ordinal, wherever that relic is: on the grid or on the floating tile.

use tracing::info;

use crate::board::{Adventurer, Board, Color};

/// A relic picked up by an adventurer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub color: Color,
    pub ordinal: u8,
    /// True if this was the last relic the color needed.
    pub completed: bool,
}

/// Picks up the relic on `player`'s tile if it is the player's next visible
/// relic, then reveals the following one.
pub fn try_collect(board: &mut Board, player: &mut Adventurer, goal: u32) -> Option<Collection> {
    let collected = player.relics_collected();
    let relic = board
        .tile_mut(player.position)?
        .relic_mut()
        .filter(|r| r.is_next_for(player.color, collected))?;
    relic.hide();
    let ordinal = relic.ordinal;

    player.record_relic();
    reveal_next(board, player.color, player.relics_collected());

    let completed = player.relics_collected() >= goal;
    info!(color = %player.color, ordinal, completed, "relic collected");
    Some(Collection {
        color: player.color,
        ordinal,
        completed,
    })
}

/// Reveals `color`'s relic with ordinal `collected + 1`, checking the
/// floating tile as well as the grid. Returns true if one was found.
pub fn reveal_next(board: &mut Board, color: Color, collected: u32) -> bool {
    let mut found = false;
    for relic in board.relics_mut() {
        if relic.color == color && u32::from(relic.ordinal) == collected + 1 {
            relic.reveal();
            found = true;
        }
    }
    found
}
