//! Turn phase and game status.
//!
//! Each turn runs rotate/slide -> move -> next color. The rotate/slide phase
//! ends with exactly one legal slide; the move phase ends when the player
//! says so or picks up a relic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Color;

/// What the active player may do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Rotate the floating tile any number of times, then slide it in once.
    RotateSlide,
    /// Step or teleport any number of times, then end the turn.
    Move,
}

impl TurnPhase {
    /// Returns the phase that follows this one. The move phase wraps around
    /// to the next player's rotate/slide phase.
    pub const fn next(self) -> TurnPhase {
        match self {
            TurnPhase::RotateSlide => TurnPhase::Move,
            TurnPhase::Move => TurnPhase::RotateSlide,
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnPhase::RotateSlide => f.write_str("rotating and sliding"),
            TurnPhase::Move => f.write_str("moving"),
        }
    }
}

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    Won(Color),
    Quit,
}

impl GameStatus {
    pub const fn is_running(self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Won(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_alternate() {
        assert_eq!(TurnPhase::RotateSlide.next(), TurnPhase::Move);
        assert_eq!(TurnPhase::Move.next(), TurnPhase::RotateSlide);
    }

    #[test]
    fn status_queries() {
        assert!(GameStatus::Running.is_running());
        assert!(!GameStatus::Quit.is_running());
        assert!(!GameStatus::Won(Color::Red).is_running());
        assert_eq!(GameStatus::Won(Color::Red).winner(), Some(Color::Red));
        assert_eq!(GameStatus::Quit.winner(), None);
    }
}
