//! Errors returned by game actions.
//!
//! None of these are fatal: the game state is unchanged whenever an action
//! returns an error.

use crate::board::SlideError;
use crate::movegen::MoveError;

use super::phase::TurnPhase;

/// Why a game action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Slide(#[from] SlideError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("cannot {action} while {phase}")]
    WrongPhase {
        action: &'static str,
        phase: TurnPhase,
    },

    #[error("the game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, SlideIndicator};

    #[test]
    fn wraps_lower_errors_transparently() {
        let ind = SlideIndicator::new(Direction::East, 3);
        let err: ActionError = SlideError::OddIndex(ind).into();
        assert_eq!(err.to_string(), "cannot slide into odd position e3");

        let err: ActionError = MoveError::NoPath(Direction::North).into();
        assert_eq!(err.to_string(), "cannot move north: no path");
    }

    #[test]
    fn wrong_phase_message() {
        let err = ActionError::WrongPhase {
            action: "move",
            phase: TurnPhase::RotateSlide,
        };
        assert_eq!(err.to_string(), "cannot move while rotating and sliding");
    }
}
