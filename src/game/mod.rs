//! Turn and relic state machine.
//!
//! `Game` owns the board and the four adventurers and is the only way to
//! mutate them during play.

pub mod error;
pub mod phase;
pub mod relics;
pub mod state;

pub use error::ActionError;
pub use phase::{GameStatus, TurnPhase};
pub use relics::{reveal_next, try_collect, Collection};
pub use state::{Game, MoveReport, SlideReport, TurnEnd};
