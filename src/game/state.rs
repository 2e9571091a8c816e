//! The game: board, adventurers, and the turn state machine.
//!
//! `Game` is the single owner of all mutable game state. Every change goes
//! through one of its action methods, which check the turn phase, validate
//! the action against the board, and only then mutate.

use tracing::{debug, info};

use crate::board::{
    start_corner, Adventurer, Board, Cell, Color, Direction, Openness, Rotation, SlideIndicator,
    ALL_COLORS, COLOR_COUNT,
};
use crate::movegen::{legal_slides, reachable_set, step_target, teleport_target, ReachableSet};

use super::error::ActionError;
use super::phase::{GameStatus, TurnPhase};
use super::relics::{try_collect, Collection};

/// What happened during a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideReport {
    pub indicator: SlideIndicator,
    /// Where the new floating tile left the grid.
    pub exit: SlideIndicator,
    /// Relics picked up by any adventurer whose tile changed under them.
    pub collections: Vec<Collection>,
    /// Set if the active player won as a result of the slide.
    pub winner: Option<Color>,
}

/// What happened during a step or teleport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub color: Color,
    pub from: Cell,
    pub to: Cell,
    pub collection: Option<Collection>,
    pub won: bool,
    /// Set if picking up a relic ended the turn.
    pub turn_end: Option<TurnEnd>,
}

/// A change of turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEnd {
    pub finished: Color,
    pub next: Color,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Adventurer; COLOR_COUNT],
    relic_goal: u32,
    turn: Color,
    phase: TurnPhase,
    status: GameStatus,
}

impl Game {
    /// Starts a game on `board`, placing each adventurer on its corner.
    /// Green moves first.
    pub fn new(mut board: Board, relic_goal: u32) -> Self {
        let (width, height) = (board.width(), board.height());
        let players = ALL_COLORS.map(|c| Adventurer::new(c, start_corner(c, width, height)));
        for p in &players {
            board.place_occupant(p.color, p.position);
        }
        info!(width, height, relic_goal, "new game");
        Game {
            board,
            players,
            relic_goal,
            turn: Color::Green,
            phase: TurnPhase::RotateSlide,
            status: GameStatus::Running,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Adventurer; COLOR_COUNT] {
        &self.players
    }

    pub fn player(&self, color: Color) -> &Adventurer {
        &self.players[color as usize]
    }

    /// Returns the adventurer whose turn it is.
    pub fn current(&self) -> &Adventurer {
        self.player(self.turn)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn relic_goal(&self) -> u32 {
        self.relic_goal
    }

    /// Cells the active adventurer can currently teleport to.
    pub fn reachable(&self) -> ReachableSet {
        reachable_set(&self.board, self.current().position)
    }

    /// Slides the board currently accepts.
    pub fn legal_slides(&self) -> Vec<SlideIndicator> {
        legal_slides(&self.board)
    }

    fn require(&self, phase: TurnPhase, action: &'static str) -> Result<(), ActionError> {
        if !self.is_running() {
            return Err(ActionError::GameOver);
        }
        if self.phase != phase {
            return Err(ActionError::WrongPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Rotates the floating tile. Allowed any number of times before the slide.
    pub fn rotate(&mut self, rotation: Rotation) -> Result<Openness, ActionError> {
        self.require(TurnPhase::RotateSlide, "rotate")?;
        Ok(self.board.rotate_floating(rotation))
    }

    /// Slides the floating tile in and moves on to the move phase.
    ///
    /// After the board shifts, every adventurer (not only the active one)
    /// standing on its next visible relic picks it up.
    pub fn slide(&mut self, indicator: SlideIndicator) -> Result<SlideReport, ActionError> {
        self.require(TurnPhase::RotateSlide, "slide")?;
        let exit = self.board.slide(indicator, &mut self.players)?;

        let mut collections = Vec::new();
        for player in self.players.iter_mut() {
            if let Some(c) = try_collect(&mut self.board, player, self.relic_goal) {
                collections.push(c);
            }
        }

        let winner = self.check_win();
        if winner.is_none() {
            self.phase = self.phase.next();
        }
        debug!(color = %self.turn, %indicator, "slide complete");
        Ok(SlideReport {
            indicator,
            exit,
            collections,
            winner,
        })
    }

    /// Moves the active adventurer one step.
    pub fn step(&mut self, dir: Direction) -> Result<MoveReport, ActionError> {
        self.require(TurnPhase::Move, "move")?;
        let from = self.current().position;
        let to = step_target(&self.board, from, dir)?;
        Ok(self.move_current(from, to))
    }

    /// Moves the active adventurer to any cell reachable from where it stands.
    pub fn teleport(&mut self, to: Cell) -> Result<MoveReport, ActionError> {
        self.require(TurnPhase::Move, "move")?;
        let from = self.current().position;
        let to = teleport_target(&self.board, from, to)?;
        Ok(self.move_current(from, to))
    }

    /// Ends the active player's move phase and passes the turn.
    pub fn end_turn(&mut self) -> Result<TurnEnd, ActionError> {
        self.require(TurnPhase::Move, "end the turn")?;
        Ok(self.advance_turn())
    }

    /// Stops the game.
    pub fn quit(&mut self) {
        if self.is_running() {
            info!("game quit");
            self.status = GameStatus::Quit;
        }
    }

    fn move_current(&mut self, from: Cell, to: Cell) -> MoveReport {
        let color = self.turn;
        self.board.move_occupant(color, from, to);
        self.players[color as usize].position = to;
        debug!(%color, %from, %to, "adventurer moved");

        let collection = try_collect(&mut self.board, &mut self.players[color as usize], self.relic_goal);
        let won = self.check_win().is_some();
        let turn_end = if collection.is_some() && !won {
            Some(self.advance_turn())
        } else {
            None
        };

        MoveReport {
            color,
            from,
            to,
            collection,
            won,
            turn_end,
        }
    }

    /// Ends the game if the active player holds every relic and stands on
    /// their starting corner.
    fn check_win(&mut self) -> Option<Color> {
        let current = self.current();
        if current.relics_collected() == self.relic_goal && current.is_home() {
            let color = current.color;
            info!(%color, "game won");
            self.status = GameStatus::Won(color);
            return Some(color);
        }
        None
    }

    fn advance_turn(&mut self) -> TurnEnd {
        let finished = self.turn;
        self.turn = finished.next();
        self.phase = TurnPhase::RotateSlide;
        info!(%finished, next = %self.turn, "turn ended");
        TurnEnd {
            finished,
            next: self.turn,
        }
    }
}
