//! Engine state management.
//!
//! Holds the running game and front-end options, and turns parsed commands
//! into game actions and transcript lines. Every handler writes to any
//! `io::Write`, so tests can drive the engine against a byte buffer.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::board::{Cell, Color, Direction, Rotation, SlideError, SlideIndicator};
use crate::game::{ActionError, Collection, Game, MoveReport, TurnEnd, TurnPhase};
use crate::movegen::MoveError;
use crate::protocol::parser::Command;
use crate::protocol::snapshot::GameSnapshot;
use crate::render::{render_floating, render_maze, render_scoreboard};

const RULE: &str = "--------------------------------------------------";

/// Front-end switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Print a prompt before each input.
    pub prompts: bool,
    /// Redraw the maze and floating tile after every action.
    pub render: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            prompts: true,
            render: true,
        }
    }
}

/// Holds the game between commands.
pub struct Engine {
    game: Game,
    options: EngineOptions,
}

impl Engine {
    pub fn new(game: Game, options: EngineOptions) -> Self {
        Engine { game, options }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn is_running(&self) -> bool {
        self.game.is_running()
    }

    /// Writes the opening banner and the starting board.
    pub fn handle_start<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(out, "Mazeshift")?;
        writeln!(out, "Relic goal: {}", self.game.relic_goal())?;
        writeln!(out, "{RULE}")?;
        self.draw(out)?;
        out.flush()
    }

    /// Writes the input prompt for the current phase, if prompts are on.
    pub fn handle_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.options.prompts || !self.is_running() {
            return Ok(());
        }
        let color = self.game.turn();
        match self.game.phase() {
            TurnPhase::RotateSlide => writeln!(out, "[{color}] Rotate and slide the floating tile:")?,
            TurnPhase::Move => writeln!(out, "[{color}] Move your adventurer:")?,
        }
        write!(out, ">")?;
        out.flush()
    }

    /// Dispatches one parsed input word. `None` is unrecognized input.
    pub fn handle_command<W: Write>(&mut self, cmd: Option<Command>, out: &mut W) -> io::Result<()> {
        if !self.is_running() {
            return Ok(());
        }
        match cmd {
            Some(Command::Rotate(rotation)) => self.handle_rotate(rotation, out)?,
            Some(Command::Slide(indicator)) => self.handle_slide(indicator, out)?,
            Some(Command::Step(dir)) => self.handle_step(dir, out)?,
            Some(Command::Teleport(cell)) => self.handle_teleport(cell, out)?,
            Some(Command::Done) => self.handle_done(out)?,
            Some(Command::Show) => self.draw(out)?,
            Some(Command::State) => self.handle_state(out)?,
            Some(Command::Hint) => self.handle_hint(out)?,
            Some(Command::Quit) => self.handle_quit(out)?,
            None => writeln!(out, "Invalid input.")?,
        }
        out.flush()
    }

    pub fn handle_rotate<W: Write>(&mut self, rotation: Rotation, out: &mut W) -> io::Result<()> {
        match self.game.rotate(rotation) {
            Ok(_) => {
                match rotation {
                    Rotation::Clockwise => writeln!(out, " Rotating right.")?,
                    Rotation::CounterClockwise => writeln!(out, " Rotating left.")?,
                }
                self.redraw(out)
            }
            Err(e) => self.reject(e, out),
        }
    }

    pub fn handle_slide<W: Write>(&mut self, indicator: SlideIndicator, out: &mut W) -> io::Result<()> {
        let report = match self.game.slide(indicator) {
            Ok(r) => r,
            Err(e) => return self.reject(e, out),
        };
        writeln!(out, " Inserting at {}.", report.indicator)?;
        for c in &report.collections {
            writeln!(out, "{} collected a relic.", c.color)?;
            self.write_completion(c, out)?;
            self.write_scoreboard(out)?;
        }
        self.redraw(out)?;
        if let Some(winner) = report.winner {
            self.write_win(winner, out)?;
        }
        Ok(())
    }

    pub fn handle_step<W: Write>(&mut self, dir: Direction, out: &mut W) -> io::Result<()> {
        match self.game.step(dir) {
            Ok(report) => {
                writeln!(out, " Moving {}.", dir.name())?;
                self.write_move(report, out)
            }
            Err(e) => self.reject(e, out),
        }
    }

    pub fn handle_teleport<W: Write>(&mut self, cell: Cell, out: &mut W) -> io::Result<()> {
        match self.game.teleport(cell) {
            Ok(report) => {
                writeln!(out, " Moving to {}.", report.to)?;
                self.write_move(report, out)
            }
            Err(e) => self.reject(e, out),
        }
    }

    pub fn handle_done<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.game.end_turn() {
            Ok(end) => {
                write!(out, " ")?;
                self.write_turn_end(end, out)
            }
            Err(e) => self.reject(e, out),
        }
    }

    pub fn handle_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = GameSnapshot::of(&self.game).to_json()?;
        writeln!(out, "{json}")
    }

    /// Lists the legal slides while sliding, or the reachable tiles while moving.
    pub fn handle_hint<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let items: Vec<String> = match self.game.phase() {
            TurnPhase::RotateSlide => self.game.legal_slides().iter().map(|s| s.to_string()).collect(),
            TurnPhase::Move => self.game.reachable().sorted().iter().map(|c| c.to_string()).collect(),
        };
        match self.game.phase() {
            TurnPhase::RotateSlide => writeln!(out, " Legal slides: {}", items.join(" ")),
            TurnPhase::Move => writeln!(out, " Reachable: {}", items.join(" ")),
        }
    }

    pub fn handle_quit<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.game.quit();
        writeln!(out, " Game has been quit.")?;
        self.write_scoreboard(out)
    }

    fn write_move<W: Write>(&self, report: MoveReport, out: &mut W) -> io::Result<()> {
        self.redraw(out)?;
        if let Some(c) = &report.collection {
            writeln!(out, "{} has collected a relic.", c.color)?;
            self.write_completion(c, out)?;
        }
        if report.won {
            self.write_win(report.color, out)?;
        } else if let Some(end) = report.turn_end {
            self.write_turn_end(end, out)?;
        }
        Ok(())
    }

    fn write_completion<W: Write>(&self, c: &Collection, out: &mut W) -> io::Result<()> {
        if c.completed {
            writeln!(out, "{} has all their relics.", c.color)?;
        }
        Ok(())
    }

    fn write_turn_end<W: Write>(&self, end: TurnEnd, out: &mut W) -> io::Result<()> {
        writeln!(out, "End of {}'s turn.", end.finished)?;
        self.write_scoreboard(out)?;
        if self.is_running() {
            self.redraw(out)?;
        }
        Ok(())
    }

    fn write_win<W: Write>(&self, winner: Color, out: &mut W) -> io::Result<()> {
        writeln!(out, "{winner} has won.")?;
        self.write_scoreboard(out)
    }

    fn write_scoreboard<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", render_scoreboard(self.game.players(), self.game.relic_goal()))
    }

    /// Draws the maze and the floating tile.
    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let board = self.game.board();
        writeln!(out)?;
        write!(out, "{}", render_maze(board))?;
        writeln!(out)?;
        write!(out, "{}", render_floating(board.floating()))
    }

    /// Draws the board after an action if automatic redraws are on.
    fn redraw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.options.render {
            self.draw(out)?;
        }
        Ok(())
    }

    fn reject<W: Write>(&self, err: ActionError, out: &mut W) -> io::Result<()> {
        debug!(error = %err, phase = %self.game.phase(), "action rejected");
        match err {
            ActionError::Slide(SlideError::OddIndex(_)) => writeln!(out, " Cannot slide into odd positions."),
            ActionError::Slide(SlideError::LastExitPoint(_)) => {
                writeln!(out, " Cannot slide into last exit point.")
            }
            ActionError::Slide(SlideError::OutOfRange(ind)) => {
                writeln!(out, " Cannot slide into {ind}: no such line.")
            }
            ActionError::Move(MoveError::OffBoard(dir)) => {
                writeln!(out, " Cannot move {}: off the board.", dir.name())
            }
            ActionError::Move(MoveError::NoPath(dir)) => writeln!(out, " Cannot move {}: no path.", dir.name()),
            ActionError::Move(MoveError::Unreachable(cell)) => writeln!(out, " Cannot move to {cell}: no path."),
            ActionError::Move(MoveError::OutOfBounds(cell)) => {
                writeln!(out, " Cannot move to {cell}: off the board.")
            }
            ActionError::WrongPhase { .. } => writeln!(out, "Invalid input."),
            ActionError::GameOver => {
                info!("command after game end ignored");
                Ok(())
            }
        }
    }
}
