//! Player command parser.
//!
//! Parses one input word into a structured `Command` the engine can
//! dispatch on. Whether a command is allowed right now depends on the turn
//! phase and is decided by the engine, not here.

use tracing::debug;

use crate::board::{Cell, Direction, Rotation, SlideIndicator};

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rotate the floating tile: `r` clockwise, `l` counter-clockwise.
    Rotate(Rotation),

    /// Slide the floating tile in, e.g. `e4`.
    Slide(SlideIndicator),

    /// Step one tile: `n`, `e`, `s` or `w`.
    Step(Direction),

    /// Teleport to a reachable tile given as `col,row`, e.g. `3,5`.
    Teleport(Cell),

    /// End the move phase.
    Done,

    /// Redraw the maze.
    Show,

    /// Print the game state as JSON.
    State,

    /// List legal slides or reachable tiles.
    Hint,

    /// Stop the game.
    Quit,
}

/// Parses a single input word into a `Command`.
///
/// Returns `None` for empty input and for anything not recognized.
pub fn parse_command(input: &str) -> Option<Command> {
    let word = input.trim();
    if word.is_empty() {
        return None;
    }

    let cmd = match word {
        "r" => Some(Command::Rotate(Rotation::Clockwise)),
        "l" => Some(Command::Rotate(Rotation::CounterClockwise)),
        "done" => Some(Command::Done),
        "show" => Some(Command::Show),
        "state" => Some(Command::State),
        "hint" => Some(Command::Hint),
        "quit" => Some(Command::Quit),
        w if w.contains(',') => parse_teleport(w),
        w if w.chars().count() == 1 => w.chars().next().and_then(Direction::from_code).map(Command::Step),
        w => w.parse::<SlideIndicator>().ok().map(Command::Slide),
    };

    if cmd.is_none() {
        debug!(input = word, "unrecognized command");
    }
    cmd
}

/// Parses `col,row`. Both coordinates are 1-based.
fn parse_teleport(word: &str) -> Option<Command> {
    let (col, row) = word.split_once(',')?;
    let col: usize = col.parse().ok()?;
    let row: usize = row.parse().ok()?;
    if col == 0 || row == 0 {
        return None;
    }
    Some(Command::Teleport(Cell::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rotations() {
        assert_eq!(parse_command("r"), Some(Command::Rotate(Rotation::Clockwise)));
        assert_eq!(parse_command("l"), Some(Command::Rotate(Rotation::CounterClockwise)));
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("done"), Some(Command::Done));
        assert_eq!(parse_command("show"), Some(Command::Show));
        assert_eq!(parse_command("state"), Some(Command::State));
        assert_eq!(parse_command("hint"), Some(Command::Hint));
        assert_eq!(parse_command(" quit\n"), Some(Command::Quit));
    }

    #[test]
    fn parse_steps() {
        assert_eq!(parse_command("n"), Some(Command::Step(Direction::North)));
        assert_eq!(parse_command("e"), Some(Command::Step(Direction::East)));
        assert_eq!(parse_command("s"), Some(Command::Step(Direction::South)));
        assert_eq!(parse_command("w"), Some(Command::Step(Direction::West)));
    }

    #[test]
    fn parse_slides() {
        assert_eq!(
            parse_command("e4"),
            Some(Command::Slide(SlideIndicator::new(Direction::East, 4)))
        );
        assert_eq!(
            parse_command("n12"),
            Some(Command::Slide(SlideIndicator::new(Direction::North, 12)))
        );
        // Odd indices parse; legality is the board's call.
        assert_eq!(
            parse_command("w3"),
            Some(Command::Slide(SlideIndicator::new(Direction::West, 3)))
        );
    }

    #[test]
    fn parse_teleports_as_col_row() {
        assert_eq!(parse_command("3,5"), Some(Command::Teleport(Cell::new(5, 3))));
        assert_eq!(parse_command("10,2"), Some(Command::Teleport(Cell::new(2, 10))));
    }

    #[test]
    fn empty_input_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn unknown_input_returns_none() {
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command("foobar"), None);
        assert_eq!(parse_command("q4"), None);
        assert_eq!(parse_command("ex"), None);
        assert_eq!(parse_command("3,"), None);
        assert_eq!(parse_command("0,2"), None);
        assert_eq!(parse_command("a,b"), None);
        assert_eq!(parse_command("R"), None);
    }
}
