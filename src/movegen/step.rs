//! Adventurer move validation.
//!
//! A single step is legal when the adventurer's tile is open towards the
//! destination, the destination is on the grid, and the destination tile
//! is open back towards the adventurer. A teleport is legal when the target
//! is in the reachable set of the adventurer's cell.

use crate::board::{Board, Cell, Direction};

use super::reach::reachable_set;

/// Reasons a move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cannot move {}: off the board", .0.name())]
    OffBoard(Direction),

    #[error("cannot move {}: no path", .0.name())]
    NoPath(Direction),

    #[error("cannot move to {0}: no path")]
    Unreachable(Cell),

    #[error("cannot move to {0}: off the board")]
    OutOfBounds(Cell),
}

/// Returns the cell one step from `from` in `dir`, or why the step is illegal.
///
/// A closed edge on the current tile is reported before the board edge, so
/// walking into a wall on the perimeter reads as "no path".
pub fn step_target(board: &Board, from: Cell, dir: Direction) -> Result<Cell, MoveError> {
    let here = board.tile(from).ok_or(MoveError::NoPath(dir))?;
    if !here.is_open(dir) {
        return Err(MoveError::NoPath(dir));
    }
    let to = from
        .neighbor(dir, board.width(), board.height())
        .ok_or(MoveError::OffBoard(dir))?;
    match board.tile(to) {
        Some(there) if there.is_open(dir.opposite()) => Ok(to),
        _ => Err(MoveError::NoPath(dir)),
    }
}

/// Checks that `to` can be reached from `from` through open edges.
pub fn teleport_target(board: &Board, from: Cell, to: Cell) -> Result<Cell, MoveError> {
    if !board.contains(to) {
        return Err(MoveError::OutOfBounds(to));
    }
    if reachable_set(board, from).contains(to) {
        Ok(to)
    } else {
        Err(MoveError::Unreachable(to))
    }
}
