//! Reachability through the maze.
//!
//! Two neighbouring cells are connected when the edge they share is open on
//! both tiles. The reachable set from a cell is everything connected to it
//! by a chain of such edges. It is recomputed from scratch on every query:
//! one slide can re-pair edges along a whole row or column.

use std::collections::VecDeque;

use crate::board::{Board, Cell, Direction, ALL_DIRECTIONS};

/// Returns the neighbour of `from` in `dir` if the shared edge is open on
/// both sides. Never leaves the grid.
pub fn connected_neighbor(board: &Board, from: Cell, dir: Direction) -> Option<Cell> {
    let here = board.tile(from)?;
    if !here.is_open(dir) {
        return None;
    }
    let to = from.neighbor(dir, board.width(), board.height())?;
    let there = board.tile(to)?;
    there.is_open(dir.opposite()).then_some(to)
}

/// The cells reachable from a starting cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachableSet {
    width: usize,
    reached: Vec<bool>,
    order: Vec<Cell>,
}

impl ReachableSet {
    pub fn contains(&self, cell: Cell) -> bool {
        if cell.row == 0 || cell.col == 0 || cell.col > self.width {
            return false;
        }
        let i = (cell.row - 1) * self.width + (cell.col - 1);
        self.reached.get(i).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates reached cells in discovery order, starting cell first.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.order.iter().copied()
    }

    /// Returns the reached cells sorted row by row.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells = self.order.clone();
        cells.sort();
        cells
    }
}

/// Flood-fills the maze from `from` with an explicit queue.
///
/// Each cell is enqueued at most once, so the fill is O(width * height).
/// A start cell off the grid yields an empty set.
pub fn reachable_set(board: &Board, from: Cell) -> ReachableSet {
    let width = board.width();
    let mut set = ReachableSet {
        width,
        reached: vec![false; width * board.height()],
        order: Vec::new(),
    };
    if !board.contains(from) {
        return set;
    }

    let mut queue = VecDeque::new();
    mark(&mut set, from);
    queue.push_back(from);

    while let Some(cell) = queue.pop_front() {
        for dir in ALL_DIRECTIONS {
            if let Some(next) = connected_neighbor(board, cell, dir) {
                if !set.contains(next) {
                    mark(&mut set, next);
                    queue.push_back(next);
                }
            }
        }
    }

    set
}

fn mark(set: &mut ReachableSet, cell: Cell) {
    let i = (cell.row - 1) * set.width + (cell.col - 1);
    set.reached[i] = true;
    set.order.push(cell);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Openness, Tile};

    fn tile(n: bool, e: bool, s: bool, w: bool) -> Tile {
        Tile::new(Openness::new(n, e, s, w), None)
    }

    /// 3x3:
    ///   row 1: ═ ═ ╗      (1,1)-(1,2)-(1,3) corridor turning south
    ///   row 2: ║ ╬ ║      (2,1) north-south straight is closed to the east
    ///   row 3: ╚ ╩ ╝      (2,2) hangs off the bottom corridor
    fn sample_board() -> Board {
        let tiles = vec![
            tile(false, true, false, true),
            tile(false, true, false, true),
            tile(false, false, true, true),
            tile(true, false, true, false),
            tile(true, true, true, true),
            tile(true, false, true, false),
            tile(true, true, false, false),
            tile(true, true, false, true),
            tile(true, false, false, true),
        ];
        Board::new(3, 3, tiles, tile(true, true, true, true)).unwrap()
    }

    #[test]
    fn connected_requires_both_sides_open() {
        let board = sample_board();
        assert_eq!(
            connected_neighbor(&board, Cell::new(1, 1), Direction::East),
            Some(Cell::new(1, 2))
        );
        // (2,2) is open everywhere but (2,1) is closed to the east.
        assert_eq!(connected_neighbor(&board, Cell::new(2, 2), Direction::West), None);
        // (1,2) is closed to the south even though (2,2) is open to the north.
        assert_eq!(connected_neighbor(&board, Cell::new(2, 2), Direction::North), None);
    }

    #[test]
    fn connected_never_leaves_grid() {
        let board = sample_board();
        assert_eq!(connected_neighbor(&board, Cell::new(1, 1), Direction::West), None);
        assert_eq!(connected_neighbor(&board, Cell::new(2, 2), Direction::South), Some(Cell::new(3, 2)));
    }

    #[test]
    fn flood_fill_follows_corridor() {
        let board = sample_board();
        let set = reachable_set(&board, Cell::new(1, 1));
        // Corridor: (1,1) (1,2) (1,3) (2,3) (3,3) (3,2) (3,1) (2,1), plus (2,2) via (3,2).
        assert_eq!(set.len(), 9);
        assert_eq!(set.iter().next(), Some(Cell::new(1, 1)));
        assert!(set.contains(Cell::new(2, 2)));
    }

    #[test]
    fn isolated_tile_reaches_only_itself() {
        let mut tiles = vec![tile(false, false, false, false); 9];
        tiles[4] = tile(true, true, true, true);
        let board = Board::new(3, 3, tiles, tile(true, true, true, true)).unwrap();
        let set = reachable_set(&board, Cell::new(2, 2));
        assert_eq!(set.sorted(), vec![Cell::new(2, 2)]);
    }

    #[test]
    fn off_grid_start_is_empty() {
        let board = sample_board();
        assert!(reachable_set(&board, Cell::new(0, 1)).is_empty());
        assert!(reachable_set(&board, Cell::new(4, 4)).is_empty());
        assert!(!reachable_set(&board, Cell::new(1, 1)).contains(Cell::new(1, 4)));
    }

    #[test]
    fn reachability_is_symmetric() {
        let board = sample_board();
        for (a, _) in board.cells() {
            for (b, _) in board.cells() {
                assert_eq!(
                    reachable_set(&board, a).contains(b),
                    reachable_set(&board, b).contains(a),
                    "{a} vs {b}"
                );
            }
        }
    }
}
