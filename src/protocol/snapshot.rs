//! Serializable view of a game.
//!
//! A `GameSnapshot` copies everything a front end needs to draw the game:
//! tile openness, occupants, relics and their visibility, the floating tile,
//! and the turn state. It is what the `state` command prints.

use serde::{Deserialize, Serialize};

use crate::board::{Adventurer, Cell, Color, Openness, Relic, SlideIndicator, Tile};
use crate::game::{Game, GameStatus, TurnPhase};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub open: Openness,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub occupants: Vec<Color>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub relic: Option<Relic>,
}

impl TileSnapshot {
    fn of(tile: &Tile) -> Self {
        TileSnapshot {
            open: tile.openness(),
            occupants: tile.occupants().collect(),
            relic: tile.relic().copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub color: Color,
    pub start: Cell,
    pub position: Cell,
    pub relics_collected: u32,
}

impl From<&Adventurer> for PlayerSnapshot {
    fn from(a: &Adventurer) -> Self {
        PlayerSnapshot {
            color: a.color,
            start: a.start(),
            position: a.position,
            relics_collected: a.relics_collected(),
        }
    }
}

/// The full observable state of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub relic_goal: u32,
    pub turn: Color,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub last_exit: Option<SlideIndicator>,
    pub floating: TileSnapshot,
    pub players: Vec<PlayerSnapshot>,
    /// Grid tiles, row-major from the north-west corner.
    pub tiles: Vec<TileSnapshot>,
}

impl GameSnapshot {
    pub fn of(game: &Game) -> Self {
        let board = game.board();
        GameSnapshot {
            width: board.width(),
            height: board.height(),
            relic_goal: game.relic_goal(),
            turn: game.turn(),
            phase: game.phase(),
            status: game.status(),
            last_exit: board.last_exit(),
            floating: TileSnapshot::of(board.floating()),
            players: game.players().iter().map(PlayerSnapshot::from).collect(),
            tiles: board.cells().map(|(_, t)| TileSnapshot::of(t)).collect(),
        }
    }

    /// Returns the tile at a 1-based cell.
    pub fn tile(&self, cell: Cell) -> Option<&TileSnapshot> {
        if cell.row == 0 || cell.col == 0 || cell.row > self.height || cell.col > self.width {
            return None;
        }
        self.tiles.get((cell.row - 1) * self.width + (cell.col - 1))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
