//! Board file encoding and decoding.
//!
//! A board file is a sequence of whitespace-separated tokens:
//!
//! `<width> <height> <relic goal> <floating tile> <tile 1> ... <tile w*h>`
//!
//! Grid tiles are listed row-major starting at the north-west corner. Each
//! tile is six characters: four `0`/`1` flags for the north, east, south and
//! west sides, then a relic color (`g`, `y`, `r`, `b`, or `x` for none), then
//! the relic's ordinal digit. The ordinal is ignored when there is no relic.
//!
//! Example tile: `1010g2` is a north-south straight carrying Green's second
//! relic.

use std::collections::HashSet;

use tracing::warn;

use crate::board::{Board, BoardError, Color, Openness, Relic, Tile, MAX_ORDINAL};
use crate::game::Game;

/// Characters in one tile encoding.
pub const TILE_ENCODING_LEN: usize = 6;

/// Errors that can occur while loading a board file.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("missing {0}")]
    MissingToken(&'static str),

    #[error("invalid {field}: '{token}'")]
    InvalidNumber { field: &'static str, token: String },

    #[error("relic goal must be at least 1")]
    ZeroGoal,

    #[error("tile encoding must be 6 characters: '{0}'")]
    InvalidTileLength(String),

    #[error("invalid side flag '{0}' in tile encoding (expected '0' or '1')")]
    InvalidSideFlag(char),

    #[error("invalid relic color character: '{0}'")]
    InvalidRelicColor(char),

    #[error("invalid relic ordinal: '{0}' (expected 1-9)")]
    InvalidOrdinal(char),

    #[error("duplicate relic: {color} {ordinal}")]
    DuplicateRelic { color: Color, ordinal: u8 },

    #[error("expected {expected} grid tiles, got {got}")]
    WrongTileCount { expected: usize, got: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// The contents of a board file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub board: Board,
    pub relic_goal: u32,
}

impl Layout {
    /// Starts a game on this layout.
    pub fn into_game(self) -> Game {
        Game::new(self.board, self.relic_goal)
    }
}

/// Parses one six-character tile encoding.
pub fn parse_tile(s: &str) -> Result<Tile, LayoutError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != TILE_ENCODING_LEN {
        return Err(LayoutError::InvalidTileLength(s.to_string()));
    }

    let mut sides = [false; 4];
    for (open, &c) in sides.iter_mut().zip(&chars[..4]) {
        *open = match c {
            '0' => false,
            '1' => true,
            other => return Err(LayoutError::InvalidSideFlag(other)),
        };
    }

    let relic = match chars[4] {
        'x' => None,
        c => {
            let color = Color::from_relic_char(c).ok_or(LayoutError::InvalidRelicColor(c))?;
            let ordinal = match chars[5].to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                Some(d @ 1..=MAX_ORDINAL) => d,
                _ => return Err(LayoutError::InvalidOrdinal(chars[5])),
            };
            Some(Relic::new(ordinal, color))
        }
    };

    Ok(Tile::new(Openness(sides), relic))
}

/// Encodes a tile's sides and relic. Occupants and relic visibility are not
/// part of the encoding.
pub fn encode_tile(tile: &Tile) -> String {
    let mut s = String::with_capacity(TILE_ENCODING_LEN);
    for open in tile.openness().0 {
        s.push(if open { '1' } else { '0' });
    }
    match tile.relic() {
        Some(relic) => {
            s.push(relic.color.relic_char());
            s.push(char::from_digit(u32::from(relic.ordinal), 10).unwrap_or('0'));
        }
        None => s.push_str("x0"),
    }
    s
}

fn parse_number<T: std::str::FromStr>(
    tokens: &mut std::str::SplitWhitespace<'_>,
    field: &'static str,
) -> Result<T, LayoutError> {
    let token = tokens.next().ok_or(LayoutError::MissingToken(field))?;
    token.parse().map_err(|_| LayoutError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

/// Parses a whole board file.
pub fn parse_layout(s: &str) -> Result<Layout, LayoutError> {
    let result = parse_layout_inner(s);
    if let Err(e) = &result {
        warn!(error = %e, "rejected board file");
    }
    result
}

fn parse_layout_inner(s: &str) -> Result<Layout, LayoutError> {
    let mut tokens = s.split_whitespace();
    let width: usize = parse_number(&mut tokens, "board width")?;
    let height: usize = parse_number(&mut tokens, "board height")?;
    let relic_goal: u32 = parse_number(&mut tokens, "relic goal")?;
    if relic_goal == 0 {
        return Err(LayoutError::ZeroGoal);
    }

    let floating = parse_tile(tokens.next().ok_or(LayoutError::MissingToken("floating tile"))?)?;
    let tiles = tokens.map(parse_tile).collect::<Result<Vec<_>, _>>()?;

    let expected = width
        .checked_mul(height)
        .ok_or(BoardError::TooLarge { width, height })?;
    if width > 0 && height > 0 && tiles.len() != expected {
        return Err(LayoutError::WrongTileCount {
            expected,
            got: tiles.len(),
        });
    }

    let mut seen = HashSet::new();
    for relic in std::iter::once(&floating).chain(&tiles).filter_map(Tile::relic) {
        if !seen.insert((relic.color, relic.ordinal)) {
            return Err(LayoutError::DuplicateRelic {
                color: relic.color,
                ordinal: relic.ordinal,
            });
        }
    }

    let board = Board::new(width, height, tiles, floating)?;
    Ok(Layout { board, relic_goal })
}

/// Encodes a board and relic goal in board file form, one grid row per line.
pub fn encode_layout(board: &Board, relic_goal: u32) -> String {
    let mut out = format!(
        "{} {} {}\n{}\n",
        board.width(),
        board.height(),
        relic_goal,
        encode_tile(board.floating())
    );
    let rows: Vec<String> = board
        .cells()
        .map(|(_, t)| encode_tile(t))
        .collect::<Vec<_>>()
        .chunks(board.width())
        .map(|row| row.join(" "))
        .collect();
    out.push_str(&rows.join("\n"));
    out.push('\n');
    out
}
