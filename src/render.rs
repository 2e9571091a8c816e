//! Terminal rendering.
//!
//! Every tile is drawn as a block of 3 rows by 7 columns. Open sides show a
//! path running to the block edge, the centre shows the path junction (or
//! the letter of a visible relic), and adventurers appear in the block's
//! corners: Green top-left, Yellow top-right, Red bottom-left, Blue
//! bottom-right.
//!
//! ```text
//!      1       2
//!  ┌───────┬───────┐
//!  │ G     │       │
//! 1│   ╔═══│═══╦═══│1
//!  │   ║   │   ║   │
//!  ├───────┼───────┤
//! ```

use std::fmt::Write;

use crate::board::{Adventurer, Board, Color, Tile};

pub const TILE_ROWS: usize = 3;
pub const TILE_COLS: usize = 7;

const CENTER_COL: usize = 3;

/// Returns the path glyph for the junction in a tile's centre.
fn junction(open: [bool; 4]) -> char {
    match open {
        [false, true, false, true] => '═',
        [true, false, true, false] => '║',
        [false, true, true, false] => '╔',
        [false, false, true, true] => '╗',
        [true, true, false, false] => '╚',
        [true, false, false, true] => '╝',
        [true, true, true, false] => '╠',
        [true, false, true, true] => '╣',
        [false, true, true, true] => '╦',
        [true, true, false, true] => '╩',
        [true, true, true, true] => '╬',
        _ => ' ',
    }
}

fn occupant_slot(color: Color) -> (usize, usize) {
    match color {
        Color::Green => (0, 1),
        Color::Yellow => (0, 5),
        Color::Red => (2, 1),
        Color::Blue => (2, 5),
    }
}

/// Lays out one tile's 3x7 glyph block.
pub fn tile_glyphs(tile: &Tile) -> [[char; TILE_COLS]; TILE_ROWS] {
    let [n, e, s, w] = tile.openness().0;
    let mut g = [[' '; TILE_COLS]; TILE_ROWS];

    if n {
        g[0][CENTER_COL] = '║';
    }
    if s {
        g[2][CENTER_COL] = '║';
    }
    if e {
        g[1][CENTER_COL + 1..].fill('═');
    }
    if w {
        g[1][..CENTER_COL].fill('═');
    }
    g[1][CENTER_COL] = junction([n, e, s, w]);

    for color in tile.occupants() {
        let (row, col) = occupant_slot(color);
        g[row][col] = color.player_char();
    }

    if let Some(relic) = tile.relic().filter(|r| !r.is_hidden()) {
        g[1][CENTER_COL] = relic.color.relic_char();
    }

    g
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Draws a horizontal border line: `left`, then `mid` between tiles, then `right`.
fn border(out: &mut String, margin: usize, width: usize, left: char, mid: char, right: char) {
    out.push_str(&" ".repeat(margin));
    out.push(left);
    for col in 1..=width {
        out.extend(std::iter::repeat('─').take(TILE_COLS));
        out.push(if col == width { right } else { mid });
    }
    out.push('\n');
}

fn column_numbers(out: &mut String, margin: usize, width: usize) {
    out.push_str(&" ".repeat(margin + 1));
    for col in 1..=width {
        let _ = write!(out, "{:^w$} ", col, w = TILE_COLS);
    }
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

/// Draws the whole grid with row numbers on both sides and column numbers
/// above and below.
pub fn render_maze(board: &Board) -> String {
    let (width, height) = (board.width(), board.height());
    let margin = digits(height);
    let mut out = String::new();

    column_numbers(&mut out, margin, width);
    border(&mut out, margin, width, '┌', '┬', '┐');

    for row in 1..=height {
        let blocks: Vec<_> = board
            .cells()
            .filter(|(cell, _)| cell.row == row)
            .map(|(_, tile)| tile_glyphs(tile))
            .collect();

        for line in 0..TILE_ROWS {
            if line == 1 {
                let _ = write!(out, "{:>margin$}│", row);
            } else {
                let _ = write!(out, "{:>margin$}│", "");
            }
            for block in &blocks {
                out.extend(block[line].iter());
                out.push('│');
            }
            if line == 1 {
                let _ = write!(out, "{}", row);
            }
            out.push('\n');
        }

        if row == height {
            border(&mut out, margin, width, '└', '┴', '┘');
        } else {
            border(&mut out, margin, width, '├', '┼', '┤');
        }
    }

    column_numbers(&mut out, margin, width);
    out
}

/// Draws a single boxed tile, used for the floating tile.
pub fn render_floating(tile: &Tile) -> String {
    let mut out = String::new();
    border(&mut out, 0, 1, '┌', '┬', '┐');
    for line in tile_glyphs(tile) {
        out.push('│');
        out.extend(line.iter());
        out.push_str("│\n");
    }
    border(&mut out, 0, 1, '└', '┴', '┘');
    out
}

/// Lists how many relics each adventurer holds out of `goal`.
pub fn render_scoreboard(players: &[Adventurer], goal: u32) -> String {
    let mut out = format!("Relics collected /{}:\n", goal);
    for p in players {
        let _ = writeln!(out, "- {:<7}{}", p.color.name(), p.relics_collected());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Openness, Relic};

    fn lines(block: [[char; TILE_COLS]; TILE_ROWS]) -> Vec<String> {
        block.iter().map(|l| l.iter().collect()).collect()
    }

    #[test]
    fn straight_and_cross_glyphs() {
        let ew = Tile::new(Openness::new(false, true, false, true), None);
        assert_eq!(lines(tile_glyphs(&ew)), vec!["       ", "═══════", "       "]);

        let cross = Tile::new(Openness::new(true, true, true, true), None);
        assert_eq!(lines(tile_glyphs(&cross)), vec!["   ║   ", "═══╬═══", "   ║   "]);
    }

    #[test]
    fn elbow_and_junction_centres() {
        let cases = [
            (Openness::new(false, true, true, false), '╔'),
            (Openness::new(false, false, true, true), '╗'),
            (Openness::new(true, true, false, false), '╚'),
            (Openness::new(true, false, false, true), '╝'),
            (Openness::new(true, true, true, false), '╠'),
            (Openness::new(true, false, true, true), '╣'),
            (Openness::new(false, true, true, true), '╦'),
            (Openness::new(true, true, false, true), '╩'),
        ];
        for (open, glyph) in cases {
            let tile = Tile::new(open, None);
            assert_eq!(tile_glyphs(&tile)[1][CENTER_COL], glyph, "{open:?}");
        }
    }

    #[test]
    fn occupants_in_corners() {
        let mut tile = Tile::new(Openness::new(true, false, true, false), None);
        for color in [Color::Green, Color::Yellow, Color::Red, Color::Blue] {
            tile.add_occupant(color);
        }
        assert_eq!(lines(tile_glyphs(&tile)), vec![" G ║ Y ", "   ║   ", " R ║ B "]);
    }

    #[test]
    fn only_visible_relic_is_drawn() {
        let tile = Tile::new(Openness::new(true, true, true, true), Some(Relic::new(1, Color::Red)));
        assert_eq!(tile_glyphs(&tile)[1][CENTER_COL], 'r');
        let hidden = Tile::new(Openness::new(true, true, true, true), Some(Relic::new(2, Color::Red)));
        assert_eq!(tile_glyphs(&hidden)[1][CENTER_COL], '╬');
    }

    #[test]
    fn maze_frame_and_numbers() {
        let tiles = vec![Tile::new(Openness::new(false, true, false, true), None); 6];
        let mut board = Board::new(2, 3, tiles, Tile::new(Openness::default(), None)).unwrap();
        board.place_occupant(Color::Green, Cell::new(1, 1));
        let text = render_maze(&board);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 1 + 1 + 3 * 4 + 1);
        assert_eq!(rows[0], "     1       2");
        assert_eq!(rows[1], " ┌───────┬───────┐");
        assert_eq!(rows[2], " │ G     │       │");
        assert_eq!(rows[3], "1│═══════│═══════│1");
        assert_eq!(rows[5], " ├───────┼───────┤");
        assert_eq!(rows[11], "3│═══════│═══════│3");
        assert_eq!(rows[13], " └───────┴───────┘");
        assert_eq!(rows[14], rows[0]);
    }

    #[test]
    fn floating_tile_box() {
        let tile = Tile::new(Openness::new(true, false, true, false), None);
        assert_eq!(
            render_floating(&tile),
            "┌───────┐\n│   ║   │\n│   ║   │\n│   ║   │\n└───────┘\n"
        );
    }

    #[test]
    fn scoreboard_layout() {
        let mut players = [
            Adventurer::new(Color::Green, Cell::new(1, 1)),
            Adventurer::new(Color::Yellow, Cell::new(1, 7)),
            Adventurer::new(Color::Red, Cell::new(7, 1)),
            Adventurer::new(Color::Blue, Cell::new(7, 7)),
        ];
        players[2].record_relic();
        assert_eq!(
            render_scoreboard(&players, 3),
            "Relics collected /3:\n- Green  0\n- Yellow 0\n- Red    1\n- Blue   0\n"
        );
    }
}
