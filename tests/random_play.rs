//! Randomized play against board invariants.
//!
//! Plays many seeded random turns (rotations, legal slides, steps and
//! teleports) and checks after every action that the board still agrees
//! with itself.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use mazeshift::board::{Cell, Direction, Rotation, ALL_COLORS, ALL_DIRECTIONS};
use mazeshift::game::Game;
use mazeshift::movegen::reachable_set;
use mazeshift::protocol::layout::parse_layout;

/// 7x7 board with a mix of straights, elbows and junctions and two relics
/// per color.
const BOARD: &str = "7 7 2 1110x0
0110x0 0101x0 0111g1 0101x0 0111x0 0101x0 0011x0
1010x0 1100x0 1011x0 0110y2 1101x0 0011r1 1010x0
1110x0 0101x0 1110x0 1010x0 0111x0 1001x0 1011x0
1010b2 0110x0 1101x0 1111x0 0111x0 1100g2 1010x0
1110x0 1001x0 1011y1 0101x0 1110b1 0110x0 1011x0
1010x0 0101x0 1100x0 1011r2 0011x0 1010x0 1010x0
1100x0 0101x0 1101x0 0101x0 1101x0 0101x0 1001x0";

fn check_invariants(game: &Game, tiles: usize, relic_counts: &mut [u32; 4]) {
    let board = game.board();
    assert_eq!(board.tile_count(), tiles);

    for color in ALL_COLORS {
        let player = game.player(color);
        let marks: Vec<Cell> = board
            .cells()
            .filter(|(_, t)| t.has_occupant(color))
            .map(|(c, _)| c)
            .collect();
        assert_eq!(marks, vec![player.position], "{color} marks");
        assert!(!board.floating().has_occupant(color));

        let collected = player.relics_collected();
        assert!(collected >= relic_counts[color as usize], "{color} count went down");
        assert!(collected <= game.relic_goal());
        relic_counts[color as usize] = collected;
    }
}

fn check_symmetry(game: &Game, rng: &mut SmallRng) {
    let board = game.board();
    for _ in 0..4 {
        let a = Cell::new(rng.gen_range(1..=board.height()), rng.gen_range(1..=board.width()));
        for b in reachable_set(board, a).iter() {
            assert!(reachable_set(board, b).contains(a), "{a} -> {b}");
        }
    }
}

fn play_turn(game: &mut Game, rng: &mut SmallRng) {
    for _ in 0..rng.gen_range(0..4) {
        let rot = if rng.gen_bool(0.5) {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        };
        game.rotate(rot).unwrap();
    }

    let slides = game.legal_slides();
    let ind = *slides.choose(rng).unwrap();
    let exit = game.slide(ind).unwrap().exit;
    assert_eq!(game.board().last_exit(), Some(exit));
    assert!(game.slide(ind).is_err(), "second slide in one turn");
    if !game.is_running() {
        return;
    }

    for _ in 0..rng.gen_range(0..6) {
        let turn = game.turn();
        let from = game.current().position;
        let moved = if rng.gen_bool(0.5) {
            let dir = ALL_DIRECTIONS[rng.gen_range(0..4)];
            game.step(dir).ok()
        } else {
            let reach = reachable_set(game.board(), from).sorted();
            let to = *reach.choose(rng).unwrap();
            Some(game.teleport(to).unwrap())
        };
        match moved {
            Some(report) if report.won || report.turn_end.is_some() => return,
            Some(report) => assert_eq!(report.from, from),
            None => assert_eq!(game.current().position, from, "{turn} moved on a failed step"),
        }
    }
    game.end_turn().unwrap();
}

#[test]
fn random_games_keep_board_consistent() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = parse_layout(BOARD).unwrap().into_game();
        let tiles = game.board().tile_count();
        let mut counts = [0u32; 4];

        for _ in 0..200 {
            if !game.is_running() {
                break;
            }
            play_turn(&mut game, &mut rng);
            check_invariants(&game, tiles, &mut counts);
            check_symmetry(&game, &mut rng);
        }
    }
}

#[test]
fn steps_match_reachability() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = parse_layout(BOARD).unwrap().into_game();
    for _ in 0..100 {
        let ind = *game.legal_slides().choose(&mut rng).unwrap();
        game.slide(ind).unwrap();
        if !game.is_running() {
            break;
        }
        let from = game.current().position;
        let reach = reachable_set(game.board(), from);
        for dir in [Direction::North, Direction::East, Direction::South, Direction::West] {
            if let Ok(to) = mazeshift::movegen::step_target(game.board(), from, dir) {
                assert!(reach.contains(to), "{from} {dir:?} -> {to}");
            }
        }
        game.end_turn().unwrap();
    }
}
