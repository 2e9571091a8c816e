use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use mazeshift::board::{Board, Cell, Openness, SlideIndicator, Tile};
use mazeshift::game::Game;
use mazeshift::movegen::{legal_slides, reachable_set};
use mazeshift::protocol::layout::{encode_layout, parse_layout};
use mazeshift::protocol::parser::parse_command;
use mazeshift::render::render_maze;

const SIZE: usize = 9;

fn random_tile(rng: &mut SmallRng) -> Tile {
    let mut open = Openness::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
    while open.open_count() < 2 {
        open = Openness::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
    }
    Tile::new(open, None)
}

/// A 9x9 maze of random straights, elbows and junctions.
fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let tiles = (0..SIZE * SIZE).map(|_| random_tile(&mut rng)).collect();
    let floating = random_tile(&mut rng);
    Board::new(SIZE, SIZE, tiles, floating).unwrap()
}

fn bench_reachable_set(c: &mut Criterion) {
    let board = random_board(1);
    let from = Cell::new(5, 5);
    c.bench_function("reachable_set_9x9", |b| {
        b.iter(|| reachable_set(black_box(&board), black_box(from)))
    });
}

fn bench_legal_slides(c: &mut Criterion) {
    let board = random_board(2);
    c.bench_function("legal_slides_9x9", |b| b.iter(|| legal_slides(black_box(&board))));
}

fn bench_slide(c: &mut Criterion) {
    let game = Game::new(random_board(3), 1);
    let ind: SlideIndicator = "e4".parse().unwrap();
    c.bench_function("slide_row_9x9", |b| {
        b.iter(|| {
            let mut g = game.clone();
            g.slide(black_box(ind)).unwrap()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let board = random_board(4);
    c.bench_function("render_maze_9x9", |b| b.iter(|| render_maze(black_box(&board))));
}

fn bench_layout_parse(c: &mut Criterion) {
    let text = encode_layout(&random_board(5), 3);
    c.bench_function("parse_layout_9x9", |b| b.iter(|| parse_layout(black_box(&text)).unwrap()));
}

fn bench_parse_command(c: &mut Criterion) {
    let words = ["r", "l", "n4", "e", "3,7", "done", "zz"];
    c.bench_function("parse_command_mixed", |b| {
        b.iter(|| {
            for w in &words {
                black_box(parse_command(black_box(w)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_reachable_set,
    bench_legal_slides,
    bench_slide,
    bench_render,
    bench_layout_parse,
    bench_parse_command,
);
criterion_main!(benches);
