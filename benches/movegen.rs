//! Benchmarks for legal move generation and full random games.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_eras::game::play_match;
use rust_eras::{legal_moves, Board, Color, Game, GameConfig, RandomStrategy};

/// A busier board than the opening: a few plies of random play.
fn midgame_board() -> Board {
    let mut game = Game::new(GameConfig::new().with_max_turns(12));
    let mut white = RandomStrategy::new(7);
    let mut black = RandomStrategy::new(8);
    play_match(&mut game, &mut white, &mut black);
    game.board().clone()
}

fn bench_opening_moves(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| black_box(legal_moves(black_box(&board), Color::White)));
    });
}

fn bench_midgame_moves(c: &mut Criterion) {
    let board = midgame_board();
    let mover = board.to_move();

    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| black_box(legal_moves(black_box(&board), mover)));
    });
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game_200_turns", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::new().with_max_turns(200));
            let mut white = RandomStrategy::new(black_box(1));
            let mut black = RandomStrategy::new(black_box(2));
            black_box(play_match(&mut game, &mut white, &mut black))
        });
    });
}

criterion_group!(benches, bench_opening_moves, bench_midgame_moves, bench_random_game);
criterion_main!(benches);
