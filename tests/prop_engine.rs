//! Property-based tests over random playouts.
//!
//! Each case plays a seeded random game and checks the engine's structural
//! guarantees after every committed move.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use rust_eras::board::check_invariants;
use rust_eras::moves::{execute, validate};
use rust_eras::{legal_moves, Board, Game, GameConfig, GameRng, MoveDescriptor, Step};

/// Play up to `plies` random legal moves, returning every board reached.
fn random_playout(seed: u64, plies: usize) -> Vec<Board> {
    let mut rng = GameRng::new(seed);
    let mut game = Game::new(GameConfig::new());
    let mut boards = vec![game.board().clone()];

    for _ in 0..plies {
        if game.is_over() {
            break;
        }
        let moves = game.legal_moves(game.to_move());
        let Some(mv) = rng.choose(&moves).cloned() else {
            break;
        };
        game.commit(&mv).unwrap();
        boards.push(game.board().clone());
    }
    boards
}

fn arbitrary_descriptor(board: &Board) -> impl Strategy<Value = MoveDescriptor> {
    let mover = board.to_move();
    (
        0u8..14,
        prop::collection::vec(0usize..6, 0..=3),
        0usize..3,
        any::<bool>(),
    )
        .prop_map(move |(piece, steps, era, focus_only)| {
            let era = rust_eras::Era::ALL[era];
            if focus_only {
                MoveDescriptor::focus_only(era, mover.opponent())
            } else {
                let steps: Vec<Step> = steps.into_iter().map(|i| Step::ALL[i]).collect();
                MoveDescriptor::new(rust_eras::PieceId(piece), &steps, era, mover.opponent())
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Structural invariants hold on every board of a random game.
    #[test]
    fn prop_invariants_hold(seed in any::<u64>()) {
        for board in random_playout(seed, 80) {
            let violations = check_invariants(&board);
            prop_assert!(violations.is_empty(), "{:?}", violations);
        }
    }

    /// Everything the generator emits validates on the same board.
    #[test]
    fn prop_generated_moves_validate(seed in any::<u64>()) {
        for board in random_playout(seed, 40) {
            let mover = board.to_move();
            let moves = legal_moves(&board, mover);
            prop_assert!(!moves.is_empty());
            for mv in &moves {
                prop_assert_eq!(validate(&board, mv), Ok(()), "{}", mv);
            }
        }
    }

    /// Executing never touches the input board, and a rejected move leaves
    /// an applied copy untouched too.
    #[test]
    fn prop_execute_is_pure(seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let boards = random_playout(seed, 30);
        let board = pick.get(&boards).clone();
        let snapshot = board.clone();

        for mv in legal_moves(&board, board.to_move()) {
            let (next, _) = execute(&board, &mv).unwrap();
            prop_assert!(check_invariants(&next).is_empty());
        }
        prop_assert_eq!(board, snapshot);
    }

    /// Undo all the way back and redo all the way forward reproduces every
    /// board exactly.
    #[test]
    fn prop_undo_redo_round_trip(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut game = Game::new(GameConfig::new().with_undo_redo(true));
        let mut boards = vec![game.board().clone()];

        for _ in 0..30 {
            if game.is_over() {
                break;
            }
            let moves = game.legal_moves(game.to_move());
            let mv = rng.choose(&moves).cloned().unwrap();
            game.commit(&mv).unwrap();
            boards.push(game.board().clone());
        }

        for expected in boards.iter().rev().skip(1) {
            game.undo().unwrap();
            prop_assert_eq!(game.board(), expected);
        }
        prop_assert!(game.undo().is_err());

        for expected in boards.iter().skip(1) {
            game.redo().unwrap();
            prop_assert_eq!(game.board(), expected);
        }
        prop_assert!(game.redo().is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Arbitrary descriptors either fail cleanly or produce a sound board.
    #[test]
    fn prop_arbitrary_moves_never_corrupt(
        (board, mv) in (any::<u64>(), 0usize..20)
            .prop_map(|(seed, plies)| random_playout(seed, plies).pop().unwrap())
            .prop_flat_map(|board| {
                let descriptors = arbitrary_descriptor(&board);
                (Just(board), descriptors)
            })
    ) {
        let before = board.clone();
        if let Ok((next, _)) = execute(&board, &mv) {
            prop_assert!(check_invariants(&next).is_empty());
        }
        prop_assert_eq!(board, before);
    }
}
