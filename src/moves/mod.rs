//! Moves: descriptors, the validator/executor, and the legal move generator.
//!
//! The generator and the executor share one step function, so the set of
//! generated moves and the set of moves that validate are the same set.

pub mod descriptor;
pub mod executor;
pub mod generator;

pub use descriptor::{MoveDescriptor, ParseStepError, Step, FOCUS_ONLY_TEXT, MAX_STEPS};
pub use executor::{apply, execute, is_legal, is_surrounded_by_friends, validate, MoveEffects};
pub use generator::{
    has_piece_moves, legal_moves, moves_for_piece, piece_moves, step_sequences, StepSequence,
};
