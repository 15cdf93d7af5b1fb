//! A game in progress: board, turn counter, outcome and optional history.
//!
//! ## Turn flow
//!
//! 1. A strategy (or any caller) proposes a [`MoveDescriptor`].
//! 2. [`Game::commit`] re-validates it, applies it transactionally, bumps the
//!    turn and re-evaluates the outcome.
//! 3. With undo/redo enabled, the new state is snapshotted.
//!
//! A rejected move changes nothing. Once the outcome is terminal every
//! commit is rejected with [`MoveError::GameOver`].

use tracing::{debug, info, instrument, warn};

use crate::board::{check_invariants, Board, Era};
use crate::core::{Color, GameConfig, HistoryError, MoveError, PieceId};
use crate::history::{History, Snapshot};
use crate::moves::{self, MoveDescriptor, MoveEffects};
use crate::rules::{evaluate, summarize, GameOutcome, ScoreSummary};
use crate::strategy::Strategy;

/// First turn number.
pub const FIRST_TURN: u32 = 1;

/// Result of asking a strategy for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The strategy had no move to offer.
    NoMove,
    /// The strategy's move was illegal; nothing changed.
    Rejected {
        /// The rejected move.
        mv: MoveDescriptor,
        /// Why it was rejected.
        error: MoveError,
    },
    /// The move was committed.
    Committed {
        /// The move.
        mv: MoveDescriptor,
        /// What else it did.
        effects: MoveEffects,
        /// Outcome after the move.
        outcome: GameOutcome,
    },
}

/// One game session.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: u32,
    outcome: GameOutcome,
    config: GameConfig,
    history: Option<History>,
}

impl Game {
    /// Start a game from the standard layout.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_board(Board::new(), config)
    }

    /// Start a game from an arbitrary board.
    ///
    /// The outcome is evaluated immediately, so a board that is already
    /// decided starts terminal.
    #[must_use]
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let outcome = evaluate(&board, None);
        let history = config.undo_redo.then(History::new);
        let mut game = Self {
            board,
            turn: FIRST_TURN,
            outcome,
            config,
            history,
        };
        game.save();
        game
    }

    // === Queries ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn number, starting at [`FIRST_TURN`].
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Player to move.
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.board.to_move()
    }

    /// Undo/redo history, when enabled.
    #[must_use]
    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    /// Legal moves for `color`. Empty once the game is over or when it is
    /// not `color`'s turn.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<MoveDescriptor> {
        if self.is_over() {
            return Vec::new();
        }
        moves::legal_moves(&self.board, color)
    }

    /// `color`'s active pieces in `era`, in row-major order.
    #[must_use]
    pub fn pieces_in_era(&self, era: Era, color: Color) -> Vec<PieceId> {
        self.board.pieces_in_era(era, Some(color)).collect()
    }

    /// Score summary for `color`, when scoring is enabled.
    #[must_use]
    pub fn score(&self, color: Color) -> Option<ScoreSummary> {
        self.config.score.then(|| summarize(&self.board, color))
    }

    /// Check a move without committing it.
    pub fn validate(&self, mv: &MoveDescriptor) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        moves::validate(&self.board, mv)
    }

    // === Turn control ===

    /// Validate and apply a move, then advance the turn.
    #[instrument(level = "debug", skip(self, mv), fields(turn = self.turn, mv = %mv))]
    pub fn commit(&mut self, mv: &MoveDescriptor) -> Result<MoveEffects, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.board.to_move();
        let effects = moves::apply(&mut self.board, mv)?;

        self.turn += 1;
        self.outcome = evaluate(&self.board, Some(mover));
        self.debug_check_invariants();
        self.save();

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, turn = self.turn, "game over");
        }
        Ok(effects)
    }

    /// Ask `strategy` for a move and try to commit it.
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> TurnOutcome {
        let Some(mv) = strategy.get_move(&self.board) else {
            debug!(strategy = strategy.name(), "no move offered");
            return TurnOutcome::NoMove;
        };

        match self.commit(&mv) {
            Ok(effects) => TurnOutcome::Committed {
                mv,
                effects,
                outcome: self.outcome,
            },
            Err(error) => {
                warn!(strategy = strategy.name(), %mv, %error, "move rejected");
                TurnOutcome::Rejected { mv, error }
            }
        }
    }

    /// Step back to the previous snapshot.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        let history = self.history.as_mut().ok_or(HistoryError::Disabled)?;
        let snapshot = history.undo()?.clone();
        self.restore(snapshot);
        Ok(())
    }

    /// Step forward to the next snapshot.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        let history = self.history.as_mut().ok_or(HistoryError::Disabled)?;
        let snapshot = history.redo()?.clone();
        self.restore(snapshot);
        Ok(())
    }

    fn save(&mut self) {
        if let Some(history) = self.history.as_mut() {
            history.save(Snapshot::new(&self.board, self.turn, self.outcome));
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        debug!(from = self.turn, to = snapshot.turn, "restoring snapshot");
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.outcome = snapshot.outcome;
        self.debug_check_invariants();
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            let violations = check_invariants(&self.board);
            assert!(violations.is_empty(), "board invariants broken: {violations:?}");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
