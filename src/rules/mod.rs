//! Game rules that read the board without changing it: the win evaluator
//! and the score summary.

pub mod outcome;
pub mod score;
pub mod win;

pub use outcome::GameOutcome;
pub use score::{summarize, ScoreSummary};
pub use win::{evaluate, is_eliminated, presence, ELIMINATION_PRESENCE};
