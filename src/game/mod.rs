//! Game session and match driver.

pub mod driver;
pub mod session;

pub use driver::{play_configured, play_match, MatchReport, StopReason};
pub use session::{Game, TurnOutcome, FIRST_TURN};
