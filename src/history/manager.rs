//! Linear undo/redo history.
//!
//! Snapshots form a single line with a cursor on the current one. Saving
//! after an undo cuts off everything past the cursor first, so there is
//! never more than one future to redo into.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::snapshot::Snapshot;
use crate::core::HistoryError;

/// Snapshot list with a cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    /// Index of the current snapshot. Meaningless while empty.
    cursor: usize,
}

impl History {
    /// An empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `snapshot` as the new current state, discarding any redo tail.
    pub fn save(&mut self, snapshot: Snapshot) {
        if !self.snapshots.is_empty() {
            let dropped = self.snapshots.len() - (self.cursor + 1);
            if dropped > 0 {
                trace!(dropped, "discarding redo history");
            }
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot and return it.
    pub fn undo(&mut self) -> Result<&Snapshot, HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::AtEarliest);
        }
        self.cursor -= 1;
        Ok(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot and return it.
    pub fn redo(&mut self) -> Result<&Snapshot, HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::AtLatest);
        }
        self.cursor += 1;
        Ok(&self.snapshots[self.cursor])
    }

    /// Check if there is an earlier snapshot.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor > 0
    }

    /// Check if there is a later snapshot.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The current snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.cursor)
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the current snapshot.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rules::GameOutcome;

    fn snap(turn: u32) -> Snapshot {
        Snapshot::new(&Board::new(), turn, GameOutcome::Playing)
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(history.current().is_none());
        assert_eq!(history.undo().unwrap_err(), HistoryError::AtEarliest);
        assert_eq!(history.redo().unwrap_err(), HistoryError::AtLatest);
    }

    #[test]
    fn test_undo_redo_walk() {
        let mut history = History::new();
        for turn in 1..=3 {
            history.save(snap(turn));
        }
        assert_eq!(history.cursor(), 2);

        assert_eq!(history.undo().unwrap().turn, 2);
        assert_eq!(history.undo().unwrap().turn, 1);
        assert_eq!(history.undo().unwrap_err(), HistoryError::AtEarliest);

        assert_eq!(history.redo().unwrap().turn, 2);
        assert_eq!(history.redo().unwrap().turn, 3);
        assert_eq!(history.redo().unwrap_err(), HistoryError::AtLatest);
    }

    #[test]
    fn test_save_after_undo_cuts_branch() {
        let mut history = History::new();
        for turn in 1..=4 {
            history.save(snap(turn));
        }
        history.undo().unwrap();
        history.undo().unwrap();

        history.save(snap(30));

        assert_eq!(history.len(), 3);
        assert!(!history.can_redo());
        assert_eq!(history.current().unwrap().turn, 30);
        assert_eq!(history.undo().unwrap().turn, 2);
    }

    #[test]
    fn test_serialization() {
        let mut history = History::new();
        history.save(snap(1));
        history.save(snap(2));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
