//! Snapshot-based undo/redo.

pub mod manager;
pub mod snapshot;

pub use manager::History;
pub use snapshot::Snapshot;
