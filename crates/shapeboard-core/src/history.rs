//! Linear undo/redo ledger of shape snapshots.
//!
//! The ledger is an ordered list of full snapshots plus a cursor. Committing
//! while the cursor is not at the end discards everything after it
//! (overwrite-future), so there is never more than one redo branch.

use crate::shapes::Shape;
use std::sync::Arc;

/// A complete, immutable copy of the shape list at one point in history.
///
/// Snapshots are shared: the editor's current shapes and the ledger entry
/// under the cursor are the same allocation.
pub type Snapshot = Arc<[Shape]>;

/// Ordered snapshot log with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    index: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::from(Vec::new()))
    }
}

impl History {
    /// Create a ledger holding a single snapshot.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.index]
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Drop every entry after the cursor, append `snapshot`, and move the
    /// cursor onto it.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
    }

    /// Move the cursor back one entry.
    /// Returns the snapshot now under the cursor, or None at the start.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Move the cursor forward one entry.
    /// Returns the snapshot now under the cursor, or None at the end.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}
