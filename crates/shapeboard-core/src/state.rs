//! Editor state: the current shapes, the selection and the history ledger.

use crate::history::{History, Snapshot};
use crate::shapes::{Shape, ShapeId};
use std::sync::Arc;

/// Complete editing state, immutable per version.
///
/// Transitions go through [`crate::command::apply`], which returns a new
/// value; a reader holding a state always sees a consistent snapshot.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub(crate) shapes: Snapshot,
    pub(crate) selected_id: Option<ShapeId>,
    pub(crate) history: History,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Fresh state: no shapes, a single empty history entry.
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::from(Vec::new()))
    }

    /// State showing `shapes` with a single-entry history and no selection.
    pub(crate) fn from_snapshot(shapes: Snapshot) -> Self {
        Self {
            history: History::new(shapes.clone()),
            shapes,
            selected_id: None,
        }
    }

    /// Current shapes in paint order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Current snapshot, shared with the history entry under the cursor.
    pub fn snapshot(&self) -> &Snapshot {
        &self.shapes
    }

    /// Id of the selected shape, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_id().and_then(|id| self.get_shape(id))
    }

    /// Look up a shape by id.
    pub fn get_shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// The history ledger.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Cursor into the history ledger.
    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether `other` shows the same snapshot (same allocation).
    pub fn same_snapshot(&self, other: &EditorState) -> bool {
        Arc::ptr_eq(&self.shapes, &other.shapes)
    }

    /// Find the topmost shape whose body contains `point`.
    pub fn shape_at_point(&self, point: kurbo::Point, tolerance: f64) -> Option<&Shape> {
        // Reverse paint order: front-most first
        self.shapes.iter().rev().find(|s| s.hit_test(point, tolerance))
    }

    /// Check if the canvas is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
