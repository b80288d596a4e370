//! Command dispatcher: the single entry point for state transitions.
//!
//! [`apply`] is a pure reducer. It performs no I/O and is deterministic in
//! `(state, command)`. Malformed commands never fail; they degrade to
//! no-ops so the editor stays responsive:
//!
//! - Undo/Redo past a history boundary returns the state unchanged.
//! - Update/Delete naming an unknown id still commits a new (identical)
//!   snapshot, since mutating commands commit unconditionally.

use crate::history::{History, Snapshot};
use crate::shapes::{Shape, ShapeId};
use crate::state::EditorState;

/// A state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a shape (its id is expected to be unique).
    AddShape(Shape),
    /// Replace the shape with the same id.
    UpdateShape(Shape),
    /// Remove the shape with this id.
    DeleteShape(ShapeId),
    /// Change the selection. Not recorded in history.
    SelectShape(Option<ShapeId>),
    /// Step the history cursor back.
    Undo,
    /// Step the history cursor forward.
    Redo,
    /// Replace everything with a restored design and a fresh history.
    LoadDesign(Vec<Shape>),
}

impl Command {
    /// Short name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddShape(_) => "add shape",
            Command::UpdateShape(_) => "update shape",
            Command::DeleteShape(_) => "delete shape",
            Command::SelectShape(_) => "select shape",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::LoadDesign(_) => "load design",
        }
    }
}

/// Apply `command` to `state`, returning the next state.
pub fn apply(state: &EditorState, command: Command) -> EditorState {
    match command {
        Command::AddShape(shape) => {
            let mut shapes = state.shapes.to_vec();
            shapes.push(shape);
            commit(state, shapes.into(), state.selected_id.clone())
        }
        Command::UpdateShape(shape) => {
            let shapes: Snapshot = state
                .shapes
                .iter()
                .map(|s| if s.id() == shape.id() { shape.clone() } else { s.clone() })
                .collect();
            commit(state, shapes, state.selected_id.clone())
        }
        Command::DeleteShape(id) => {
            let shapes: Snapshot = state.shapes.iter().filter(|s| s.id() != id).cloned().collect();
            let selected_id = state.selected_id.clone().filter(|sel| *sel != id);
            commit(state, shapes, selected_id)
        }
        Command::SelectShape(selected_id) => EditorState {
            selected_id,
            ..state.clone()
        },
        Command::Undo => {
            let mut history = state.history.clone();
            let shapes = history.undo().cloned();
            match shapes {
                Some(shapes) => restore(state, shapes, history),
                None => state.clone(),
            }
        }
        Command::Redo => {
            let mut history = state.history.clone();
            let shapes = history.redo().cloned();
            match shapes {
                Some(shapes) => restore(state, shapes, history),
                None => state.clone(),
            }
        }
        Command::LoadDesign(shapes) => {
            let shapes: Snapshot = shapes.into();
            restore(state, shapes.clone(), History::new(shapes))
        }
    }
}

/// Show `shapes` with `history`, dropping a selection that no longer
/// refers to a present shape.
fn restore(state: &EditorState, shapes: Snapshot, history: History) -> EditorState {
    let selected_id = state
        .selected_id
        .clone()
        .filter(|sel| shapes.iter().any(|s| s.id() == sel.as_str()));
    EditorState {
        shapes,
        selected_id,
        history,
    }
}

/// Truncate the future, append `shapes`, and point the cursor at it.
fn commit(state: &EditorState, shapes: Snapshot, selected_id: Option<ShapeId>) -> EditorState {
    let mut history = state.history.clone();
    history.commit(shapes.clone());
    EditorState {
        shapes,
        selected_id,
        history,
    }
}
