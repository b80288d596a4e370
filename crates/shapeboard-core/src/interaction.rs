//! Pointer interaction engine.
//!
//! Turns a continuous pointer gesture into a sequence of [`Command`]s. The
//! gesture in progress lives in an [`InteractionSession`], kept outside the
//! undoable [`EditorState`] so drag noise never reaches history unless it
//! is dispatched as a command.
//!
//! Translate deltas are incremental (measured from the previous move), so
//! clamping accumulates. Resize deltas are measured from the start of the
//! gesture against the shape geometry captured at that moment.

use crate::bounds::clamp_to;
use crate::command::Command;
use crate::selection::{HandleKind, MIN_SHAPE_SIZE, apply_resize};
use crate::shapes::{Shape, ShapeId};
use crate::state::EditorState;
use kurbo::{Point, Size};

/// The gesture currently being tracked.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging a shape body.
    Translating {
        /// Shape being moved.
        shape_id: ShapeId,
        /// Pointer position at the previous event.
        last_point: Point,
    },
    /// Dragging one of the selected shape's handles.
    Resizing {
        /// Handle being dragged.
        handle: HandleKind,
        /// Pointer position when the gesture began.
        start_point: Point,
        /// Shape geometry when the gesture began.
        original: Shape,
    },
}

/// Stateful translator from pointer positions to commands.
#[derive(Debug, Clone)]
pub struct PointerEngine {
    session: InteractionSession,
    canvas_size: Size,
    min_size: f64,
}

impl PointerEngine {
    /// Create an idle engine for a canvas of `canvas_size`.
    pub fn new(canvas_size: Size) -> Self {
        Self {
            session: InteractionSession::Idle,
            canvas_size,
            min_size: MIN_SHAPE_SIZE,
        }
    }

    /// Override the resize floor.
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    /// The gesture in progress.
    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.session != InteractionSession::Idle
    }

    /// Start dragging the body of `shape_id` from `point`.
    ///
    /// Returns the selection command the caller should dispatch.
    pub fn begin_translate(&mut self, shape_id: impl Into<ShapeId>, point: Point) -> Command {
        let shape_id = shape_id.into();
        log::debug!("Translate session started on {shape_id}");
        self.session = InteractionSession::Translating {
            shape_id: shape_id.clone(),
            last_point: point,
        };
        Command::SelectShape(Some(shape_id))
    }

    /// Start dragging `handle` of `shape` from `point`.
    pub fn begin_resize(&mut self, shape: &Shape, handle: HandleKind, point: Point) {
        log::debug!("Resize session started on {} ({})", shape.id(), handle.label());
        self.session = InteractionSession::Resizing {
            handle,
            start_point: point,
            original: shape.clone(),
        };
    }

    /// Feed a pointer move. Returns the update to dispatch, if any.
    ///
    /// A resize whose candidate size falls under the floor yields None and
    /// the session continues. A gesture whose shape has disappeared from
    /// `state` is ended.
    pub fn pointer_move(&mut self, state: &EditorState, point: Point) -> Option<Command> {
        let canvas = self.canvas_size;
        let min_size = self.min_size;

        match &mut self.session {
            InteractionSession::Idle => None,
            InteractionSession::Translating {
                shape_id,
                last_point,
            } => {
                let Some(shape) = state.get_shape(shape_id) else {
                    log::debug!("Translated shape {shape_id} is gone, ending session");
                    self.session = InteractionSession::Idle;
                    return None;
                };
                let delta = point - *last_point;
                let moved = clamp_to(&shape.translated(delta), canvas);
                *last_point = point;
                Some(Command::UpdateShape(moved))
            }
            InteractionSession::Resizing {
                handle,
                start_point,
                original,
            } => {
                if state.get_shape(original.id()).is_none() {
                    log::debug!("Resized shape {} is gone, ending session", original.id());
                    self.session = InteractionSession::Idle;
                    return None;
                }
                let delta = point - *start_point;
                let resized = apply_resize(original, *handle, delta, min_size)?;
                Some(Command::UpdateShape(clamp_to(&resized, canvas)))
            }
        }
    }

    /// End whatever gesture is in progress (pointer up or leave).
    pub fn end(&mut self) {
        if self.is_active() {
            log::debug!("Interaction session ended");
        }
        self.session = InteractionSession::Idle;
    }
}
