//! Editing session.
//!
//! An [`Editor`] owns the current [`EditorState`], the pointer engine and an
//! optional storage backend. Every change goes through [`Editor::dispatch`],
//! which runs the reducer and saves the design whenever the shape snapshot
//! was replaced.

use crate::bounds::clamp_to;
use crate::command::{Command, apply};
use crate::config::EditorConfig;
use crate::input::{MouseButton, PointerEvent};
use crate::interaction::{InteractionSession, PointerEngine};
use crate::selection::hit_test_handles;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use crate::state::EditorState;
use crate::storage::{Storage, validate_shapes};
use kurbo::{Point, Vec2};
use std::sync::Arc;

/// A single editing session over one canvas.
pub struct Editor {
    state: EditorState,
    engine: PointerEngine,
    config: EditorConfig,
    storage: Option<Arc<dyn Storage>>,
}

impl Editor {
    /// Create an editor with an empty design and no persistence.
    pub fn new(config: EditorConfig) -> Self {
        let engine = PointerEngine::new(config.canvas_size()).with_min_size(config.min_shape_size);
        Self {
            state: EditorState::new(),
            engine,
            config,
            storage: None,
        }
    }

    /// Create an editor backed by `storage`, restoring the last saved design.
    ///
    /// A missing, unreadable or invalid payload leaves the editor empty.
    pub fn with_storage(config: EditorConfig, storage: Arc<dyn Storage>) -> Self {
        let mut editor = Self::new(config);
        let key = editor.config.storage_key.clone();

        match storage.load(&key) {
            Ok(Some(shapes)) => match validate_shapes(&shapes) {
                Ok(()) => {
                    log::info!("Restored design '{}' with {} shapes", key, shapes.len());
                    editor.state = apply(&editor.state, Command::LoadDesign(shapes));
                }
                Err(e) => log::warn!("Ignoring stored design '{}': {}", key, e),
            },
            Ok(None) => log::debug!("No stored design under '{}'", key),
            Err(e) => log::warn!("Failed to load design '{}': {}", key, e),
        }

        editor.storage = Some(storage);
        editor
    }

    /// Current editor state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Configuration this editor was built with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Gesture in progress.
    pub fn session(&self) -> &InteractionSession {
        self.engine.session()
    }

    /// Apply `command` and persist the result if the shapes changed.
    pub fn dispatch(&mut self, command: Command) {
        let label = command.label();
        let next = apply(&self.state, command);
        let changed = !next.same_snapshot(&self.state);
        self.state = next;

        if changed {
            log::debug!("{} -> history index {}", label, self.state.history_index());
            self.persist();
        }
    }

    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.save(&self.config.storage_key, self.state.shapes()) {
            log::warn!("Failed to save design '{}': {}", self.config.storage_key, e);
        }
    }

    /// Add a default-size shape at the default position.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeId {
        let size = self.config.default_shape_size;
        let shape = Shape::new(kind, self.config.default_position, size, size);
        self.insert(shape)
    }

    /// Add a default-size shape centred on `point`, kept inside the canvas.
    pub fn add_shape_at(&mut self, kind: ShapeKind, point: Point) -> ShapeId {
        let size = self.config.default_shape_size;
        let origin = point - Vec2::new(size / 2.0, size / 2.0);
        let shape = clamp_to(&Shape::new(kind, origin, size, size), self.config.canvas_size());
        self.insert(shape)
    }

    fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id().to_string();
        log::debug!("Adding {} {}", shape.kind.name(), id);
        self.dispatch(Command::AddShape(shape));
        id
    }

    /// Select a shape, or clear the selection.
    pub fn select(&mut self, id: Option<ShapeId>) {
        self.dispatch(Command::SelectShape(id));
    }

    /// Delete the selected shape. Returns false when nothing was selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.state.selected_shape().map(|shape| shape.id().to_string()) else {
            return false;
        };
        self.dispatch(Command::DeleteShape(id));
        true
    }

    /// Step back one history entry.
    pub fn undo(&mut self) {
        self.dispatch(Command::Undo);
    }

    /// Step forward one history entry.
    pub fn redo(&mut self) {
        self.dispatch(Command::Redo);
    }

    /// Feed a canvas-local pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if event.ends_gesture() {
            self.engine.end();
            return;
        }
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.pointer_down(position),
            PointerEvent::Move { position } => {
                if let Some(command) = self.engine.pointer_move(&self.state, position) {
                    self.dispatch(command);
                }
            }
            _ => {}
        }
    }

    fn pointer_down(&mut self, position: Point) {
        self.engine.end();

        // Handles of the selected shape win over any body underneath
        if let Some(selected) = self.state.selected_shape()
            && let Some(handle) = hit_test_handles(selected, position, self.config.handle_tolerance)
        {
            self.engine.begin_resize(selected, handle, position);
            return;
        }

        let hit = self
            .state
            .shape_at_point(position, 0.0)
            .map(|shape| shape.id().to_string());
        match hit {
            Some(id) => {
                let command = self.engine.begin_translate(id, position);
                self.dispatch(command);
            }
            None => self.dispatch(Command::SelectShape(None)),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError, StorageResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        saves: AtomicUsize,
    }

    impl CountingStorage {
        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl Storage for CountingStorage {
        fn save(&self, key: &str, shapes: &[Shape]) -> StorageResult<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save(key, shapes)
        }
        fn load(&self, key: &str) -> StorageResult<Option<Vec<Shape>>> {
            self.inner.load(key)
        }
    }

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn save(&self, _key: &str, _shapes: &[Shape]) -> StorageResult<()> {
            Err(StorageError::Io("disk full".to_string()))
        }
        fn load(&self, _key: &str) -> StorageResult<Option<Vec<Shape>>> {
            Err(StorageError::Io("unreadable".to_string()))
        }
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn move_to(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_add_shape_uses_defaults() {
        let mut editor = Editor::default();
        let id = editor.add_shape(ShapeKind::Rectangle);

        let shape = editor.state().get_shape(&id).unwrap();
        assert_eq!(shape.position(), Point::new(50.0, 50.0));
        assert_eq!((shape.width, shape.height), (100.0, 100.0));
        assert_eq!(editor.state().history_index(), 1);
    }

    #[test]
    fn test_add_shape_at_centres_and_clamps() {
        let mut editor = Editor::default();
        let centred = editor.add_shape_at(ShapeKind::Circle, Point::new(300.0, 200.0));
        let shape = editor.state().get_shape(&centred).unwrap();
        assert_eq!(shape.position(), Point::new(250.0, 150.0));

        let corner = editor.add_shape_at(ShapeKind::Rectangle, Point::new(790.0, 10.0));
        let shape = editor.state().get_shape(&corner).unwrap();
        assert_eq!(shape.position(), Point::new(700.0, 0.0));
    }

    #[test]
    fn test_delete_selected() {
        let mut editor = Editor::default();
        assert!(!editor.delete_selected());

        let id = editor.add_shape(ShapeKind::Rectangle);
        editor.select(Some(id));
        assert!(editor.delete_selected());
        assert!(editor.state().is_empty());
        assert_eq!(editor.state().selected_id(), None);

        editor.undo();
        assert_eq!(editor.state().len(), 1);
        editor.redo();
        assert!(editor.state().is_empty());
    }

    #[test]
    fn test_persists_on_shape_changes_only() {
        let storage = Arc::new(CountingStorage::default());
        let mut editor = Editor::with_storage(EditorConfig::default(), storage.clone());
        assert_eq!(storage.saves(), 0);

        let id = editor.add_shape(ShapeKind::Rectangle);
        assert_eq!(storage.saves(), 1);

        editor.select(Some(id.clone()));
        editor.select(None);
        assert_eq!(storage.saves(), 1);

        editor.undo();
        assert_eq!(storage.saves(), 2);
        assert_eq!(storage.load("design").unwrap(), Some(vec![]));

        // Undo at the start of history changes nothing
        editor.undo();
        assert_eq!(storage.saves(), 2);

        editor.redo();
        assert_eq!(storage.saves(), 3);
        let saved = storage.load("design").unwrap().unwrap();
        assert_eq!(saved[0].id(), id);
    }

    #[test]
    fn test_restores_last_design_as_single_entry_history() {
        let storage = Arc::new(CountingStorage::default());
        {
            let mut first = Editor::with_storage(EditorConfig::default(), storage.clone());
            first.add_shape(ShapeKind::Rectangle);
            first.add_shape(ShapeKind::Circle);
        }

        let restored = Editor::with_storage(EditorConfig::default(), storage.clone());
        assert_eq!(restored.state().len(), 2);
        assert_eq!(restored.state().history().len(), 1);
        assert_eq!(restored.state().history_index(), 0);
        assert!(!restored.state().can_undo());
        // Restoring does not write the design back
        assert_eq!(storage.saves(), 2);
    }

    #[test]
    fn test_invalid_stored_design_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        let dup = vec![
            Shape::with_id("a", ShapeKind::Rectangle, Point::new(0.0, 0.0), 10.0, 10.0),
            Shape::with_id("a", ShapeKind::Circle, Point::new(20.0, 20.0), 10.0, 10.0),
        ];
        storage.save("design", &dup).unwrap();

        let editor = Editor::with_storage(EditorConfig::default(), storage);
        assert!(editor.state().is_empty());
    }

    #[test]
    fn test_storage_failures_do_not_disturb_editing() {
        let mut editor = Editor::with_storage(EditorConfig::default(), Arc::new(BrokenStorage));
        assert!(editor.state().is_empty());

        editor.add_shape(ShapeKind::Rectangle);
        assert_eq!(editor.state().len(), 1);
        assert_eq!(editor.state().history_index(), 1);
    }

    #[test]
    fn test_drag_body_moves_and_selects() {
        let mut editor = Editor::default();
        let id = editor.add_shape(ShapeKind::Rectangle);

        editor.handle_pointer(down(60.0, 60.0));
        assert_eq!(editor.state().selected_id(), Some(id.as_str()));
        assert!(matches!(editor.session(), InteractionSession::Translating { .. }));

        editor.handle_pointer(move_to(70.0, 80.0));
        editor.handle_pointer(move_to(90.0, 100.0));
        editor.handle_pointer(up(90.0, 100.0));

        let shape = editor.state().get_shape(&id).unwrap();
        assert_eq!(shape.position(), Point::new(80.0, 90.0));
        assert_eq!(editor.session(), &InteractionSession::Idle);
        // One add plus one entry per move
        assert_eq!(editor.state().history_index(), 3);
    }

    #[test]
    fn test_drag_handle_resizes_selected_shape() {
        let mut editor = Editor::default();
        let id = editor.add_shape(ShapeKind::Rectangle);
        editor.select(Some(id.clone()));

        // Bottom-right handle sits at (150, 150)
        editor.handle_pointer(down(152.0, 149.0));
        assert!(matches!(editor.session(), InteractionSession::Resizing { .. }));

        editor.handle_pointer(move_to(182.0, 179.0));
        editor.handle_pointer(PointerEvent::Leave);

        let shape = editor.state().get_shape(&id).unwrap();
        assert_eq!((shape.x, shape.y, shape.width, shape.height), (50.0, 50.0, 130.0, 130.0));
        assert_eq!(editor.session(), &InteractionSession::Idle);
    }

    #[test]
    fn test_handles_ignored_without_selection() {
        let mut editor = Editor::default();
        editor.add_shape(ShapeKind::Rectangle);

        // On the top-left corner: inside the body, so a translate starts
        editor.handle_pointer(down(50.0, 50.0));
        assert!(matches!(editor.session(), InteractionSession::Translating { .. }));
    }

    #[test]
    fn test_click_on_empty_canvas_clears_selection() {
        let mut editor = Editor::default();
        let id = editor.add_shape(ShapeKind::Rectangle);
        editor.select(Some(id));

        editor.handle_pointer(down(500.0, 500.0));
        assert_eq!(editor.state().selected_id(), None);
        assert!(!editor.engine.is_active());

        // Moving without a session changes nothing
        let before = editor.state().history_index();
        editor.handle_pointer(move_to(520.0, 520.0));
        assert_eq!(editor.state().history_index(), before);
    }

    #[test]
    fn test_topmost_shape_is_picked() {
        let mut editor = Editor::default();
        editor.add_shape(ShapeKind::Rectangle);
        let top = editor.add_shape_at(ShapeKind::Rectangle, Point::new(120.0, 120.0));

        editor.handle_pointer(down(110.0, 110.0));
        assert_eq!(editor.state().selected_id(), Some(top.as_str()));
    }

    #[test]
    fn test_circle_picked_by_its_box() {
        let mut editor = Editor::default();
        let id = editor.add_shape(ShapeKind::Circle);

        // Outside the drawn circle but inside its box
        editor.handle_pointer(down(55.0, 55.0));
        assert_eq!(editor.state().selected_id(), Some(id.as_str()));
        assert!(matches!(editor.session(), InteractionSession::Translating { .. }));
    }

    #[test]
    fn test_delete_after_undoing_selected_add_keeps_redo() {
        let mut editor = Editor::default();
        let id = editor.add_shape(ShapeKind::Rectangle);
        editor.select(Some(id.clone()));

        editor.undo();
        assert_eq!(editor.state().selected_id(), None);
        assert!(editor.state().can_redo());

        assert!(!editor.delete_selected());
        assert_eq!(editor.state().history().len(), 2);
        assert!(editor.state().can_redo());

        editor.redo();
        assert!(editor.state().get_shape(&id).is_some());
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut editor = Editor::default();
        editor.add_shape(ShapeKind::Rectangle);

        editor.handle_pointer(PointerEvent::Down {
            position: Point::new(60.0, 60.0),
            button: MouseButton::Right,
        });
        assert_eq!(editor.state().selected_id(), None);
        assert!(!editor.engine.is_active());
    }

    #[test]
    fn test_resize_floor_uses_config() {
        let config = EditorConfig {
            min_shape_size: 80.0,
            ..EditorConfig::default()
        };
        let mut editor = Editor::new(config);
        let id = editor.add_shape(ShapeKind::Rectangle);
        editor.select(Some(id.clone()));

        editor.handle_pointer(down(150.0, 150.0));
        editor.handle_pointer(move_to(120.0, 120.0));
        editor.handle_pointer(up(120.0, 120.0));

        let shape = editor.state().get_shape(&id).unwrap();
        assert_eq!((shape.width, shape.height), (100.0, 100.0));
    }
}
