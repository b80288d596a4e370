//! Shapeboard Core Library
//!
//! Platform-agnostic editing model for the Shapeboard canvas: shapes, the
//! command reducer with snapshot history, pointer interaction, and design
//! persistence.

pub mod bounds;
pub mod command;
pub mod config;
pub mod editor;
pub mod history;
pub mod input;
pub mod interaction;
pub mod selection;
pub mod shapes;
pub mod state;
pub mod storage;

pub use bounds::{clamp, clamp_to};
pub use command::{Command, apply};
pub use config::{ConfigError, ConfigResult, DESIGN_KEY, EditorConfig};
pub use editor::Editor;
pub use history::{History, Snapshot};
pub use input::{MouseButton, PointerEvent};
pub use interaction::{InteractionSession, PointerEngine};
pub use selection::{Handle, HandleKind, HANDLE_HIT_TOLERANCE, MIN_SHAPE_SIZE};
pub use shapes::{Shape, ShapeId, ShapeKind};
pub use state::EditorState;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
