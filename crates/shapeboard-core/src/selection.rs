//! Selection handles and handle-based resizing.

use crate::shapes::Shape;
use kurbo::{Point, Rect, Vec2};

/// Minimum width and height a resize may produce, in canvas pixels.
pub const MIN_SHAPE_SIZE: f64 = 20.0;

/// Handle hit tolerance in canvas pixels (half the drawn handle size).
pub const HANDLE_HIT_TOLERANCE: f64 = 6.0;

/// One of the eight resize handles on a selected shape's bounding box.
///
/// Each handle carries one or two compass labels; the labels decide which
/// edges of the box follow the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandleKind {
    /// All handles, clockwise from the top-left corner.
    pub const ALL: [HandleKind; 8] = [
        HandleKind::TopLeft,
        HandleKind::Top,
        HandleKind::TopRight,
        HandleKind::Right,
        HandleKind::BottomRight,
        HandleKind::Bottom,
        HandleKind::BottomLeft,
        HandleKind::Left,
    ];

    /// Handle moves the top edge.
    pub fn has_top(self) -> bool {
        matches!(self, HandleKind::TopLeft | HandleKind::Top | HandleKind::TopRight)
    }

    /// Handle moves the bottom edge.
    pub fn has_bottom(self) -> bool {
        matches!(
            self,
            HandleKind::BottomLeft | HandleKind::Bottom | HandleKind::BottomRight
        )
    }

    /// Handle moves the left edge.
    pub fn has_left(self) -> bool {
        matches!(self, HandleKind::TopLeft | HandleKind::Left | HandleKind::BottomLeft)
    }

    /// Handle moves the right edge.
    pub fn has_right(self) -> bool {
        matches!(
            self,
            HandleKind::TopRight | HandleKind::Right | HandleKind::BottomRight
        )
    }

    /// Compass label, e.g. `"top-left"`.
    pub fn label(self) -> &'static str {
        match self {
            HandleKind::TopLeft => "top-left",
            HandleKind::Top => "top",
            HandleKind::TopRight => "top-right",
            HandleKind::Right => "right",
            HandleKind::BottomRight => "bottom-right",
            HandleKind::Bottom => "bottom",
            HandleKind::BottomLeft => "bottom-left",
            HandleKind::Left => "left",
        }
    }

    /// Where the handle sits on `bounds`.
    pub fn position_on(self, bounds: Rect) -> Point {
        let center = bounds.center();
        let x = if self.has_left() {
            bounds.x0
        } else if self.has_right() {
            bounds.x1
        } else {
            center.x
        };
        let y = if self.has_top() {
            bounds.y0
        } else if self.has_bottom() {
            bounds.y1
        } else {
            center.y
        };
        Point::new(x, y)
    }
}

/// A selection handle with its position and type.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// Position in canvas coordinates.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point (in canvas coordinates) hits this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// Get the eight resize handles for a shape.
pub fn get_handles(shape: &Shape) -> Vec<Handle> {
    let bounds = shape.bounds();
    HandleKind::ALL
        .into_iter()
        .map(|kind| Handle::new(kind.position_on(bounds), kind))
        .collect()
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(shape: &Shape, point: Point, tolerance: f64) -> Option<HandleKind> {
    get_handles(shape)
        .into_iter()
        .find(|handle| handle.hit_test(point, tolerance))
        .map(|handle| handle.kind)
}

/// Resize `original` by dragging `handle` by `delta` (measured from the
/// start of the gesture).
///
/// Returns None when the candidate width or height falls below `min_size`;
/// the caller keeps the last accepted geometry.
pub fn apply_resize(original: &Shape, handle: HandleKind, delta: Vec2, min_size: f64) -> Option<Shape> {
    let mut shape = original.clone();

    if handle.has_left() {
        shape.x += delta.x;
        shape.width -= delta.x;
    } else if handle.has_right() {
        shape.width += delta.x;
    }

    if handle.has_top() {
        shape.y += delta.y;
        shape.height -= delta.y;
    } else if handle.has_bottom() {
        shape.height += delta.y;
    }

    if shape.width < min_size || shape.height < min_size {
        return None;
    }
    Some(shape)
}
