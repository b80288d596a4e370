//! Shape definitions for the canvas.
//!
//! Both primitive kinds share one bounding-box representation: a top-left
//! corner plus an extent in canvas pixels, and both are picked by that box.
//! The circle's export form lives in its own submodule.

mod circle;

use kurbo::{Circle, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
///
/// Persisted designs may carry ids minted elsewhere, so any string is
/// accepted; freshly created shapes get a UUID v4.
pub type ShapeId = String;

/// Mint a fresh shape identifier.
pub fn new_shape_id() -> ShapeId {
    Uuid::new_v4().to_string()
}

/// The primitive kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle filling its box.
    Rectangle,
    /// Circle inscribed in its box.
    Circle,
}

impl ShapeKind {
    /// Lowercase name, as used in persisted payloads.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

/// A shape on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    /// Primitive kind.
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
}

impl Shape {
    /// Create a new shape with a fresh id.
    pub fn new(kind: ShapeKind, position: Point, width: f64, height: f64) -> Self {
        Self::with_id(new_shape_id(), kind, position, width, height)
    }

    /// Create a shape with a specific id (for storage and tests).
    pub fn with_id(
        id: impl Into<ShapeId>,
        kind: ShapeKind,
        position: Point,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            x: position.x,
            y: position.y,
            width,
            height,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Check if a point (in canvas coordinates) hits the shape.
    ///
    /// Both kinds are picked by their (inflated) bounding box, so the
    /// corners of a circle's box still hit it.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    /// Copy of this shape moved by `delta`; the id is kept.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self.clone()
        }
    }

    /// Circle used when exporting a circle shape.
    ///
    /// Centred on the box, radius `width / 2`. Height is ignored, so a
    /// non-square circle box exports as a circle of its width.
    pub fn export_circle(&self) -> Option<Circle> {
        match self.kind {
            ShapeKind::Circle => Some(circle::export_circle(self.bounds())),
            ShapeKind::Rectangle => None,
        }
    }

    /// Whether every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }
}
