//! Canvas bounds constraint.

use crate::shapes::Shape;
use kurbo::Size;

/// Clamp a shape's position so its box stays inside a `canvas_width` x
/// `canvas_height` canvas. Width and height pass through unchanged.
///
/// A shape larger than the canvas is pinned to the near edge (0) and still
/// overflows the far edge.
pub fn clamp(shape: &Shape, canvas_width: f64, canvas_height: f64) -> Shape {
    let mut clamped = shape.clone();
    clamped.x = shape.x.min(canvas_width - shape.width).max(0.0);
    clamped.y = shape.y.min(canvas_height - shape.height).max(0.0);
    clamped
}

/// [`clamp`] against a canvas size.
pub fn clamp_to(shape: &Shape, canvas: Size) -> Shape {
    clamp(shape, canvas.width, canvas.height)
}
