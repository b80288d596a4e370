//! Circle geometry.
//!
//! A circle shape is drawn inscribed in its bounding box. Export uses a
//! true circle whose radius follows the box width.

use kurbo::{Circle, Rect};

pub(super) fn export_circle(bounds: Rect) -> Circle {
    Circle::new(bounds.center(), bounds.width() / 2.0)
}
