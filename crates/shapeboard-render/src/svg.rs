//! SVG export.

use crate::renderer::{ExportOptions, RenderResult, Renderer};
use peniko::Color;
use shapeboard_core::shapes::Shape;

/// Writes a design as a standalone SVG document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer {
    options: ExportOptions,
}

impl SvgRenderer {
    /// Create an SVG renderer with the given options.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Output options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }
}

/// `fill="#rrggbb"`, plus `fill-opacity` when the colour is translucent.
fn fill_attrs(color: Color) -> String {
    let rgba = color.to_rgba8();
    let mut attrs = format!("fill=\"#{:02x}{:02x}{:02x}\"", rgba.r, rgba.g, rgba.b);
    if rgba.a < 255 {
        attrs.push_str(&format!(" fill-opacity=\"{:.3}\"", f64::from(rgba.a) / 255.0));
    }
    attrs
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, shapes: &[Shape]) -> RenderResult<String> {
        let ExportOptions {
            width,
            height,
            fill,
            background,
        } = self.options;
        self.options.check_size()?;

        let fill = fill_attrs(fill);
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" {}/>\n",
            fill_attrs(background)
        ));

        for shape in shapes {
            match shape.export_circle() {
                Some(circle) => svg.push_str(&format!(
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {fill}/>\n",
                    circle.center.x, circle.center.y, circle.radius
                )),
                None => svg.push_str(&format!(
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {fill}/>\n",
                    shape.x, shape.y, shape.width, shape.height
                )),
            }
        }

        svg.push_str("</svg>\n");
        log::debug!("SVG export: {} shapes, {} bytes", shapes.len(), svg.len());
        Ok(svg)
    }
}
