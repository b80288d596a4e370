//! Raster export on tiny-skia, with PNG encoding.

use crate::renderer::{ExportOptions, RenderResult, Renderer, RendererError};
use peniko::Color;
use shapeboard_core::shapes::Shape;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

/// Result of PNG rendering - contains the raw RGBA pixel data and dimensions.
#[derive(Debug, Clone)]
pub struct PngRenderResult {
    /// RGBA pixel data (4 bytes per pixel, not premultiplied).
    pub rgba_data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl PngRenderResult {
    fn from_pixmap(pixmap: &Pixmap) -> Self {
        let rgba_data = pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        Self {
            rgba_data,
            width: pixmap.width(),
            height: pixmap.height(),
        }
    }

    /// RGBA value of the pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba_data.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode RGBA pixel data to PNG bytes.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder
                .write_header()
                .map_err(|e| RendererError::Encode(format!("PNG header: {}", e)))?;
            writer
                .write_image_data(&self.rgba_data)
                .map_err(|e| RendererError::Encode(format!("PNG data: {}", e)))?;
            writer
                .finish()
                .map_err(|e| RendererError::Encode(format!("PNG finish: {}", e)))?;
        }
        log::info!("PNG export complete: {} bytes", png_data.len());
        Ok(png_data)
    }
}

/// Paints a design into a pixmap and hands back its pixels.
///
/// Fills are not anti-aliased, so a pixel is painted when its centre lies
/// inside the shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterRenderer {
    options: ExportOptions,
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let c = color.to_rgba8();
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Fill path for a shape: its box, or the export circle for circles.
fn shape_path(shape: &Shape) -> Option<Path> {
    match shape.export_circle() {
        Some(circle) => PathBuilder::from_circle(
            circle.center.x as f32,
            circle.center.y as f32,
            circle.radius as f32,
        ),
        None => tiny_skia::Rect::from_xywh(
            shape.x as f32,
            shape.y as f32,
            shape.width as f32,
            shape.height as f32,
        )
        .map(PathBuilder::from_rect),
    }
}

impl RasterRenderer {
    /// Create a raster renderer with the given options.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Output options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }
}

impl Renderer for RasterRenderer {
    type Output = PngRenderResult;

    fn render(&self, shapes: &[Shape]) -> RenderResult<PngRenderResult> {
        self.options.check_size()?;
        let ExportOptions {
            width,
            height,
            fill,
            background,
        } = self.options;

        let Some(mut pixmap) = Pixmap::new(width, height) else {
            return Err(RendererError::InvalidSize(width, height));
        };
        pixmap.fill(skia_color(background));

        let mut paint = Paint::default();
        paint.set_color(skia_color(fill));
        paint.anti_alias = false;

        for shape in shapes {
            if !shape.is_finite() {
                log::warn!("Skipping shape {} with non-finite geometry", shape.id());
                continue;
            }
            match shape_path(shape) {
                Some(path) => {
                    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None)
                }
                None => log::debug!("Skipping degenerate shape {}", shape.id()),
            }
        }

        log::debug!("Rasterized {} shapes at {}x{}", shapes.len(), width, height);
        Ok(PngRenderResult::from_pixmap(&pixmap))
    }
}
