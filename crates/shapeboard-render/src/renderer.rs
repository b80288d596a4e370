//! Renderer trait abstraction.

use peniko::Color;
use shapeboard_core::shapes::Shape;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid output size: {0}x{1}")]
    InvalidSize(u32, u32),
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Output settings shared by the export backends.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Shape fill colour.
    pub fill: Color,
    /// Background colour.
    pub background: Color,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fill: Color::from_rgba8(0x4f, 0x46, 0xe5, 255), // Indigo
            background: Color::from_rgba8(255, 255, 255, 255),
        }
    }
}

impl ExportOptions {
    /// Set the output size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the shape fill colour.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    /// Set the background colour.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Fail on an empty surface.
    pub(crate) fn check_size(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RendererError::InvalidSize(self.width, self.height));
        }
        Ok(())
    }
}

/// Trait for export backends.
///
/// Shapes are drawn in slice order, so later shapes paint over earlier ones.
pub trait Renderer {
    /// What a finished render produces.
    type Output;

    /// Render `shapes` into a new output.
    fn render(&self, shapes: &[Shape]) -> RenderResult<Self::Output>;
}
