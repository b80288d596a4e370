//! Shapeboard Render Library
//!
//! Export backends for Shapeboard designs: an SVG writer and a small
//! software rasterizer with PNG encoding.

mod raster;
mod renderer;
mod svg;

pub use raster::{PngRenderResult, RasterRenderer};
pub use renderer::{ExportOptions, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
