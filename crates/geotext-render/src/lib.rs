//! Geotext Render - the boundary between placement math and a text rasterizer
//!
//! This crate holds the types a rasterizer consumes:
//! - [`Color`] for foreground/background fills
//! - [`Font`], the cosmetic font selection passed through to measurement and drawing
//! - [`TransformOp`] and [`DrawTransform`], the ordered transform sequence for one label
//! - [`Viewport`] describing a tile's pixel extent
//! - [`TextRasterizer`] and [`TextPass`], the drawing seam

mod color;
mod font;
mod rasterizer;
mod transform;
mod viewport;

pub use color::*;
pub use font::*;
pub use rasterizer::*;
pub use transform::*;
pub use viewport::*;
