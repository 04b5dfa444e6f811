//! Geotext - text draped on the surface of a globe
//!
//! A [`Label`] is anchored to a geographic position and keeps a constant size in meters:
//! zooming changes how many pixels it covers, never its footprint on the ground.
//! For each tile being drawn, geotext works out:
//!
//! - the uniform render scale for the tile's pixel size, or a cull when the text is too small
//! - the axis-aligned box of the text rotated by its heading
//! - the sector(s) the label covers, split in two when it crosses the antimeridian
//! - the ordered [`DrawTransform`] a rasterizer applies to place the text
//!
//! Glyph shaping and rasterization stay outside: text is measured through [`TextMeasurer`]
//! and drawn through [`TextRasterizer`].
//!
//! ## Quick Start
//!
//! ```rust
//! use geotext::prelude::*;
//!
//! // A measurer that treats every character as 12x24 pixels
//! let measurer = |text: &str, _: &Font| Size::new(12.0 * text.chars().count() as f64, 24.0);
//!
//! let mut layer = SurfaceTextLayer::new(measurer);
//! let id = layer.add(Label::with_defaults("Mont Blanc", Position::from_degrees(45.83, 6.86))?);
//! layer.get_mut(id).unwrap().set_heading(30.0)?;
//!
//! // A quarter-degree tile rendered at 512x512
//! let tile = TileContext::for_sector(
//!     Sector::from_degrees(45.7, 45.95, 6.75, 7.0),
//!     Viewport::new(512.0, 512.0),
//! );
//!
//! struct Nothing;
//! impl TextRasterizer for Nothing {
//!     fn draw_text(&mut self, _: &TextPass<'_>) {}
//! }
//!
//! let stats = layer.draw_tile(&tile, &mut Nothing);
//! assert_eq!(stats.drawn, 1);
//! # Ok::<(), geotext::LabelError>(())
//! ```
//!
//! ## Features
//!
//! - `profiling` (default): puffin scopes around frame computation and drawing
//! - `cosmic`: [`CosmicMeasurer`](measure::CosmicMeasurer), measuring with cosmic-text

pub mod background;
pub mod capability;
pub mod config;
pub mod draw;
pub mod error;
pub mod footprint;
pub mod frame;
pub mod geo;
pub mod label;
pub mod layer;
pub mod measure;
pub mod offset;
pub mod rotation;
pub mod scale;
pub mod tile;
mod transform;

pub use geotext_core as core;
pub use geotext_core::math;
pub use geotext_render as render;

pub use capability::{Draggable, GeographicText, Movable};
pub use config::{DEFAULT_TEXT_SIZE_IN_METERS, LabelConfig};
pub use draw::{BACKGROUND_PASS_OFFSET, draw_frame};
pub use error::{LabelError, LabelResult};
pub use footprint::Footprint;
pub use frame::{CullReason, FrameGeometry, FrameOutcome, compute_frame};
pub use geo::{Globe, LatLon, Position, Sector};
pub use label::Label;
pub use layer::{LabelId, LayerDrawStats, SurfaceTextLayer};
pub use measure::TextMeasurer;
pub use offset::{Offset, OffsetUnit};
pub use tile::TileContext;

pub use geotext_render::{Color, DrawTransform, Font, TextPass, TextRasterizer, TransformOp, Viewport};

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::{
        Color, Draggable, Font, FrameOutcome, GeographicText, Globe, Label, LabelConfig,
        LabelError, LabelId, Movable, Offset, Position, Sector, SurfaceTextLayer, TextMeasurer,
        TextPass, TextRasterizer, TileContext, Viewport,
    };
    pub use geotext_core::geometry::Size;
}
