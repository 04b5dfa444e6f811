//! Two-pass text drawing: a contrasting background copy, then the text itself.

use crate::background::resolve_background;
use crate::capability::GeographicText;
use crate::frame::{FrameGeometry, FrameOutcome, compute_frame};
use crate::geo::Globe;
use crate::label::Label;
use crate::measure::TextMeasurer;
use crate::tile::TileContext;
use geotext_core::math::DVec2;
use geotext_core::profiling::profile_function;
use geotext_render::{TextPass, TextRasterizer};

/// Local offset of the background copy, one device pixel right and down.
pub const BACKGROUND_PASS_OFFSET: DVec2 = DVec2::new(1.0, -1.0);

/// Issue the background and foreground passes for an already computed frame.
pub fn draw_frame<R: TextRasterizer + ?Sized>(
    label: &Label,
    frame: &FrameGeometry,
    tile: &TileContext,
    rasterizer: &mut R,
) {
    profile_function!();

    let transform = frame.draw_transform(tile);
    let background = resolve_background(label.background_color(), label.color());

    rasterizer.draw_text(&TextPass {
        text: label.text(),
        font: label.font(),
        color: background,
        local_offset: BACKGROUND_PASS_OFFSET,
        transform: &transform,
    });
    rasterizer.draw_text(&TextPass {
        text: label.text(),
        font: label.font(),
        color: label.color(),
        local_offset: DVec2::ZERO,
        transform: &transform,
    });
}

impl Label {
    /// Measure (if needed), compute this frame's geometry and draw it into `tile`.
    ///
    /// Returns the outcome so callers can tell a culled label from a drawn one. Nothing is
    /// handed to the rasterizer when the label is culled.
    pub fn draw<R: TextRasterizer + ?Sized>(
        &mut self,
        measurer: &dyn TextMeasurer,
        globe: &Globe,
        tile: &TileContext,
        rasterizer: &mut R,
    ) -> FrameOutcome {
        let bounds = self.text_bounds(measurer);
        let outcome = compute_frame(self, bounds, globe, tile);
        if let FrameOutcome::Visible(frame) = &outcome {
            draw_frame(self, frame, tile, rasterizer);
        }
        outcome
    }
}
