//! Builds the ordered transform a rasterizer applies to place a label's text.

use crate::frame::FrameGeometry;
use crate::tile::TileContext;
use geotext_core::math::{DVec2, signum_or_zero};
use geotext_render::DrawTransform;

impl FrameGeometry {
    /// The transform placing this label's text into `tile`.
    ///
    /// Ops, outermost first:
    /// 1. translate to the projected anchor
    /// 2. scale to the geographic text size
    /// 3. translate to the rotated box center, plus the resolved offset
    /// 4. rotate by `-heading` (headings are clockwise)
    /// 5. translate by half the unrotated box, so the text rotates about its center
    ///
    /// When the label crosses the antimeridian and `tile` is on the other side of it from
    /// the draw location, the anchor is projected at `longitude - 360` so both halves line up.
    pub fn draw_transform(&self, tile: &TileContext) -> DrawTransform {
        let mut longitude = self.anchor.longitude;
        if let Some(draw_location) = self.draw_location()
            && self.spans_antimeridian()
            && signum_or_zero(tile.sector.min_longitude) != signum_or_zero(draw_location.longitude)
        {
            longitude -= 360.0;
        }
        let anchor_point = tile.project(self.anchor.latitude, longitude);

        let rotated = DVec2::new(self.rotated_bounds.width, self.rotated_bounds.height);
        let unrotated = DVec2::new(self.text_bounds.width, self.text_bounds.height);

        DrawTransform::new()
            .then_translate(anchor_point)
            .then_scale_uniform(self.scale)
            .then_translate_2d(rotated / 2.0 + self.pixel_offset)
            .then_rotate_z(-self.heading)
            .then_translate_2d(-unrotated / 2.0)
    }
}
