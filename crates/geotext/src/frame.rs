//! Per-frame geometry for one label in one tile.
//!
//! [`compute_frame`] is a pure function of the label's configuration, its measured text
//! bounds, the globe and the tile. Nothing it derives is written back to the label.

use crate::capability::GeographicText;
use crate::footprint::{Footprint, FootprintParams, project_footprint};
use crate::geo::{Globe, LatLon};
use crate::label::Label;
use crate::rotation::rotated_bounds;
use crate::scale::{is_too_small, pixel_size_in_meters, text_scale};
use crate::tile::TileContext;
use geotext_core::geometry::Size;
use geotext_core::math::DVec2;
use geotext_core::profiling::profile_function;

/// Why a label produced no geometry this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullReason {
    /// The label is hidden.
    Hidden,
    /// The tile has no usable pixel size (degenerate viewport or zero latitude extent).
    DegenerateTile,
    /// The measured text has no usable extent.
    DegenerateText,
    /// The text is below the size threshold for this tile.
    TooSmall,
}

/// Geometry needed to draw a label into one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    /// Anchor of the label.
    pub anchor: LatLon,
    /// Degrees clockwise from north, as configured.
    pub heading: f64,
    /// Meters covered by one pixel of the tile.
    pub pixel_size_in_meters: f64,
    /// Uniform scale bringing the text to its geographic height.
    pub scale: f64,
    /// Unrotated, unscaled text box in pixels.
    pub text_bounds: Size<f64>,
    /// Axis-aligned box of the rotated text in pixels.
    pub rotated_bounds: Size<f64>,
    /// Offset resolved against `rotated_bounds`, in pixels.
    pub pixel_offset: DVec2,
    pub footprint: Footprint,
}

impl FrameGeometry {
    /// Lower-left of the footprint before antimeridian wrapping.
    pub fn draw_location(&self) -> Option<LatLon> {
        self.footprint.draw_location()
    }

    pub fn spans_antimeridian(&self) -> bool {
        self.footprint.spans_antimeridian()
    }
}

/// Result of [`compute_frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Visible(FrameGeometry),
    Culled(CullReason),
}

impl FrameOutcome {
    pub fn geometry(&self) -> Option<&FrameGeometry> {
        match self {
            FrameOutcome::Visible(geometry) => Some(geometry),
            FrameOutcome::Culled(_) => None,
        }
    }

    pub fn is_culled(&self) -> bool {
        matches!(self, FrameOutcome::Culled(_))
    }
}

/// Compute everything needed to draw `label` into `tile`.
///
/// The size checks run first; a culled label does no rotation or footprint work.
pub fn compute_frame(
    label: &Label,
    text_bounds: Size<f64>,
    globe: &Globe,
    tile: &TileContext,
) -> FrameOutcome {
    profile_function!();

    if !label.is_visible() {
        return FrameOutcome::Culled(CullReason::Hidden);
    }

    if tile.viewport.is_degenerate() {
        tracing::trace!(text = label.text(), "Culled: degenerate viewport {:?}", tile.viewport);
        return FrameOutcome::Culled(CullReason::DegenerateTile);
    }

    let Some(pixel_size) = pixel_size_in_meters(
        globe.radius,
        tile.sector.delta_latitude_radians(),
        tile.viewport.height,
    ) else {
        tracing::trace!(text = label.text(), "Culled: degenerate tile {:?}", tile.sector);
        return FrameOutcome::Culled(CullReason::DegenerateTile);
    };

    if !text_bounds.is_positive() {
        tracing::trace!(text = label.text(), "Culled: empty text bounds");
        return FrameOutcome::Culled(CullReason::DegenerateText);
    }

    let Some(scale) = text_scale(label.text_size(), pixel_size, text_bounds.height) else {
        tracing::trace!(text = label.text(), "Culled: undefined scale");
        return FrameOutcome::Culled(CullReason::DegenerateText);
    };

    if is_too_small(scale, label.text_size(), pixel_size) {
        tracing::trace!(text = label.text(), scale, pixel_size, "Culled: too small");
        return FrameOutcome::Culled(CullReason::TooSmall);
    }

    let rotated = rotated_bounds(text_bounds, label.heading());
    let pixel_offset = label.offset().compute(rotated.width, rotated.height);
    let footprint = project_footprint(&FootprintParams {
        anchor: label.position().lat_lon(),
        rotated_bounds: rotated,
        text_pixel_height: text_bounds.height,
        text_size: label.text_size(),
        globe_radius: globe.radius,
        offset: label.offset(),
    });
    if footprint.is_empty() {
        return FrameOutcome::Culled(CullReason::DegenerateText);
    }

    FrameOutcome::Visible(FrameGeometry {
        anchor: label.position().lat_lon(),
        heading: label.heading(),
        pixel_size_in_meters: pixel_size,
        scale,
        text_bounds,
        rotated_bounds: rotated,
        pixel_offset,
        footprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Position, Sector};
    use geotext_render::Viewport;

    const TEXT: Size<f64> = Size {
        width: 100.0,
        height: 20.0,
    };

    fn label() -> Label {
        Label::with_defaults("Frame", Position::from_degrees(0.0, 0.0)).unwrap()
    }

    fn tile(lat_span: f64, viewport_height: f64) -> TileContext {
        TileContext::for_sector(
            Sector::from_degrees(-lat_span / 2.0, lat_span / 2.0, -0.5, 0.5),
            Viewport::new(500.0, viewport_height),
        )
    }

    #[test]
    fn test_visible_frame_fields() {
        let mut label = label();
        label.set_heading(90.0).unwrap();
        let outcome = compute_frame(&label, TEXT, &Globe::default(), &tile(1.0, 1000.0));
        let frame = outcome.geometry().unwrap();

        assert_eq!(frame.heading, 90.0);
        assert_eq!(frame.text_bounds, TEXT);
        assert!((frame.rotated_bounds.width - 20.0).abs() < 1e-9);
        assert!((frame.rotated_bounds.height - 100.0).abs() < 1e-9);
        assert!((frame.pixel_offset - DVec2::new(-10.0, -50.0)).length() < 1e-9);
        assert!(!frame.spans_antimeridian());
        assert!(frame.draw_location().is_some());
    }

    #[test]
    fn test_hidden_label_is_culled() {
        let mut label = label();
        label.set_visible(false);
        let outcome = compute_frame(&label, TEXT, &Globe::default(), &tile(1.0, 1000.0));
        assert_eq!(outcome, FrameOutcome::Culled(CullReason::Hidden));
    }

    #[test]
    fn test_degenerate_tile_is_culled() {
        let outcome = compute_frame(&label(), TEXT, &Globe::default(), &tile(1.0, 0.0));
        assert_eq!(outcome, FrameOutcome::Culled(CullReason::DegenerateTile));

        let outcome = compute_frame(&label(), TEXT, &Globe::default(), &tile(0.0, 1000.0));
        assert_eq!(outcome, FrameOutcome::Culled(CullReason::DegenerateTile));

        let zero_width = TileContext::for_sector(
            Sector::from_degrees(-0.5, 0.5, -0.5, 0.5),
            Viewport::new(0.0, 1000.0),
        );
        let outcome = compute_frame(&label(), TEXT, &Globe::default(), &zero_width);
        assert_eq!(outcome, FrameOutcome::Culled(CullReason::DegenerateTile));
    }

    #[test]
    fn test_degenerate_text_is_culled() {
        for bounds in [Size::new(100.0, 0.0), Size::new(0.0, 20.0), Size::new(f64::NAN, 20.0)] {
            let outcome = compute_frame(&label(), bounds, &Globe::default(), &tile(1.0, 1000.0));
            assert_eq!(outcome, FrameOutcome::Culled(CullReason::DegenerateText));
        }
    }

    #[test]
    fn test_cull_is_monotonic_in_zoom() {
        let label = label();
        let globe = Globe::default();
        let mut culled_before = false;
        for span in [0.1, 0.5, 1.0, 2.0, 5.0, 20.0, 90.0] {
            let culled = compute_frame(&label, TEXT, &globe, &tile(span, 1000.0)).is_culled();
            assert!(!culled_before || culled, "uncull at span {span}");
            culled_before = culled;
        }
        assert!(culled_before);
    }

    #[test]
    fn test_cull_is_monotonic_in_text_size() {
        let mut label = label();
        let globe = Globe::default();
        let tile = tile(1.0, 1000.0);
        let mut visible_before = false;
        for meters in [1.0, 10.0, 100.0, 500.0, 1000.0, 10_000.0] {
            label.set_text_size(meters).unwrap();
            let visible = !compute_frame(&label, TEXT, &globe, &tile).is_culled();
            assert!(!visible_before || visible, "culled at {meters} m");
            visible_before = visible;
        }
        assert!(visible_before);
    }
}
