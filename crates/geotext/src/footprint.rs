//! Geographic footprint of a label: the sector(s) it covers on the globe.

use crate::geo::{LatLon, Sector};
use crate::offset::Offset;
use geotext_core::geometry::Size;
use geotext_core::math::DVec2;

/// The sectors a label covers, plus the lower-left corner it is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// The measured box was degenerate; the label covers nothing.
    Empty,
    /// The label fits on one side of the antimeridian.
    Single {
        sector: Sector,
        draw_location: LatLon,
    },
    /// The label crosses longitude 180; `sectors[0]` ends at 180, `sectors[1]` starts at -180.
    Split {
        sectors: [Sector; 2],
        draw_location: LatLon,
    },
}

impl Footprint {
    pub fn sectors(&self) -> &[Sector] {
        match self {
            Footprint::Empty => &[],
            Footprint::Single { sector, .. } => std::slice::from_ref(sector),
            Footprint::Split { sectors, .. } => sectors,
        }
    }

    /// Lower-left corner of the box before any antimeridian wrap.
    pub fn draw_location(&self) -> Option<LatLon> {
        match *self {
            Footprint::Empty => None,
            Footprint::Single { draw_location, .. } | Footprint::Split { draw_location, .. } => {
                Some(draw_location)
            }
        }
    }

    pub fn spans_antimeridian(&self) -> bool {
        matches!(self, Footprint::Split { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Footprint::Empty)
    }

    /// Whether any covered sector touches `tile`.
    pub fn intersects(&self, tile: &Sector) -> bool {
        self.sectors().iter().any(|sector| sector.intersects(tile))
    }
}

/// Inputs to [`project_footprint`].
#[derive(Debug, Clone, Copy)]
pub struct FootprintParams<'a> {
    pub anchor: LatLon,
    /// Axis-aligned box of the rotated text, in unscaled pixels.
    pub rotated_bounds: Size<f64>,
    /// Height of the unrotated text box, in unscaled pixels.
    pub text_pixel_height: f64,
    /// Target height of the unrotated text, in meters.
    pub text_size: f64,
    pub globe_radius: f64,
    pub offset: &'a Offset,
}

/// Project a rotated pixel box onto the globe around `anchor`.
///
/// The pixel-to-meter ratio comes from the text itself (`text_size` meters per
/// `text_pixel_height` pixels), so the footprint does not depend on the current view.
pub fn project_footprint(params: &FootprintParams<'_>) -> Footprint {
    let FootprintParams {
        anchor,
        rotated_bounds,
        text_pixel_height,
        text_size,
        globe_radius,
        offset,
    } = *params;

    let usable = rotated_bounds.is_positive()
        && text_pixel_height.is_finite()
        && text_pixel_height > 0.0
        && text_size.is_finite()
        && text_size > 0.0
        && globe_radius.is_finite()
        && globe_radius > 0.0;
    if !usable {
        return Footprint::Empty;
    }

    let Size { width, height } = rotated_bounds;

    let height_factor = height / text_pixel_height;
    let height_in_meters = height_factor * text_size;
    let width_in_meters = height_in_meters * (width / height);

    let height_in_radians = height_in_meters / globe_radius;
    let width_in_radians = width_in_meters / globe_radius;

    let meters_per_pixel = height_in_meters / height;
    let delta: DVec2 = offset.compute(width, height) * meters_per_pixel / globe_radius;

    let min = anchor.add_radians(delta.y, delta.x);
    let max = anchor.add_radians(delta.y + height_in_radians, delta.x + width_in_radians);
    let draw_location = min;

    if max.longitude > 180.0 {
        Footprint::Split {
            sectors: [
                Sector::from_degrees(min.latitude, max.latitude, min.longitude, 180.0),
                Sector::from_degrees(min.latitude, max.latitude, -180.0, max.longitude - 360.0),
            ],
            draw_location,
        }
    } else {
        Footprint::Single {
            sector: Sector::from_degrees(
                min.latitude,
                max.latitude,
                min.longitude,
                max.longitude,
            ),
            draw_location,
        }
    }
}
