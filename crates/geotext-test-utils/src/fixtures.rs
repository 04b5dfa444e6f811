//! Shared tiles and labels.

use geotext::{Label, Position, Sector, TileContext, Viewport};

/// One degree square tile centered on (0, 0), 500 pixels wide and 1000 high.
pub fn equator_tile() -> TileContext {
    TileContext::for_sector(
        Sector::from_degrees(-0.5, 0.5, -0.5, 0.5),
        Viewport::new(500.0, 1000.0),
    )
}

/// Tile covering `[min_lat, min_lat + span] x [min_lon, min_lon + span]`.
pub fn tile(min_lat: f64, min_lon: f64, span: f64, viewport: Viewport) -> TileContext {
    TileContext::for_sector(
        Sector::from_degrees(min_lat, min_lat + span, min_lon, min_lon + span),
        viewport,
    )
}

/// Default-configured label at the given position.
///
/// # Panics
///
/// If the position is out of range.
pub fn label_at(text: &str, latitude: f64, longitude: f64) -> Label {
    match Label::with_defaults(text, Position::from_degrees(latitude, longitude)) {
        Ok(label) => label,
        Err(err) => panic!("fixture label at ({latitude}, {longitude}): {err}"),
    }
}
