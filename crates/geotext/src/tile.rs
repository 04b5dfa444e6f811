use crate::geo::Sector;
use geotext_core::math::{DMat4, DVec3, DVec4};
use geotext_render::Viewport;

/// What the tiling pipeline knows about the tile currently being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileContext {
    pub sector: Sector,
    pub viewport: Viewport,
    /// Maps `(longitude, latitude, 1, 1)` in degrees to tile device coordinates.
    pub modelview: DMat4,
}

impl TileContext {
    pub fn new(sector: Sector, viewport: Viewport, modelview: DMat4) -> Self {
        Self {
            sector,
            viewport,
            modelview,
        }
    }

    /// Tile whose modelview stretches `sector` over the whole viewport, with the
    /// south-west corner at the pixel origin.
    pub fn for_sector(sector: Sector, viewport: Viewport) -> Self {
        let scale = DVec3::new(
            viewport.width / sector.delta_longitude(),
            viewport.height / sector.delta_latitude(),
            1.0,
        );
        let modelview = DMat4::from_scale(scale)
            * DMat4::from_translation(DVec3::new(-sector.min_longitude, -sector.min_latitude, 0.0));
        Self::new(sector, viewport, modelview)
    }

    /// Project a geographic point into tile device coordinates.
    pub fn project(&self, latitude: f64, longitude: f64) -> DVec3 {
        (self.modelview * DVec4::new(longitude, latitude, 1.0, 1.0)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_sector_maps_corners() {
        let tile = TileContext::for_sector(
            Sector::from_degrees(10.0, 20.0, 100.0, 110.0),
            Viewport::new(256.0, 512.0),
        );
        let sw = tile.project(10.0, 100.0);
        let ne = tile.project(20.0, 110.0);
        assert!((sw - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-9);
        assert!((ne - DVec3::new(256.0, 512.0, 1.0)).length() < 1e-9);
    }
}
