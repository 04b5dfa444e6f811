//! Geographic pixel size, render scale and the small-text cull.
//!
//! A return of `None` means the quantity is undefined for the given view (zero viewport,
//! zero-height text, zero-extent tile). Callers treat that as a cull.

/// Meters covered by one pixel of a tile, assuming near-equirectangular tile geometry.
///
/// `globe_radius * tile_delta_lat_radians / viewport_height`
pub fn pixel_size_in_meters(
    globe_radius: f64,
    tile_delta_lat_radians: f64,
    viewport_height: f64,
) -> Option<f64> {
    if !(viewport_height.is_finite() && viewport_height > 0.0) {
        return None;
    }
    positive(globe_radius * tile_delta_lat_radians / viewport_height)
}

/// Uniform factor that brings `text_pixel_height` pixels of text to `target_height` meters.
///
/// `target_height / (pixel_size * text_pixel_height)`
pub fn text_scale(target_height: f64, pixel_size: f64, text_pixel_height: f64) -> Option<f64> {
    let full_height_in_meters = pixel_size * text_pixel_height;
    if !(full_height_in_meters.is_finite() && full_height_in_meters > 0.0) {
        return None;
    }
    positive(target_height / full_height_in_meters)
}

/// True when `scale * target_height < pixel_size`.
///
/// Note this is not the same threshold as "rendered height under one pixel"; see
/// [`rendered_pixel_height`].
pub fn is_too_small(scale: f64, target_height: f64, pixel_size: f64) -> bool {
    scale * target_height < pixel_size
}

/// Height in tile pixels of the text once `scale` is applied.
pub fn rendered_pixel_height(scale: f64, text_pixel_height: f64) -> f64 {
    scale * text_pixel_height
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::WGS84_EQUATORIAL_RADIUS;

    #[test]
    fn test_pixel_size_closed_form() {
        let size = pixel_size_in_meters(WGS84_EQUATORIAL_RADIUS, 1.0_f64.to_radians(), 500.0)
            .unwrap();
        let expected = WGS84_EQUATORIAL_RADIUS * std::f64::consts::PI / 180.0 / 500.0;
        assert!((size - expected).abs() < 1e-9);
        assert!((size - 222.638_981_6).abs() < 1e-6);
    }

    #[test]
    fn test_pixel_size_degenerate_viewport() {
        assert_eq!(pixel_size_in_meters(6.0e6, 0.01, 0.0), None);
        assert_eq!(pixel_size_in_meters(6.0e6, 0.01, -10.0), None);
        assert_eq!(pixel_size_in_meters(6.0e6, 0.01, f64::NAN), None);
    }

    #[test]
    fn test_pixel_size_degenerate_tile() {
        assert_eq!(pixel_size_in_meters(6.0e6, 0.0, 512.0), None);
    }

    #[test]
    fn test_text_scale() {
        let scale = text_scale(1000.0, 50.0, 20.0).unwrap();
        assert!((scale - 1.0).abs() < 1e-12);
        let scale = text_scale(1000.0, 100.0, 20.0).unwrap();
        assert!((scale - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_text_scale_guards() {
        assert_eq!(text_scale(1000.0, 0.0, 20.0), None);
        assert_eq!(text_scale(1000.0, 50.0, 0.0), None);
        assert_eq!(text_scale(1000.0, 50.0, -1.0), None);
    }

    #[test]
    fn test_is_too_small_literal() {
        assert!(is_too_small(0.1, 1.0, 1.0));
        assert!(!is_too_small(1.0, 1.0, 1.0));
        assert!(!is_too_small(2.0, 10.0, 5.0));
    }

    #[test]
    fn test_rendered_pixel_height() {
        assert_eq!(rendered_pixel_height(0.5, 20.0), 10.0);
    }
}
