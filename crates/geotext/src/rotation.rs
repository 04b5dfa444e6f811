use crate::geo::normalized_degrees;
use geotext_core::geometry::Size;

/// Axis-aligned extent of a `bounds` box after rotating it by `heading_degrees`.
///
/// The heading is normalized into `[-180, 180]` first. Each quadrant has its own sign
/// arrangement and the seams are assigned exactly as below (0 belongs to the
/// `(-90, 0]` branch, 90 and 180 to `[90, 180]`, -90 and -180 to `[-180, -90]`).
pub fn rotated_bounds(bounds: Size<f64>, heading_degrees: f64) -> Size<f64> {
    let theta = normalized_degrees(heading_degrees);
    let (s, c) = theta.to_radians().sin_cos();
    let (w, h) = (bounds.width, bounds.height);

    let hc = h * c;
    let wc = w * c;
    let hs = h * s;
    let ws = w * s;

    if theta > 0.0 {
        if theta < 90.0 {
            Size::new(wc + hs, hc + ws)
        } else {
            Size::new(hs - wc, ws - hc)
        }
    } else if theta > -90.0 {
        Size::new(wc - hs, hc - ws)
    } else {
        Size::new(-(wc + hs), -(hc + ws))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Size<f64> = Size {
        width: 100.0,
        height: 20.0,
    };

    fn assert_size_close(actual: Size<f64>, expected: Size<f64>) {
        assert!(
            (actual.width - expected.width).abs() < 1e-9
                && (actual.height - expected.height).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_zero_heading_is_exact() {
        assert_eq!(rotated_bounds(BOX, 0.0), BOX);
    }

    #[test]
    fn test_quarter_turns_swap_extents() {
        let swapped = Size::new(20.0, 100.0);
        assert_size_close(rotated_bounds(BOX, 90.0), swapped);
        assert_size_close(rotated_bounds(BOX, -90.0), swapped);
        assert_size_close(rotated_bounds(BOX, 270.0), swapped);
    }

    #[test]
    fn test_half_turn_keeps_extents() {
        assert_size_close(rotated_bounds(BOX, 180.0), BOX);
        assert_size_close(rotated_bounds(BOX, -180.0), BOX);
    }

    #[test]
    fn test_each_quadrant_matches_corner_extent() {
        for heading in [30.0_f64, 120.0, -45.0, -150.0] {
            let (s, c) = heading.to_radians().sin_cos();
            let expected = Size::new(
                BOX.width * c.abs() + BOX.height * s.abs(),
                BOX.height * c.abs() + BOX.width * s.abs(),
            );
            assert_size_close(rotated_bounds(BOX, heading), expected);
        }
    }

    #[test]
    fn test_negated_heading_is_symmetric() {
        for heading in [1.0, 15.0, 45.0, 89.9, 90.0, 91.0, 135.0, 179.0] {
            let pos = rotated_bounds(BOX, heading);
            let neg = rotated_bounds(BOX, -heading);
            assert_size_close(pos, neg);
        }
    }

    #[test]
    fn test_unnormalized_heading() {
        assert_size_close(rotated_bounds(BOX, 390.0), rotated_bounds(BOX, 30.0));
        assert_size_close(rotated_bounds(BOX, -330.0), rotated_bounds(BOX, 30.0));
    }
}
