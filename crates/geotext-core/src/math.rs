/// Vector and matrix mathematics backed by the `glam` crate.
///
/// This module re-exports all types and functions from [`glam`]. Geographic work in geotext
/// is done in double precision, so most code reaches for the `D*` variants.
///
/// # Common Types
///
/// - [`DVec2`]: 2D vector in `f64` (pixel offsets, box extents)
/// - [`DVec3`], [`DVec4`]: 3D/4D vectors in `f64` (projected points, homogeneous coordinates)
/// - [`DMat4`]: 4x4 `f64` matrix (model-view transforms)
/// - [`Vec2`], [`Mat4`]: `f32` counterparts for renderer-facing data
///
/// # Examples
///
/// ```
/// use geotext_core::math::{DMat4, DVec3, DVec4};
///
/// // Map a (lon, lat) point through a model-view matrix
/// let modelview = DMat4::from_translation(DVec3::new(10.0, 20.0, 0.0));
/// let projected = modelview * DVec4::new(1.0, 2.0, 1.0, 1.0);
/// assert_eq!(projected.truncate(), DVec3::new(11.0, 22.0, 1.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

/// Sign of `value` with zero kept as its own sign (`-1.0`, `0.0` or `1.0`).
///
/// Unlike [`f64::signum`], which maps `+0.0` to `1.0`, this treats both zeros as zero.
#[inline]
pub fn signum_or_zero(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
