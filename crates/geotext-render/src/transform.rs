//! Ordered draw transforms.
//!
//! A [`DrawTransform`] is a list of primitive [`TransformOp`]s applied in the same order a
//! fixed-function matrix stack would apply them: each op post-multiplies the current matrix,
//! so the first op pushed is the outermost one and text-local coordinates pass through the
//! last op first.

use glam::{DMat4, DVec2, DVec3};

/// A single primitive transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Translate by the given vector.
    Translate(DVec3),
    /// Scale each axis by the given factor.
    Scale(DVec3),
    /// Rotate counter-clockwise by `degrees` about `axis`.
    Rotate { degrees: f64, axis: DVec3 },
}

impl TransformOp {
    /// The matrix this op multiplies onto the current transform.
    pub fn to_mat4(&self) -> DMat4 {
        match *self {
            TransformOp::Translate(offset) => DMat4::from_translation(offset),
            TransformOp::Scale(factors) => DMat4::from_scale(factors),
            TransformOp::Rotate { degrees, axis } => {
                DMat4::from_axis_angle(axis.normalize(), degrees.to_radians())
            }
        }
    }
}

/// An ordered sequence of [`TransformOp`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawTransform {
    ops: Vec<TransformOp>,
}

impl DrawTransform {
    /// Empty transform (identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a translation.
    pub fn then_translate(mut self, offset: DVec3) -> Self {
        self.ops.push(TransformOp::Translate(offset));
        self
    }

    /// Append an in-plane translation (z = 0).
    pub fn then_translate_2d(self, offset: DVec2) -> Self {
        self.then_translate(offset.extend(0.0))
    }

    /// Append a uniform scale in x and y, leaving z untouched.
    pub fn then_scale_uniform(mut self, factor: f64) -> Self {
        self.ops
            .push(TransformOp::Scale(DVec3::new(factor, factor, 1.0)));
        self
    }

    /// Append a rotation about the local z axis (counter-clockwise for positive degrees).
    pub fn then_rotate_z(mut self, degrees: f64) -> Self {
        self.ops.push(TransformOp::Rotate {
            degrees,
            axis: DVec3::Z,
        });
        self
    }

    /// The ops in application order.
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Collapse the ops into a single matrix (`op1 * op2 * ... * opN`).
    pub fn to_mat4(&self) -> DMat4 {
        self.ops
            .iter()
            .fold(DMat4::IDENTITY, |acc, op| acc * op.to_mat4())
    }

    /// Map a text-local point to device coordinates.
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.to_mat4().transform_point3(point)
    }

    /// Map a text-local 2D point (z = 0) and drop the resulting z.
    pub fn transform_point_2d(&self, point: DVec2) -> DVec2 {
        self.transform_point(point.extend(0.0)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!((a - b).length() < 1e-9, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn test_identity() {
        let t = DrawTransform::new();
        assert!(t.is_empty());
        assert_eq!(t.to_mat4(), DMat4::IDENTITY);
    }

    #[test]
    fn test_translate() {
        let t = DrawTransform::new().then_translate_2d(DVec2::new(5.0, 10.0));
        assert_close(t.transform_point_2d(DVec2::new(10.0, 20.0)), DVec2::new(15.0, 30.0));
    }

    #[test]
    fn test_scale_leaves_z() {
        let t = DrawTransform::new().then_scale_uniform(2.0);
        let p = t.transform_point(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, DVec3::new(2.0, 4.0, 3.0));
    }

    #[test]
    fn test_rotate_90() {
        let t = DrawTransform::new().then_rotate_z(90.0);
        assert_close(t.transform_point_2d(DVec2::new(1.0, 0.0)), DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_ops_apply_innermost_last() {
        // Translate then scale on the stack: the point is scaled first, then translated.
        let t = DrawTransform::new()
            .then_translate_2d(DVec2::new(10.0, 0.0))
            .then_scale_uniform(2.0);
        assert_close(t.transform_point_2d(DVec2::new(5.0, 5.0)), DVec2::new(20.0, 10.0));
        assert_eq!(t.len(), 2);
    }
}
