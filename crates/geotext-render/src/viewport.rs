/// Pixel extent of the surface a tile is rendered into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in device pixels.
    pub width: f64,
    /// Height in device pixels.
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A viewport with a zero, negative or non-finite extent cannot host any geometry.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(512.0, 512.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_degenerate() {
        assert!(!Viewport::default().is_degenerate());
        assert!(Viewport::new(0.0, 512.0).is_degenerate());
        assert!(Viewport::new(512.0, -1.0).is_degenerate());
        assert!(Viewport::new(f64::INFINITY, 512.0).is_degenerate());
        assert!(Viewport::new(512.0, f64::NAN).is_degenerate());
    }
}
