//! Placement of a text box relative to its anchor.

use geotext_core::math::DVec2;

/// How an [`Offset`] component is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetUnit {
    /// Multiple of the box extent along that axis. `-0.5` centers, `0.0` aligns the near edge.
    #[default]
    Fraction,
    /// Absolute pixels.
    Pixels,
    /// Pixels measured back from the far edge of the box.
    InsetPixels,
}

impl OffsetUnit {
    fn resolve(self, value: f64, extent: f64) -> f64 {
        match self {
            OffsetUnit::Fraction => value * extent,
            OffsetUnit::Pixels => value,
            OffsetUnit::InsetPixels => extent - value,
        }
    }
}

/// A displacement from the anchor to the lower-left corner of the text box.
///
/// Pixel offsets are in unscaled text pixels, so they scale with the geographic size
/// of the text: if 20 pixels of text cover 100 m, a 2 pixel offset moves the box 10 m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
    pub x_unit: OffsetUnit,
    pub y_unit: OffsetUnit,
}

impl Offset {
    /// Centers the box on the anchor.
    pub const CENTER: Offset = Offset::fraction(-0.5, -0.5);

    /// Puts the lower-left corner of the box on the anchor.
    pub const LOWER_LEFT: Offset = Offset::fraction(0.0, 0.0);

    pub const fn new(x: f64, y: f64, x_unit: OffsetUnit, y_unit: OffsetUnit) -> Self {
        Self {
            x,
            y,
            x_unit,
            y_unit,
        }
    }

    pub const fn fraction(x: f64, y: f64) -> Self {
        Self::new(x, y, OffsetUnit::Fraction, OffsetUnit::Fraction)
    }

    pub const fn pixels(x: f64, y: f64) -> Self {
        Self::new(x, y, OffsetUnit::Pixels, OffsetUnit::Pixels)
    }

    /// Resolve against a box of `width` x `height` pixels.
    pub fn compute(&self, width: f64, height: f64) -> DVec2 {
        DVec2::new(
            self.x_unit.resolve(self.x, width),
            self.y_unit.resolve(self.y, height),
        )
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::CENTER
    }
}
