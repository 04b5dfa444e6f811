//! Recording rasterizer.

use geotext::math::{DMat4, DVec2};
use geotext_render::{Color, DrawTransform, Font, TextPass, TextRasterizer};

/// An owned copy of one [`TextPass`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPass {
    pub text: String,
    pub font: Font,
    pub color: Color,
    pub local_offset: DVec2,
    pub transform: DrawTransform,
}

impl RecordedPass {
    /// The pass transform collapsed into one matrix, including `local_offset`.
    pub fn matrix(&self) -> DMat4 {
        self.transform
            .clone()
            .then_translate_2d(self.local_offset)
            .to_mat4()
    }

    /// Where text-local `point` lands in tile device coordinates.
    pub fn project(&self, point: DVec2) -> DVec2 {
        self.matrix().transform_point3(point.extend(0.0)).truncate()
    }
}

/// [`TextRasterizer`] that keeps every pass it is handed.
#[derive(Debug, Default)]
pub struct RecordingRasterizer {
    passes: Vec<RecordedPass>,
}

impl RecordingRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passes(&self) -> &[RecordedPass] {
        &self.passes
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Texts in draw order, one entry per pass.
    pub fn texts(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.text.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.passes.clear();
    }
}

impl TextRasterizer for RecordingRasterizer {
    fn draw_text(&mut self, pass: &TextPass<'_>) {
        self.passes.push(RecordedPass {
            text: pass.text.to_owned(),
            font: pass.font.clone(),
            color: pass.color,
            local_offset: pass.local_offset,
            transform: pass.transform.clone(),
        });
    }
}
