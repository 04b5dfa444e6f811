use crate::{Color, DrawTransform, Font};
use glam::DVec2;

/// One text drawing call handed to a [`TextRasterizer`].
///
/// `local_offset` is applied in text-local pixel space, after every op of `transform`.
#[derive(Debug, Clone, Copy)]
pub struct TextPass<'a> {
    pub text: &'a str,
    pub font: &'a Font,
    pub color: Color,
    pub local_offset: DVec2,
    pub transform: &'a DrawTransform,
}

/// Draws text with a transform. Glyph rasterization itself lives outside geotext.
pub trait TextRasterizer {
    fn draw_text(&mut self, pass: &TextPass<'_>);
}

impl<R: TextRasterizer + ?Sized> TextRasterizer for &mut R {
    fn draw_text(&mut self, pass: &TextPass<'_>) {
        (**self).draw_text(pass);
    }
}
