use crate::offset::Offset;
use geotext_render::{Color, Font};

/// Text height used when no size is configured, in meters.
pub const DEFAULT_TEXT_SIZE_IN_METERS: f64 = 1000.0;

/// Defaults applied to newly created labels.
///
/// Applications usually build one of these from their own settings and reuse it for
/// every label they create.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub font: Font,
    pub color: Color,
    /// Explicit background; `None` picks a color contrasting with `color`.
    pub background_color: Option<Color>,
    pub offset: Offset,
    /// Text height in meters.
    pub text_size: f64,
    pub drag_enabled: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: Color::WHITE,
            background_color: None,
            offset: Offset::CENTER,
            text_size: DEFAULT_TEXT_SIZE_IN_METERS,
            drag_enabled: true,
        }
    }
}

impl LabelConfig {
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_text_size(mut self, meters: f64) -> Self {
        self.text_size = meters;
        self
    }

    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }
}
