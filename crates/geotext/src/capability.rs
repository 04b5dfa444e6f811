//! Capabilities a label can expose, kept as separate traits so a type only takes on
//! the behavior it needs.

use crate::error::LabelResult;
use crate::geo::Position;
use geotext_render::{Color, Font};

/// Text positioned on the globe.
pub trait GeographicText {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: impl Into<String>);

    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position) -> LabelResult<()>;

    fn font(&self) -> &Font;
    fn set_font(&mut self, font: Font) -> LabelResult<()>;

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color) -> LabelResult<()>;

    /// The explicitly configured background, if any.
    fn background_color(&self) -> Option<Color>;
    fn set_background_color(&mut self, color: Color) -> LabelResult<()>;

    /// Ordering hint; lower priorities are drawn first, NaN after everything else.
    fn priority(&self) -> f64;
    fn set_priority(&mut self, priority: f64);

    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

/// Something that can be repositioned on the globe.
pub trait Movable {
    /// Position all moves are relative to.
    fn reference_position(&self) -> Position;

    fn move_to(&mut self, position: Position) -> LabelResult<()>;

    /// Shift by `delta`, added to the reference position with [`Position::add`] wrapping.
    fn move_by(&mut self, delta: Position) -> LabelResult<()> {
        let target = self.reference_position().add(&delta);
        self.move_to(target)
    }
}

/// Something an interactive drag controller may move.
pub trait Draggable {
    fn is_drag_enabled(&self) -> bool;
    fn set_drag_enabled(&mut self, enabled: bool);
}
