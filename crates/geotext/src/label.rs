//! The surface text label.

use crate::capability::{Draggable, GeographicText, Movable};
use crate::config::LabelConfig;
use crate::error::{LabelError, LabelResult};
use crate::footprint::{Footprint, FootprintParams, project_footprint};
use crate::geo::{Globe, Position};
use crate::measure::TextMeasurer;
use crate::offset::Offset;
use crate::rotation::rotated_bounds;
use geotext_core::geometry::Size;
use geotext_render::{Color, Font};

/// A string of text draped on the globe at a constant geographic size.
///
/// The label holds only configuration plus one cache: the measured pixel bounds of its
/// text. Every setter that changes text or font drops that cache in the same call.
/// Per-frame geometry is never stored here; see [`compute_frame`](crate::compute_frame).
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    position: Position,
    /// Degrees clockwise from north.
    heading: f64,
    /// Height of the text in meters.
    text_size: f64,
    font: Font,
    color: Color,
    background_color: Option<Color>,
    offset: Offset,
    priority: f64,
    visible: bool,
    drag_enabled: bool,

    text_bounds: Option<Size<f64>>,
}

impl Label {
    /// Create a label at `position`, taking every other attribute from `config`.
    pub fn new(
        text: impl Into<String>,
        position: Position,
        config: &LabelConfig,
    ) -> LabelResult<Self> {
        check_position(&position)?;
        check_font(&config.font)?;
        check_color(&config.color)?;
        if let Some(background) = &config.background_color {
            check_color(background)?;
        }
        check_offset(&config.offset)?;
        check_text_size(config.text_size)?;

        Ok(Self {
            text: text.into(),
            position,
            heading: 0.0,
            text_size: config.text_size,
            font: config.font.clone(),
            color: config.color,
            background_color: config.background_color,
            offset: config.offset,
            priority: 0.0,
            visible: true,
            drag_enabled: config.drag_enabled,
            text_bounds: None,
        })
    }

    /// Create a label using [`LabelConfig::default`].
    pub fn with_defaults(text: impl Into<String>, position: Position) -> LabelResult<Self> {
        Self::new(text, position, &LabelConfig::default())
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Rotation of the text from true north, clockwise, in degrees.
    pub fn set_heading(&mut self, degrees: f64) -> LabelResult<()> {
        if !degrees.is_finite() {
            return reject(LabelError::InvalidHeading(degrees));
        }
        self.heading = degrees;
        Ok(())
    }

    /// Height of the text in meters.
    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    pub fn set_text_size(&mut self, meters: f64) -> LabelResult<()> {
        check_text_size(meters)?;
        self.text_size = meters;
        Ok(())
    }

    pub fn offset(&self) -> &Offset {
        &self.offset
    }

    /// Where the text box sits relative to the position. The default centers it.
    pub fn set_offset(&mut self, offset: Offset) -> LabelResult<()> {
        check_offset(&offset)?;
        self.offset = offset;
        Ok(())
    }

    /// Drop the explicit background so one contrasting with the text color is used.
    pub fn clear_background_color(&mut self) {
        self.background_color = None;
    }

    /// Measured bounds, if the cache is populated.
    pub fn cached_text_bounds(&self) -> Option<Size<f64>> {
        self.text_bounds
    }

    /// Pixel bounds of the unrotated, unscaled text, measuring only when the cache is empty.
    pub fn text_bounds(&mut self, measurer: &dyn TextMeasurer) -> Size<f64> {
        if let Some(bounds) = self.text_bounds {
            return bounds;
        }
        let bounds = measurer.measure(&self.text, &self.font);
        tracing::debug!(
            text = %self.text,
            font = %self.font,
            width = bounds.width,
            height = bounds.height,
            "Measured label text"
        );
        self.text_bounds = Some(bounds);
        bounds
    }

    /// Sectors covered by this label for the given measured bounds.
    pub fn footprint_for(&self, text_bounds: Size<f64>, globe: &Globe) -> Footprint {
        project_footprint(&FootprintParams {
            anchor: self.position.lat_lon(),
            rotated_bounds: rotated_bounds(text_bounds, self.heading),
            text_pixel_height: text_bounds.height,
            text_size: self.text_size,
            globe_radius: globe.radius,
            offset: &self.offset,
        })
    }

    /// Sectors covered by this label, measuring the text if needed.
    pub fn footprint(&mut self, measurer: &dyn TextMeasurer, globe: &Globe) -> Footprint {
        let bounds = self.text_bounds(measurer);
        self.footprint_for(bounds, globe)
    }

    fn invalidate_text_bounds(&mut self) {
        self.text_bounds = None;
    }
}

impl GeographicText for Label {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.invalidate_text_bounds();
        }
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) -> LabelResult<()> {
        check_position(&position)?;
        self.position = position;
        Ok(())
    }

    fn font(&self) -> &Font {
        &self.font
    }

    fn set_font(&mut self, font: Font) -> LabelResult<()> {
        check_font(&font)?;
        if font != self.font {
            self.font = font;
            self.invalidate_text_bounds();
        }
        Ok(())
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) -> LabelResult<()> {
        check_color(&color)?;
        self.color = color;
        Ok(())
    }

    fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    fn set_background_color(&mut self, color: Color) -> LabelResult<()> {
        check_color(&color)?;
        self.background_color = Some(color);
        Ok(())
    }

    fn priority(&self) -> f64 {
        self.priority
    }

    fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Movable for Label {
    /// The anchor at zero elevation.
    fn reference_position(&self) -> Position {
        Position::from_degrees(self.position.latitude, self.position.longitude)
    }

    fn move_to(&mut self, position: Position) -> LabelResult<()> {
        self.set_position(position)
    }
}

impl Draggable for Label {
    fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }
}

fn reject(error: LabelError) -> LabelResult<()> {
    tracing::error!("Rejected label attribute: {}", error);
    Err(error)
}

fn check_position(position: &Position) -> LabelResult<()> {
    if position.is_valid() {
        return Ok(());
    }
    reject(LabelError::InvalidPosition {
        latitude: position.latitude,
        longitude: position.longitude,
        elevation: position.elevation,
    })
}

fn check_font(font: &Font) -> LabelResult<()> {
    if font.is_valid() {
        return Ok(());
    }
    reject(LabelError::InvalidFont(font.to_string()))
}

fn check_color(color: &Color) -> LabelResult<()> {
    if color.is_valid() {
        return Ok(());
    }
    reject(LabelError::InvalidColor(color.to_array()))
}

fn check_offset(offset: &Offset) -> LabelResult<()> {
    if offset.is_valid() {
        return Ok(());
    }
    reject(LabelError::InvalidOffset {
        x: offset.x,
        y: offset.y,
    })
}

fn check_text_size(meters: f64) -> LabelResult<()> {
    if meters.is_finite() && meters > 0.0 {
        return Ok(());
    }
    reject(LabelError::InvalidTextSize(meters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn label() -> Label {
        Label::with_defaults("Pacific Ocean", Position::from_degrees(0.0, -150.0)).unwrap()
    }

    #[test]
    fn test_defaults_from_config() {
        let config = LabelConfig::default()
            .with_color(Color::RED)
            .with_text_size(250.0)
            .with_drag_enabled(false);
        let label = Label::new("x", Position::from_degrees(1.0, 2.0), &config).unwrap();
        assert_eq!(label.color(), Color::RED);
        assert_eq!(label.text_size(), 250.0);
        assert_eq!(*label.offset(), Offset::CENTER);
        assert_eq!(label.font(), &Font::default());
        assert_eq!(label.background_color(), None);
        assert!(!label.is_drag_enabled());
        assert!(label.is_visible());
        assert_eq!(label.heading(), 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = LabelConfig::default().with_text_size(0.0);
        let err = Label::new("x", Position::default(), &config).unwrap_err();
        assert_eq!(err, LabelError::InvalidTextSize(0.0));

        let err = Label::with_defaults("x", Position::from_degrees(100.0, 0.0)).unwrap_err();
        assert!(matches!(err, LabelError::InvalidPosition { .. }));
    }

    #[test]
    fn test_rejected_setters_keep_previous_value() {
        let mut label = label();

        assert!(label.set_heading(f64::NAN).is_err());
        assert_eq!(label.heading(), 0.0);

        assert!(label.set_text_size(-5.0).is_err());
        assert_eq!(label.text_size(), 1000.0);

        assert!(label.set_font(Font::new("", 12.0)).is_err());
        assert_eq!(label.font(), &Font::default());

        assert!(label.set_color(Color::rgb(2.0, 0.0, 0.0)).is_err());
        assert_eq!(label.color(), Color::WHITE);

        assert!(label.set_background_color(Color::rgb(f32::NAN, 0.0, 0.0)).is_err());
        assert_eq!(label.background_color(), None);

        assert!(label.set_offset(Offset::pixels(f64::INFINITY, 0.0)).is_err());
        assert_eq!(*label.offset(), Offset::CENTER);

        assert!(label.set_position(Position::from_degrees(0.0, 200.0)).is_err());
        assert_eq!(label.position(), Position::from_degrees(0.0, -150.0));
    }

    #[test]
    fn test_text_bounds_cached_until_text_changes() {
        let calls = Cell::new(0);
        let measurer = |text: &str, _: &Font| {
            calls.set(calls.get() + 1);
            Size::new(text.len() as f64 * 10.0, 20.0)
        };
        let mut label = label();

        assert_eq!(label.text_bounds(&measurer), Size::new(130.0, 20.0));
        assert_eq!(label.text_bounds(&measurer), Size::new(130.0, 20.0));
        assert_eq!(calls.get(), 1);

        let same = label.text().to_owned();
        label.set_text(same);
        assert!(label.cached_text_bounds().is_some());

        label.set_text("Atlantic");
        assert_eq!(label.cached_text_bounds(), None);
        assert_eq!(label.text_bounds(&measurer), Size::new(80.0, 20.0));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_font_change_invalidates_only_when_different() {
        let measurer = |_: &str, _: &Font| Size::new(10.0, 10.0);
        let mut label = label();
        label.text_bounds(&measurer);

        label.set_font(Font::default()).unwrap();
        assert!(label.cached_text_bounds().is_some());

        label.set_font(Font::new("Helvetica", 18.0)).unwrap();
        assert!(label.cached_text_bounds().is_none());
    }

    #[test]
    fn test_geometry_setters_keep_metrics() {
        let measurer = |_: &str, _: &Font| Size::new(10.0, 10.0);
        let mut label = label();
        label.text_bounds(&measurer);

        label.set_heading(45.0).unwrap();
        label.set_position(Position::from_degrees(5.0, 5.0)).unwrap();
        label.set_color(Color::BLACK).unwrap();
        assert!(label.cached_text_bounds().is_some());
    }

    #[test]
    fn test_move_by_is_relative_to_reference() {
        let mut label =
            Label::with_defaults("x", Position::new(10.0, 20.0, 500.0)).unwrap();
        assert_eq!(label.reference_position(), Position::from_degrees(10.0, 20.0));

        label.move_by(Position::new(1.0, -2.0, 3.0)).unwrap();
        assert_eq!(label.position(), Position::new(11.0, 18.0, 3.0));

        label.move_to(Position::from_degrees(-1.0, -1.0)).unwrap();
        assert_eq!(label.position(), Position::from_degrees(-1.0, -1.0));

        // Moving past the pole folds the latitude back instead of failing.
        label.move_by(Position::from_degrees(100.0, 0.0)).unwrap();
        assert_eq!(label.position(), Position::from_degrees(81.0, -1.0));
    }

    #[test]
    fn test_move_by_crosses_antimeridian() {
        let mut label = Label::with_defaults("x", Position::from_degrees(0.0, 179.5)).unwrap();
        label.move_by(Position::from_degrees(0.0, 1.0)).unwrap();
        assert!((label.position().longitude + 179.5).abs() < 1e-12);

        label.move_by(Position::from_degrees(0.0, -1.0)).unwrap();
        assert!((label.position().longitude - 179.5).abs() < 1e-12);
    }

    #[test]
    fn test_move_by_rejects_non_finite_delta() {
        let mut label = label();
        assert!(label.move_by(Position::from_degrees(f64::NAN, 0.0)).is_err());
        assert_eq!(label.position(), Position::from_degrees(0.0, -150.0));
    }

    #[test]
    fn test_drag_and_visibility_flags() {
        let mut label = label();
        label.set_drag_enabled(false);
        assert!(!label.is_drag_enabled());
        label.set_visible(false);
        assert!(!label.is_visible());
        label.set_priority(3.5);
        assert_eq!(label.priority(), 3.5);
    }

    #[test]
    fn test_footprint_uses_heading() {
        let measurer = |_: &str, _: &Font| Size::new(100.0, 20.0);
        let globe = Globe::default();
        let mut label = label();

        let flat = label.footprint(&measurer, &globe).sectors()[0];
        label.set_heading(90.0).unwrap();
        let turned = label.footprint(&measurer, &globe).sectors()[0];

        assert!(flat.delta_longitude() > flat.delta_latitude());
        assert!(turned.delta_latitude() > turned.delta_longitude());
    }
}
