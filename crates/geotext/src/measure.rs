//! Text measurement seam.
//!
//! geotext only needs the pixel extent of the unrotated, unscaled text. Anything that can
//! produce it implements [`TextMeasurer`]; with the `cosmic` feature,
//! [`CosmicMeasurer`] shapes the text with cosmic-text against the system fonts.

use geotext_core::geometry::Size;
use geotext_render::Font;

/// Measures text in unscaled pixels.
pub trait TextMeasurer {
    /// Width and height of `text` drawn in `font`. A zero extent means nothing to draw.
    fn measure(&self, text: &str, font: &Font) -> Size<f64>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &Font) -> Size<f64>,
{
    fn measure(&self, text: &str, font: &Font) -> Size<f64> {
        self(text, font)
    }
}

#[cfg(feature = "cosmic")]
pub use cosmic::CosmicMeasurer;

#[cfg(feature = "cosmic")]
mod cosmic {
    use super::TextMeasurer;
    use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight, fontdb};
    use geotext_core::geometry::Size;
    use geotext_render::Font;
    use std::sync::RwLock;

    /// Line height as a multiple of the font size.
    const LINE_HEIGHT_FACTOR: f32 = 1.2;

    /// [`TextMeasurer`] backed by cosmic-text.
    pub struct CosmicMeasurer {
        font_system: RwLock<FontSystem>,
    }

    impl CosmicMeasurer {
        /// Measurer over every font installed on the system.
        pub fn with_system_fonts() -> Self {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            Self::with_database(db)
        }

        pub fn with_database(db: fontdb::Database) -> Self {
            let font_system = FontSystem::new_with_locale_and_db(
                sys_locale::get_locale().unwrap_or_else(|| String::from("en-US")),
                db,
            );
            Self {
                font_system: RwLock::new(font_system),
            }
        }
    }

    impl Default for CosmicMeasurer {
        fn default() -> Self {
            Self::with_system_fonts()
        }
    }

    impl TextMeasurer for CosmicMeasurer {
        fn measure(&self, text: &str, font: &Font) -> Size<f64> {
            let mut font_system = match self.font_system.write() {
                Ok(guard) => guard,
                Err(e) => {
                    tracing::error!("Font system lock poisoned: {}. Returning zero size.", e);
                    return Size::new(0.0, 0.0);
                }
            };

            let metrics = Metrics::new(font.size, font.size * LINE_HEIGHT_FACTOR);
            let mut buffer = Buffer::new(&mut font_system, metrics);

            let mut attrs = Attrs::new().family(Family::Name(&font.family));
            if font.bold {
                attrs = attrs.weight(Weight::BOLD);
            }
            if font.italic {
                attrs = attrs.style(Style::Italic);
            }

            buffer.set_text(&mut font_system, text, attrs, Shaping::Advanced);
            buffer.shape_until_scroll(&mut font_system, false);

            let mut max_x = 0.0_f32;
            let mut max_y = 0.0_f32;

            for run in buffer.layout_runs() {
                for glyph in run.glyphs.iter() {
                    let physical = glyph.physical((0., 0.), 1.0);
                    max_x = max_x.max(physical.x as f32 + glyph.w);
                    max_y = max_y.max(run.line_y + run.line_height);
                }
            }

            Size::new(max_x, max_y).cast()
        }
    }
}
