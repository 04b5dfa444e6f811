use geotext_render::Color;

/// Foregrounds brighter than this get a dark background.
pub const BRIGHTNESS_THRESHOLD: f32 = 0.5;

/// Alpha of the generated background.
pub const BACKGROUND_ALPHA: f32 = 0.7;

/// The configured background if there is one, otherwise [`contrasting_background`].
pub fn resolve_background(configured: Option<Color>, foreground: Color) -> Color {
    configured.unwrap_or_else(|| contrasting_background(foreground))
}

/// Translucent black behind bright text, translucent white behind dark text.
pub fn contrasting_background(foreground: Color) -> Color {
    if foreground.brightness() > BRIGHTNESS_THRESHOLD {
        Color::BLACK.with_alpha(BACKGROUND_ALPHA)
    } else {
        Color::WHITE.with_alpha(BACKGROUND_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_background_wins() {
        let bg = Color::rgba(0.2, 0.4, 0.6, 1.0);
        assert_eq!(resolve_background(Some(bg), Color::WHITE), bg);
    }

    #[test]
    fn test_bright_text_gets_dark_background() {
        assert_eq!(
            resolve_background(None, Color::WHITE),
            Color::rgba(0.0, 0.0, 0.0, 0.7)
        );
        assert_eq!(
            contrasting_background(Color::YELLOW),
            Color::rgba(0.0, 0.0, 0.0, 0.7)
        );
    }

    #[test]
    fn test_dark_text_gets_light_background() {
        assert_eq!(
            contrasting_background(Color::BLACK),
            Color::rgba(1.0, 1.0, 1.0, 0.7)
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(
            contrasting_background(Color::rgb(0.5, 0.5, 0.5)),
            Color::rgba(1.0, 1.0, 1.0, 0.7)
        );
        assert_eq!(
            contrasting_background(Color::rgb(0.51, 0.0, 0.0)),
            Color::rgba(0.0, 0.0, 0.0, 0.7)
        );
    }
}
