//! Mock text measurement.

use geotext::TextMeasurer;
use geotext_core::geometry::Size;
use geotext_render::Font;
use parking_lot::Mutex;

/// How a [`MockMeasurer`] sizes text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockMetrics {
    /// Every string measures the same.
    Fixed(Size<f64>),
    /// Width grows with the character count; height is constant.
    PerChar { advance: f64, height: f64 },
}

/// Records a measurement request.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureCall {
    pub text: String,
    pub font: Font,
}

/// Deterministic [`TextMeasurer`] that records what it was asked to measure.
///
/// # Example
///
/// ```rust
/// use geotext::TextMeasurer;
/// use geotext_render::Font;
/// use geotext_test_utils::MockMeasurer;
///
/// let measurer = MockMeasurer::per_char(10.0, 20.0);
/// let size = measurer.measure("abc", &Font::default());
///
/// assert_eq!(size.width, 30.0);
/// assert_eq!(measurer.call_count(), 1);
/// ```
#[derive(Debug)]
pub struct MockMeasurer {
    metrics: MockMetrics,
    calls: Mutex<Vec<MeasureCall>>,
}

impl MockMeasurer {
    pub fn new(metrics: MockMetrics) -> Self {
        Self {
            metrics,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fixed(width: f64, height: f64) -> Self {
        Self::new(MockMetrics::Fixed(Size::new(width, height)))
    }

    pub fn per_char(advance: f64, height: f64) -> Self {
        Self::new(MockMetrics::PerChar { advance, height })
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<MeasureCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl TextMeasurer for MockMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size<f64> {
        self.calls.lock().push(MeasureCall {
            text: text.to_owned(),
            font: font.clone(),
        });
        match self.metrics {
            MockMetrics::Fixed(size) => size,
            MockMetrics::PerChar { advance, height } => {
                Size::new(advance * text.chars().count() as f64, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ignores_text() {
        let measurer = MockMeasurer::fixed(100.0, 20.0);
        assert_eq!(measurer.measure("", &Font::default()), Size::new(100.0, 20.0));
        assert_eq!(measurer.measure("long text", &Font::default()), Size::new(100.0, 20.0));
        assert_eq!(measurer.call_count(), 2);
    }

    #[test]
    fn test_per_char_counts_chars_not_bytes() {
        let measurer = MockMeasurer::per_char(10.0, 20.0);
        assert_eq!(measurer.measure("Zürich", &Font::default()).width, 60.0);
    }

    #[test]
    fn test_records_font() {
        let measurer = MockMeasurer::fixed(1.0, 1.0);
        let font = Font::new("Helvetica", 12.0).italic();
        measurer.measure("x", &font);
        assert_eq!(
            measurer.calls(),
            vec![MeasureCall {
                text: "x".to_owned(),
                font
            }]
        );

        measurer.clear_calls();
        assert_eq!(measurer.call_count(), 0);
    }
}
