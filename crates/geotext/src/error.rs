/// Errors raised when a label is configured with an invalid value.
///
/// Geometry computation never returns these; degenerate numeric input during a frame
/// culls the label instead.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelError {
    /// Latitude outside `[-90, 90]`, longitude outside `[-180, 180]`, or a non-finite component.
    InvalidPosition {
        latitude: f64,
        longitude: f64,
        elevation: f64,
    },

    /// Heading is not a finite number of degrees.
    InvalidHeading(f64),

    /// Text height in meters must be finite and strictly positive.
    InvalidTextSize(f64),

    /// Font family is empty or the point size is not positive.
    InvalidFont(String),

    /// A color component is non-finite or outside `0.0..=1.0`.
    InvalidColor([f32; 4]),

    /// An offset component is not finite.
    InvalidOffset { x: f64, y: f64 },
}

impl std::fmt::Display for LabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelError::InvalidPosition {
                latitude,
                longitude,
                elevation,
            } => write!(
                f,
                "Invalid position: lat {}, lon {}, elevation {}",
                latitude, longitude, elevation
            ),
            LabelError::InvalidHeading(degrees) => write!(f, "Invalid heading: {}", degrees),
            LabelError::InvalidTextSize(meters) => {
                write!(f, "Invalid text size: {} m (must be > 0)", meters)
            }
            LabelError::InvalidFont(font) => write!(f, "Invalid font: {}", font),
            LabelError::InvalidColor([r, g, b, a]) => {
                write!(f, "Invalid color: rgba({}, {}, {}, {})", r, g, b, a)
            }
            LabelError::InvalidOffset { x, y } => write!(f, "Invalid offset: ({}, {})", x, y),
        }
    }
}

impl std::error::Error for LabelError {}

/// Result type for label configuration.
pub type LabelResult<T> = Result<T, LabelError>;
