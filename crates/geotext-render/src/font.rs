/// Font selection for a label.
///
/// Fonts are compared structurally; two equal values select the same face and size, so
/// replacing a font with an equal one never needs a re-measure.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name, e.g. `"Arial"`.
    pub family: String,
    /// Point size.
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Non-empty family and a finite, positive size.
    pub fn is_valid(&self) -> bool {
        !self.family.trim().is_empty() && self.size.is_finite() && self.size > 0.0
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new("Arial", 24.0).bold()
    }
}

impl std::fmt::Display for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match (self.bold, self.italic) {
            (true, true) => "BOLDITALIC",
            (true, false) => "BOLD",
            (false, true) => "ITALIC",
            (false, false) => "PLAIN",
        };
        write!(f, "{}-{}-{}", self.family, style, self.size)
    }
}
