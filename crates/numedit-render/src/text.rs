//! Text measurement.
//!
//! Hit-testing and layout only need the rendered width of a string. That
//! measurement belongs to the host's font system and is consumed through
//! [`TextMeasure`]. [`MonospaceMetrics`] is a fixed-advance implementation
//! for bitmap fonts and tests; any `Fn(&str) -> f32` closure also works.

/// Measures the rendered width of a string.
pub trait TextMeasure: Send + Sync {
    /// Width of `text` in pixels.
    fn measure_width(&self, text: &str) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32 + Send + Sync,
{
    fn measure_width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Fixed-advance metrics: every character is `advance` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    advance: f32,
}

impl MonospaceMetrics {
    /// Advance of the built-in 8 px bitmap font.
    pub const DEFAULT_ADVANCE: f32 = 8.0;

    /// Create metrics with the given per-character advance.
    pub fn new(advance: f32) -> Self {
        Self {
            advance: advance.max(0.0),
        }
    }

    /// The per-character advance.
    pub fn advance(&self) -> f32 {
        self.advance
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE)
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}
