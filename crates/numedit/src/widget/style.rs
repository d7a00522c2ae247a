//! Visual configuration for numeric fields.

use numedit_render::Color;

/// Colours, padding and default size of a numeric field.
///
/// # Example
///
/// ```
/// use numedit::widget::FieldStyle;
/// use numedit::render::Color;
///
/// let style = FieldStyle::new()
///     .with_text_color(Color::from_rgb8(255, 200, 0))
///     .with_text_padding(6.0);
/// assert_eq!(style.text_padding, 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    /// Fill behind the whole field.
    pub background_color: Color,
    /// Label, value and caret colour.
    pub text_color: Color,
    /// Selection highlight colour.
    pub fill_color: Color,
    /// Focus frame colour.
    pub focus_color: Color,
    /// Horizontal inset of the label and the value text.
    pub text_padding: f32,
    /// Width used when a widget is set up without an explicit width.
    pub default_width: f32,
    /// Height used when a widget is set up without an explicit height.
    pub default_height: f32,
}

impl FieldStyle {
    /// Create the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background colour.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the text colour.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the selection colour.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the focus frame colour.
    pub fn with_focus_color(mut self, color: Color) -> Self {
        self.focus_color = color;
        self
    }

    /// Set the text padding. Negative values are treated as zero.
    pub fn with_text_padding(mut self, padding: f32) -> Self {
        self.text_padding = padding.max(0.0);
        self
    }

    /// Set the default size.
    pub fn with_default_size(mut self, width: f32, height: f32) -> Self {
        self.default_width = width;
        self.default_height = height;
        self
    }
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba8(0, 0, 0, 178),
            text_color: Color::gray8(255),
            fill_color: Color::gray8(128),
            focus_color: Color::gray8(255),
            text_padding: 4.0,
            default_width: 200.0,
            default_height: 18.0,
        }
    }
}
