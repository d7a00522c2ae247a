//! Numeric text box with a focus frame.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use numedit::prelude::*;
//! use numedit::widget::{InputKind, InputSubscriptions};
//!
//! let input = Arc::new(InputSubscriptions::new());
//! let speed = Parameter::new("speed", 2.5f32, 0.0, 10.0);
//!
//! let mut edit = NumEdit::new()
//!     .with_input_source(input.clone())
//!     .with_update_on_enter_only(true);
//! edit.setup(speed.clone(), 200.0, 18.0);
//!
//! assert_eq!(edit.text(), "2.5");
//! assert_eq!(input.subscriber_count(InputKind::Keyboard), 1);
//!
//! speed.set(4.0);
//! assert_eq!(edit.text(), "4");
//! ```

use std::sync::Arc;

use numedit_core::{NumericValue, Parameter};
use numedit_render::TextMeasure;

use super::numeric_field::NumericField;
use super::numeric_widget::{NumericWidget, impl_value_conversions};
use crate::widget::base::WidgetBase;
use crate::widget::events::WidgetEvent;
use crate::widget::input::InputEventSource;
use crate::widget::style::FieldStyle;
use crate::widget::traits::{PaintContext, Widget};

/// A labelled numeric text box that draws a frame while focused.
///
/// Edits commit live by default. With
/// [`set_update_on_enter_only`](Self::set_update_on_enter_only) they are
/// held until Return or a click elsewhere, and Escape discards them.
#[derive(Debug)]
pub struct NumEdit<T: NumericValue> {
    field: NumericField<T>,
}

impl<T: NumericValue> NumEdit<T> {
    /// Create an unbound widget.
    pub fn new() -> Self {
        Self {
            field: NumericField::new(),
        }
    }

    /// Create a widget bound to `parameter`.
    pub fn bound(parameter: Parameter<T>, width: f32, height: f32) -> Self {
        let mut edit = Self::new();
        edit.setup(parameter, width, height);
        edit
    }

    /// Bind to `parameter`. See [`NumericField::setup`].
    pub fn setup(&mut self, parameter: Parameter<T>, width: f32, height: f32) -> &mut Self {
        self.field.setup(parameter, width, height);
        self
    }

    /// Bind to a new parameter. See [`NumericField::setup_with`].
    pub fn setup_with(
        &mut self,
        name: impl Into<String>,
        value: T,
        min: T,
        max: T,
        width: f32,
        height: f32,
    ) -> &mut Self {
        self.field.setup_with(name, value, min, max, width, height);
        self
    }

    /// Set the text measurer (builder pattern).
    pub fn with_measure(mut self, measure: Arc<dyn TextMeasure>) -> Self {
        self.field.set_measure(measure);
        self
    }

    /// Set the style (builder pattern).
    pub fn with_style(mut self, style: FieldStyle) -> Self {
        self.field.set_style(style);
        self
    }

    /// Set the input source (builder pattern).
    pub fn with_input_source(mut self, source: Arc<dyn InputEventSource>) -> Self {
        self.field.set_input_source(Some(source));
        self
    }

    /// Set enter-only commits (builder pattern).
    pub fn with_update_on_enter_only(mut self, enabled: bool) -> Self {
        self.field.set_update_on_enter_only(enabled);
        self
    }

    /// Hold edits until focus is left instead of committing every keystroke.
    pub fn set_update_on_enter_only(&mut self, enabled: bool) {
        self.field.set_update_on_enter_only(enabled);
    }
}

impl<T: NumericValue> Default for NumEdit<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NumericValue> Widget for NumEdit<T> {
    fn widget_base(&self) -> &WidgetBase {
        self.field.base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.field.base_mut()
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        self.field.paint_field(ctx, true);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        self.field.handle_event(event)
    }
}

impl<T: NumericValue> NumericWidget<T> for NumEdit<T> {
    fn field(&self) -> &NumericField<T> {
        &self.field
    }

    fn field_mut(&mut self) -> &mut NumericField<T> {
        &mut self.field
    }
}

impl_value_conversions!(NumEdit: i8, u8, i16, u16, i32, u32, f32, f64);

static_assertions::assert_impl_all!(NumEdit<f32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::{Key, KeyPressEvent, MousePressEvent, MouseReleaseEvent};
    use numedit_render::{
        Color, DisplayList, DrawCommand, MonospaceMetrics, Point, Rect, Renderer, Stroke,
    };

    fn setup() -> NumEdit<i32> {
        let mut edit = NumEdit::new().with_measure(Arc::new(MonospaceMetrics::new(10.0)));
        edit.setup_with("n", 50, 0, 100, 100.0, 18.0);
        edit
    }

    fn focus(edit: &mut NumEdit<i32>) {
        edit.event(&mut WidgetEvent::MousePress(MousePressEvent::left(Point::new(
            96.0, 9.0,
        ))));
        edit.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::left(
            Point::new(96.0, 9.0),
        )));
    }

    #[test]
    fn test_idle_paint() {
        let edit = setup();
        let mut list = DisplayList::new();
        edit.paint_into(&mut list);

        let style = FieldStyle::default();
        assert_eq!(
            list.commands(),
            &[
                DrawCommand::FillRect {
                    rect: Rect::new(0.0, 0.0, 100.0, 18.0),
                    color: style.background_color,
                },
                DrawCommand::Text {
                    text: "n".into(),
                    position: Point::new(4.0, 13.0),
                    color: style.text_color,
                },
                DrawCommand::Text {
                    text: "50".into(),
                    position: Point::new(76.0, 13.0),
                    color: style.text_color,
                },
            ]
        );
        assert!(!edit.needs_repaint());
    }

    #[test]
    fn test_focused_paint_has_frame_and_selection() {
        let mut edit = setup();
        focus(&mut edit);

        let mut list = DisplayList::new();
        edit.paint_into(&mut list);
        let style = FieldStyle::default();

        assert_eq!(
            list.commands()[1],
            DrawCommand::StrokeRect {
                rect: Rect::new(0.0, 0.0, 100.0, 18.0),
                stroke: Stroke::new(style.focus_color, 1.0),
            }
        );
        assert_eq!(
            list.commands()[2],
            DrawCommand::FillRect {
                rect: Rect::new(76.0, 1.0, 20.0, 16.0),
                color: style.fill_color,
            }
        );
    }

    #[test]
    fn test_caret_paint() {
        let mut edit = setup();
        focus(&mut edit);
        edit.event(&mut WidgetEvent::KeyPress(KeyPressEvent::key(Key::End)));

        let mut list = DisplayList::new();
        list.fill_rect(Rect::ZERO, Color::BLACK);
        edit.paint_into(&mut list);

        assert_eq!(
            list.commands()[3],
            DrawCommand::Line {
                from: Point::new(96.0, 0.0),
                to: Point::new(96.0, 18.0),
                stroke: Stroke::new(FieldStyle::default().text_color, 1.0),
            }
        );
    }

    #[test]
    fn test_enter_only_mode() {
        let mut edit = setup().with_update_on_enter_only(true);
        focus(&mut edit);
        edit.event(&mut WidgetEvent::KeyPress(KeyPressEvent::key(Key::Digit8)));
        assert_eq!(edit.value(), 50);
        assert_eq!(edit.text(), "8");

        edit.leave_focus();
        assert_eq!(edit.value(), 8);
        assert_eq!(i32::from(&edit), 8);
    }

    #[test]
    fn test_bound_constructor() {
        let parameter = Parameter::new("x", 0.25f64, 0.0, 1.0);
        let edit = NumEdit::bound(parameter.clone(), 120.0, 20.0);
        assert_eq!(edit.text(), "0.25");
        assert_eq!(edit.geometry(), Rect::new(0.0, 0.0, 120.0, 20.0));
        assert!(edit.parameter().ptr_eq(&parameter));
        assert_eq!(f64::from(&edit), 0.25);
    }
}
