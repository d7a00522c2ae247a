//! Numeric text box without a focus frame.

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

/// A labelled numeric text box for use inside panels.
///
/// Behaves like [`NumEdit`](super::NumEdit) but is drawn without a focus
/// frame and always commits every keystroke.
#[derive(Debug)]
pub struct InputField<T: NumericValue> {
    field: NumericField<T>,
}

impl<T: NumericValue> InputField<T> {
    /// Create an unbound widget.
    pub fn new() -> Self {
        Self {
            field: NumericField::new(),
        }
    }

    /// Create a widget bound to `parameter`.
    pub fn bound(parameter: Parameter<T>, width: f32, height: f32) -> Self {
        let mut field = Self::new();
        field.setup(parameter, width, height);
        field
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
}

impl<T: NumericValue> Default for InputField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NumericValue> Widget for InputField<T> {
    fn widget_base(&self) -> &WidgetBase {
        self.field.base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.field.base_mut()
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        self.field.paint_field(ctx, false);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        self.field.handle_event(event)
    }
}

impl<T: NumericValue> NumericWidget<T> for InputField<T> {
    fn field(&self) -> &NumericField<T> {
        &self.field
    }

    fn field_mut(&mut self) -> &mut NumericField<T> {
        &mut self.field
    }
}

impl_value_conversions!(InputField: i8, u8, i16, u16, i32, u32, f32, f64);

static_assertions::assert_impl_all!(InputField<u8>: Send, Sync);
