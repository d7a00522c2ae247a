//! Public surface shared by the numeric widgets.

use numedit_core::{ConnectionId, NumericValue, Parameter, Signal};

use super::edit_engine::Selection;
use super::numeric_field::NumericField;
use crate::widget::traits::Widget;

/// A widget that edits a numeric parameter through a [`NumericField`].
///
/// Implementors only provide access to their field; everything else is
/// provided.
///
/// # Example
///
/// ```
/// use numedit::prelude::*;
///
/// let mut edit = NumEdit::<i32>::new();
/// edit.setup_with("count", 5, 0, 10, 200.0, 18.0);
///
/// edit.set_value(42);
/// assert_eq!(edit.value(), 10);
/// assert_eq!(edit.text(), "10");
/// assert_eq!(i32::from(&edit), 10);
/// ```
pub trait NumericWidget<T: NumericValue>: Widget {
    /// Get the underlying field.
    fn field(&self) -> &NumericField<T>;

    /// Get the underlying field mutably.
    fn field_mut(&mut self) -> &mut NumericField<T>;

    /// Get the bound parameter.
    fn parameter(&self) -> &Parameter<T> {
        self.field().parameter()
    }

    /// Get the current value.
    fn value(&self) -> T {
        self.field().value()
    }

    /// Clamp and set the value.
    fn set_value(&mut self, value: T) {
        self.field_mut().set_value(value);
    }

    /// Get the minimum.
    fn minimum(&self) -> T {
        self.field().minimum()
    }

    /// Get the maximum.
    fn maximum(&self) -> T {
        self.field().maximum()
    }

    /// Set the minimum.
    fn set_min(&mut self, min: T) {
        self.field_mut().set_min(min);
    }

    /// Set the maximum.
    fn set_max(&mut self, max: T) {
        self.field_mut().set_max(max);
    }

    /// Set the range.
    fn set_range(&mut self, min: T, max: T) {
        self.field_mut().set_range(min, max);
    }

    /// Get the displayed text.
    fn text(&self) -> String {
        self.field().text()
    }

    /// Get the selection.
    fn selection(&self) -> Selection {
        self.field().selection()
    }

    /// Check if the widget is being edited.
    fn is_active(&self) -> bool {
        self.field().is_active()
    }

    /// Leave focus.
    fn leave_focus(&mut self) {
        self.field_mut().leave_focus();
    }

    /// Connect a listener to value changes.
    fn connect_value_changed<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.field().connect_value_changed(listener)
    }

    /// Disconnect a value listener.
    fn disconnect_value_changed(&self, id: ConnectionId) -> bool {
        self.field().disconnect_value_changed(id)
    }

    /// Signal emitted when editing ends.
    fn editing_finished(&self) -> &Signal<()> {
        &self.field().editing_finished
    }
}

/// Implements `From<&Widget<T>> for T` for every bindable number type.
macro_rules! impl_value_conversions {
    ($widget:ident: $($ty:ty),*) => {
        $(
            impl From<&$widget<$ty>> for $ty {
                fn from(widget: &$widget<$ty>) -> Self {
                    widget.field().value()
                }
            }
        )*
    };
}

pub(crate) use impl_value_conversions;
