//! Widget system for numedit.
//!
//! This module provides:
//!
//! - [`Widget`] trait: The interface hosts use to paint widgets and deliver
//!   input
//! - [`WidgetBase`]: Geometry, visibility, hover and repaint state
//! - [`WidgetEvent`]: Pointer and keyboard events
//! - [`InputEventSource`]: Host-side input subscription
//! - [`widgets`]: The numeric widgets
//!
//! # Driving a widget
//!
//! A host forwards its input as [`WidgetEvent`]s and repaints widgets whose
//! [`needs_repaint`](Widget::needs_repaint) flag is set:
//!
//! ```
//! use numedit::prelude::*;
//! use numedit::widget::{MousePressEvent, MouseReleaseEvent, WidgetEvent};
//! use numedit::render::{DisplayList, Point};
//!
//! let mut edit = InputField::<i32>::new();
//! edit.setup_with("count", 50, 0, 100, 200.0, 18.0);
//!
//! let pos = Point::new(190.0, 9.0);
//! edit.event(&mut WidgetEvent::MousePress(MousePressEvent::left(pos)));
//! edit.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::left(pos)));
//! assert!(edit.is_active());
//!
//! if edit.needs_repaint() {
//!     let mut list = DisplayList::new();
//!     edit.paint_into(&mut list);
//!     assert!(!list.is_empty());
//! }
//! ```

mod base;
mod events;
mod input;
mod style;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, MouseButton,
    MouseMoveEvent, MousePressEvent, MouseReleaseEvent, WheelEvent, WidgetEvent,
};
pub use input::{
    InputEventSource, InputKind, InputRegistration, InputSubscriptions, SubscriptionId,
};
pub use style::FieldStyle;
pub use traits::{PaintContext, Widget};
pub use widgets::{
    EditEngine, FocusState, InputField, NumEdit, NumericBinding, NumericField, NumericWidget,
    PressTracker, Selection, TextMetrics, ValueOrigin,
};
