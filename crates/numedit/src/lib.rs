//! numedit - numeric input fields.
//!
//! Two labelled text-box widgets, [`NumEdit`](widget::NumEdit) and
//! [`InputField`](widget::InputField), that edit a shared
//! [`Parameter`]. They support click-to-select, drag selection, keyboard
//! editing with live commits and scroll-wheel stepping, and keep the value
//! inside the parameter's range.
//!
//! This is the umbrella crate; it re-exports the core and render APIs.
//!
//! # Example
//!
//! ```
//! use numedit::prelude::*;
//!
//! let volume = Parameter::new("volume", 50i32, 0, 100);
//! let edit = NumEdit::bound(volume.clone(), 200.0, 18.0);
//!
//! volume.set(75);
//! assert_eq!(edit.text(), "75");
//! assert_eq!(i32::from(&edit), 75);
//! ```

pub use numedit_core::*;

/// Geometry, drawing and text measurement.
pub mod render {
    pub use numedit_render::*;
}

pub mod widget;

/// Commonly used types.
pub mod prelude {
    pub use crate::widget::{
        FieldStyle, InputField, NumEdit, NumericField, NumericWidget, Widget, WidgetEvent,
    };
    pub use numedit_core::{NumericValue, Parameter};
}
