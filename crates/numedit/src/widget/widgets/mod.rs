//! Numeric widgets.
//!
//! - [`NumEdit`]: Numeric text box with a focus frame and optional
//!   enter-only commits
//! - [`InputField`]: Numeric text box for panels
//! - [`NumericField`]: The interaction controller both are built on
//! - [`EditEngine`]: Text buffer, caret and selection
//! - [`NumericBinding`]: Commits text to a parameter and follows its changes

mod edit_engine;
mod input_field;
mod num_edit;
mod numeric_binding;
mod numeric_field;
mod numeric_widget;

pub use edit_engine::{EditEngine, Selection, TextMetrics};
pub use input_field::InputField;
pub use num_edit::NumEdit;
pub use numeric_binding::{NumericBinding, ValueOrigin};
pub use numeric_field::{FocusState, NumericField, PressTracker};
pub use numeric_widget::NumericWidget;
