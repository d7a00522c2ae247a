//! Core systems for numedit.
//!
//! This crate provides the foundation the numeric widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe publish/subscribe notifications
//! - **Parameters**: Shared, observable values with a name and a range
//! - **Numeric Values**: Parsing, formatting, clamping and scroll stepping for
//!   the bindable number types
//! - **Logging**: `tracing` targets and helper macros
//!
//! # Example
//!
//! ```
//! use numedit_core::{NumericValue, Parameter};
//!
//! let volume = Parameter::new("volume", 50i32, 0, 100);
//!
//! let id = volume.connect(|value| {
//!     println!("Volume changed to: {}", value);
//! });
//!
//! let typed = i32::parse_text("75").unwrap_or_default();
//! volume.set(typed.clamp_to(volume.min(), volume.max()));
//! volume.disconnect(id);
//! ```

mod error;
pub mod logging;
pub mod numeric;
pub mod parameter;
pub mod signal;

pub use error::{ParseError, Result};
pub use numeric::NumericValue;
pub use parameter::Parameter;
pub use signal::{ConnectionId, Signal};
