//! Rendering interfaces for numedit.
//!
//! Widgets describe their appearance through the [`Renderer`] trait and ask
//! the host for text widths through [`TextMeasure`]. This crate defines those
//! collaborator interfaces plus the geometry and color types they exchange.
//!
//! # Key Types
//!
//! - [`Renderer`] - The render sink widgets draw into
//! - [`DisplayList`] - A recording renderer producing [`DrawCommand`]s
//! - [`TextMeasure`] - Text width measurement
//! - [`MonospaceMetrics`] - Fixed-advance measurement
//! - [`Rect`], [`Point`], [`Size`], [`Color`], [`Stroke`] - Geometry and style

mod renderer;
mod text;
mod types;

pub use renderer::{DisplayList, DrawCommand, Renderer};
pub use text::{MonospaceMetrics, TextMeasure};
pub use types::{Color, Point, Rect, Size, Stroke};
