//! Render-sink trait and a recording implementation.
//!
//! Widgets never produce pixels themselves. They describe what to draw
//! through the [`Renderer`] trait, which a host backend implements. The
//! bundled [`DisplayList`] records the calls as [`DrawCommand`]s, which is
//! what a retained-mode host (or a test) consumes.
//!
//! # Example
//!
//! ```
//! use numedit_render::{Color, DisplayList, DrawCommand, Rect, Renderer};
//!
//! let mut list = DisplayList::new();
//! list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
//! assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
//! ```

use crate::types::{Color, Point, Rect, Stroke};

/// The 2D drawing interface consumed by widgets.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw pre-shaped text with its baseline origin at `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Color);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect { rect: Rect, color: Color },
    /// A stroked rectangle outline.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// A line segment.
    Line { from: Point, to: Point, stroke: Stroke },
    /// A run of text.
    Text {
        text: String,
        position: Point,
        color: Color,
    },
}

/// A [`Renderer`] that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Renderer for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }
}
