//! Core widget trait and painting context.

use numedit_render::{Color, Rect, Renderer, Stroke};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// Context passed to [`Widget::paint`].
///
/// Wraps the host's renderer together with the rectangle of the widget being
/// painted. Coordinates are in the host's space; widgets draw at their own
/// geometry rather than at a local origin.
pub struct PaintContext<'a> {
    /// The renderer to draw with.
    renderer: &'a mut dyn Renderer,
    /// The widget's rectangle.
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// Get the widget's rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Draw a one-piece outline around the widget, shrunk by `inset` on
    /// every side.
    pub fn draw_focus_indicator_styled(&mut self, inset: f32, color: Color, width: f32) {
        let rect = if inset > 0.0 {
            Rect::new(
                self.widget_rect.left() + inset,
                self.widget_rect.top() + inset,
                self.widget_rect.width() - inset * 2.0,
                self.widget_rect.height() - inset * 2.0,
            )
        } else {
            self.widget_rect
        };
        self.renderer.stroke_rect(rect, &Stroke::new(color, width));
    }
}

/// The core trait for all widgets.
///
/// # Implementing
///
/// Widgets hold a [`WidgetBase`] and expose it through
/// [`widget_base`](Self::widget_base) and
/// [`widget_base_mut`](Self::widget_base_mut). The provided methods build on
/// that.
pub trait Widget: Send + Sync {
    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Paint the widget.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed. Consumed events are also
    /// accepted.
    fn event(&mut self, event: &mut WidgetEvent) -> bool;

    // =========================================================================
    // Provided methods
    // =========================================================================

    /// Get the widget's geometry.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Show or hide the widget.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }

    /// Paint into `renderer` at the widget's geometry and clear the repaint
    /// flag.
    fn paint_into(&self, renderer: &mut dyn Renderer) {
        let mut ctx = PaintContext::new(renderer, self.geometry());
        self.paint(&mut ctx);
        self.widget_base().clear_repaint();
    }
}
