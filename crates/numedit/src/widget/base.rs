//! Widget base implementation.
//!
//! [`WidgetBase`] holds the state every widget shares: geometry, visibility,
//! hover state and the repaint flag. Widgets include it as a field and
//! delegate to it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use numedit_render::{Point, Rect, Size};

/// The base implementation for all widgets.
#[derive(Debug)]
pub struct WidgetBase {
    /// Position and size, in the host's coordinate space.
    geometry: Rect,

    /// Whether the widget is visible (drawn and hit-testable).
    visible: bool,

    /// Whether the pointer is currently over this widget.
    hovered: bool,

    /// Set whenever the widget needs to be repainted. Shared so that change
    /// notifications arriving from a parameter can request a repaint.
    needs_repaint: Arc<AtomicBool>,
}

impl WidgetBase {
    /// Create a new widget base with the given geometry.
    pub fn new(geometry: Rect) -> Self {
        Self {
            geometry,
            visible: true,
            hovered: false,
            needs_repaint: Arc::new(AtomicBool::new(true)),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.update();
        }
    }

    /// Get the widget's position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the widget's position.
    pub fn set_pos(&mut self, pos: Point) {
        self.set_geometry(Rect {
            origin: pos,
            size: self.geometry.size,
        });
    }

    /// Move the widget to the specified position.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.set_pos(Point::new(x, y));
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_geometry(Rect {
            origin: self.geometry.origin,
            size: Size::new(width, height),
        });
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.height()
    }

    // =========================================================================
    // Visibility & Hover
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget. A hidden widget is never hovered.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            if !visible {
                self.hovered = false;
            }
            self.update();
        }
    }

    /// Check if the pointer is over the widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Recompute the hover state for a pointer position.
    pub fn update_hover(&mut self, pos: Point) -> bool {
        self.hovered = self.contains_point(pos);
        self.hovered
    }

    /// Check if a point is inside a visible widget.
    pub fn contains_point(&self, point: Point) -> bool {
        self.visible && self.geometry.contains(point)
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::Acquire)
    }

    /// Request a repaint.
    pub fn update(&self) {
        self.needs_repaint.store(true, Ordering::Release);
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::Release);
    }

    /// A handle that requests repaints of this widget from elsewhere.
    pub(crate) fn repaint_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.needs_repaint)
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_changes_request_repaint() {
        let mut base = WidgetBase::new(Rect::new(0.0, 0.0, 200.0, 18.0));
        base.clear_repaint();

        base.set_geometry(Rect::new(0.0, 0.0, 200.0, 18.0));
        assert!(!base.needs_repaint());

        base.move_to(10.0, 5.0);
        assert!(base.needs_repaint());
        assert_eq!(base.pos(), Point::new(10.0, 5.0));
        assert_eq!(base.width(), 200.0);
    }

    #[test]
    fn test_hidden_widget_is_not_hit() {
        let mut base = WidgetBase::new(Rect::new(0.0, 0.0, 100.0, 18.0));
        assert!(base.update_hover(Point::new(50.0, 9.0)));

        base.set_visible(false);
        assert!(!base.is_hovered());
        assert!(!base.contains_point(Point::new(50.0, 9.0)));
    }

    #[test]
    fn test_repaint_flag_is_shared() {
        let base = WidgetBase::default();
        base.clear_repaint();

        let flag = base.repaint_flag();
        flag.store(true, Ordering::Release);
        assert!(base.needs_repaint());
    }
}
