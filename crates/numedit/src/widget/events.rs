//! Widget input event types.
//!
//! The host toolkit translates its native pointer and keyboard input into
//! these events and delivers them to [`Widget::event`](super::Widget::event).
//! Positions are in the same coordinate space as the widget geometry.

use numedit_render::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

impl MouseButton {
    /// Bit for this button in [`MouseMoveEvent::buttons`].
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Pointer position.
    pub pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            pos,
            modifiers,
        }
    }

    /// Left-button press without modifiers.
    pub fn left(pos: Point) -> Self {
        Self::new(MouseButton::Left, pos, KeyboardModifiers::NONE)
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Pointer position.
    pub pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            pos,
            modifiers,
        }
    }

    /// Left-button release without modifiers.
    pub fn left(pos: Point) -> Self {
        Self::new(MouseButton::Left, pos, KeyboardModifiers::NONE)
    }
}

/// Mouse move event.
///
/// A move with the left button held is a drag.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Pointer position.
    pub pos: Point,
    /// Mouse buttons currently held, as [`MouseButton::mask`] bits.
    pub buttons: u8,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(pos: Point, buttons: u8, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            pos,
            buttons,
            modifiers,
        }
    }

    /// Pointer motion with no buttons held.
    pub fn hover(pos: Point) -> Self {
        Self::new(pos, 0, KeyboardModifiers::NONE)
    }

    /// Pointer motion with the left button held.
    pub fn drag(pos: Point) -> Self {
        Self::new(pos, MouseButton::Left.mask(), KeyboardModifiers::NONE)
    }

    /// Check if a specific button is pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        (self.buttons & button.mask()) != 0
    }
}

/// Mouse wheel (scroll) event.
#[derive(Debug, Clone, Copy)]
pub struct WheelEvent {
    /// Base event data.
    pub base: EventBase,
    /// Pointer position.
    pub pos: Point,
    /// Horizontal scroll delta (positive = right).
    pub delta_x: f32,
    /// Vertical scroll delta (positive = up/away from user).
    pub delta_y: f32,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl WheelEvent {
    /// Create a new wheel event.
    pub fn new(pos: Point, delta_x: f32, delta_y: f32, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            pos,
            delta_x,
            delta_y,
            modifiers,
        }
    }

    /// Vertical scroll without modifiers.
    pub fn vertical(pos: Point, delta_y: f32) -> Self {
        Self::new(pos, 0.0, delta_y, KeyboardModifiers::NONE)
    }
}

/// Keyboard key codes.
///
/// Only the keys meaningful to numeric editing are named; hosts map
/// everything else to [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Key {
    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Navigation
    ArrowLeft, ArrowRight,
    Home, End,

    // Editing
    Backspace, Delete,
    Enter,
    Escape,

    // Punctuation
    Minus, Comma, Period,

    // Numpad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadSubtract, NumpadDecimal, NumpadEnter,

    // Unknown/unmapped key
    Unknown(u16),
}

impl Key {
    /// The decimal digit this key types, from either the main keyboard or
    /// the numpad.
    pub fn digit_value(&self) -> Option<u8> {
        match self {
            Key::Digit0 | Key::Numpad0 => Some(0),
            Key::Digit1 | Key::Numpad1 => Some(1),
            Key::Digit2 | Key::Numpad2 => Some(2),
            Key::Digit3 | Key::Numpad3 => Some(3),
            Key::Digit4 | Key::Numpad4 => Some(4),
            Key::Digit5 | Key::Numpad5 => Some(5),
            Key::Digit6 | Key::Numpad6 => Some(6),
            Key::Digit7 | Key::Numpad7 => Some(7),
            Key::Digit8 | Key::Numpad8 => Some(8),
            Key::Digit9 | Key::Numpad9 => Some(9),
            _ => None,
        }
    }

    /// Check if this is a digit key (main keyboard or numpad).
    pub fn is_digit(&self) -> bool {
        self.digit_value().is_some()
    }

    /// Check if this key types a decimal separator.
    pub fn is_decimal_separator(&self) -> bool {
        matches!(self, Key::Period | Key::Comma | Key::NumpadDecimal)
    }

    /// Check if this key confirms input.
    pub fn is_enter(&self) -> bool {
        matches!(self, Key::Enter | Key::NumpadEnter)
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// Used as a fallback when the key code is [`Key::Unknown`], e.g. for
    /// layouts where the decimal separator has no dedicated key code.
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// A plain key press with no modifiers and no text.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, String::new(), false)
    }
}

/// Key release event, sent when a key is released.
#[derive(Debug, Clone)]
pub struct KeyReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }
}

/// Input events delivered to widgets.
#[derive(Debug)]
pub enum WidgetEvent {
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Mouse move (or drag) event.
    MouseMove(MouseMoveEvent),
    /// Mouse wheel event.
    Wheel(WheelEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Key release event.
    KeyRelease(KeyReleaseEvent),
}

impl WidgetEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::MousePress(e) => e.base.is_accepted(),
            Self::MouseRelease(e) => e.base.is_accepted(),
            Self::MouseMove(e) => e.base.is_accepted(),
            Self::Wheel(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::KeyRelease(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::MousePress(e) => e.base.accept(),
            Self::MouseRelease(e) => e.base.accept(),
            Self::MouseMove(e) => e.base.accept(),
            Self::Wheel(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
            Self::KeyRelease(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::MousePress(e) => e.base.ignore(),
            Self::MouseRelease(e) => e.base.ignore(),
            Self::MouseMove(e) => e.base.ignore(),
            Self::Wheel(e) => e.base.ignore(),
            Self::KeyPress(e) => e.base.ignore(),
            Self::KeyRelease(e) => e.base.ignore(),
        }
    }

    /// Check if this is a pointer event.
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MousePress(_) | Self::MouseRelease(_) | Self::MouseMove(_) | Self::Wheel(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(Key::Digit7.digit_value(), Some(7));
        assert_eq!(Key::Numpad0.digit_value(), Some(0));
        assert_eq!(Key::Period.digit_value(), None);
        assert!(Key::Numpad9.is_digit());
        assert!(!Key::Unknown(12).is_digit());
    }

    #[test]
    fn test_decimal_and_enter_keys() {
        assert!(Key::Comma.is_decimal_separator());
        assert!(Key::NumpadDecimal.is_decimal_separator());
        assert!(!Key::Minus.is_decimal_separator());
        assert!(Key::NumpadEnter.is_enter());
    }

    #[test]
    fn test_move_buttons() {
        let drag = MouseMoveEvent::drag(Point::ZERO);
        assert!(drag.is_button_pressed(MouseButton::Left));
        assert!(!drag.is_button_pressed(MouseButton::Right));
        assert!(!MouseMoveEvent::hover(Point::ZERO).is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn test_accept_ignore() {
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::key(Key::Enter));
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
        assert!(!event.is_mouse());
    }
}
