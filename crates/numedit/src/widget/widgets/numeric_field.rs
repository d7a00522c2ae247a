//! Interaction controller shared by the numeric widgets.
//!
//! [`NumericField`] turns pointer and keyboard events into edits on an
//! [`EditEngine`] and commits the results through a [`NumericBinding`]. It has
//! two focus states:
//!
//! - **Idle**: the field shows the formatted value. A left press inside the
//!   field focuses it.
//! - **Active**: the field shows a caret or selection and accepts keys. A
//!   press outside, Return or Escape leaves focus.
//!
//! A press followed by a release without a drag selects the whole text, so
//! the first digit typed replaces the value.
//!
//! Edit state lives behind a mutex shared with the parameter listener. The
//! listener runs synchronously inside every parameter write, so the lock is
//! never held while the controller writes the parameter.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use numedit_core::logging::targets;
use numedit_core::{ConnectionId, NumericValue, Parameter, Signal};
use numedit_render::{MonospaceMetrics, Point, Rect, Stroke, TextMeasure};
use parking_lot::Mutex;

use super::edit_engine::{EditEngine, Selection};
use super::numeric_binding::{NumericBinding, ValueOrigin};
use crate::widget::base::WidgetBase;
use crate::widget::events::{
    Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WheelEvent, WidgetEvent,
};
use crate::widget::input::{InputEventSource, InputKind, InputRegistration};
use crate::widget::style::FieldStyle;
use crate::widget::traits::PaintContext;

/// Keyboard focus state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FocusState {
    /// Not being edited.
    #[default]
    Idle,
    /// Being edited.
    Active,
}

impl FocusState {
    /// Check if the field is being edited.
    pub fn is_active(&self) -> bool {
        matches!(self, FocusState::Active)
    }
}

/// Pointer state since the field gained focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressTracker {
    /// Presses inside the field since focus was gained.
    pub count: u32,
    /// Character offset of the last press.
    pub anchor: usize,
    /// Whether the left button is held after a press inside the field.
    pub mouse_down: bool,
}

/// An edit requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditCommand {
    Insert(char),
    DeleteBackward,
    DeleteForward,
    CaretLeft,
    CaretRight,
    CaretHome,
    CaretEnd,
    Confirm,
    Cancel,
}

impl EditCommand {
    fn from_key_event(event: &KeyPressEvent) -> Option<Self> {
        if let Some(digit) = event.key.digit_value() {
            return Some(Self::Insert(char::from(b'0' + digit)));
        }
        let command = match event.key {
            key if key.is_decimal_separator() => Self::Insert('.'),
            key if key.is_enter() => Self::Confirm,
            Key::Minus | Key::NumpadSubtract => Self::Insert('-'),
            Key::Backspace => Self::DeleteBackward,
            Key::Delete => Self::DeleteForward,
            Key::ArrowLeft => Self::CaretLeft,
            Key::ArrowRight => Self::CaretRight,
            Key::Home => Self::CaretHome,
            Key::End => Self::CaretEnd,
            Key::Escape => Self::Cancel,
            _ => return Self::from_text(&event.text),
        };
        Some(command)
    }

    /// Fallback for layouts that report only the typed text.
    fn from_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match ch {
            '0'..='9' | '-' => Some(Self::Insert(ch)),
            '.' | ',' => Some(Self::Insert('.')),
            _ => None,
        }
    }
}

/// Edit state shared with the value listener.
#[derive(Debug)]
struct FieldState {
    engine: EditEngine,
    focus: FocusState,
    press: PressTracker,
}

/// The shared controller behind [`NumEdit`](super::NumEdit) and
/// [`InputField`](super::InputField).
pub struct NumericField<T: NumericValue> {
    base: WidgetBase,
    binding: NumericBinding<T>,
    state: Arc<Mutex<FieldState>>,
    style: FieldStyle,
    input: InputRegistration,
    update_on_enter_only: bool,

    /// Signal emitted when the field leaves focus.
    pub editing_finished: Signal<()>,
}

impl<T: NumericValue> NumericField<T> {
    /// Create an unbound field holding a private parameter at `T::default()`.
    ///
    /// The field does not react to input until it is [`setup`](Self::setup).
    pub fn new() -> Self {
        let style = FieldStyle::default();
        let binding: NumericBinding<T> = NumericBinding::new(Parameter::default());
        let mut engine = EditEngine::new(Arc::new(MonospaceMetrics::default()));
        engine.set_text(binding.value().format_value());
        engine.collapse_to_end();

        Self {
            base: WidgetBase::new(Rect::new(
                0.0,
                0.0,
                style.default_width,
                style.default_height,
            )),
            binding,
            state: Arc::new(Mutex::new(FieldState {
                engine,
                focus: FocusState::Idle,
                press: PressTracker::default(),
            })),
            style,
            input: InputRegistration::new(),
            update_on_enter_only: false,
            editing_finished: Signal::new(),
        }
    }

    /// Bind to `parameter` with the given size.
    ///
    /// Formats the value into the text, connects the value listener and
    /// registers for mouse and keyboard input. Calling it again replaces the
    /// previous binding.
    pub fn setup(&mut self, parameter: Parameter<T>, width: f32, height: f32) -> &mut Self {
        self.binding = NumericBinding::new(parameter);
        self.base.resize(width, height);

        let text = self.binding.value().format_value();
        {
            let mut state = self.state.lock();
            state.focus = FocusState::Idle;
            state.press = PressTracker::default();
            state.engine.set_text(text);
            state.engine.collapse_to_end();
        }

        let state = Arc::clone(&self.state);
        let repaint = self.base.repaint_flag();
        self.binding.bind(move |value, origin| {
            let mut state = state.lock();
            match origin {
                ValueOrigin::Internal => state.engine.refresh_metrics(),
                ValueOrigin::External => {
                    state.engine.set_text(value.format_value());
                    if state.focus.is_active() {
                        state.engine.collapse_to_end();
                    }
                }
            }
            repaint.store(true, Ordering::Release);
        });

        self.register_mouse_events();
        self.register_key_events();
        self.base.update();

        tracing::debug!(
            target: targets::FIELD,
            name = %self.binding.parameter().name(),
            width,
            height,
            "field set up"
        );
        self
    }

    /// Create a parameter from its parts and [`setup`](Self::setup) with it.
    ///
    /// The initial value is clamped into the range.
    pub fn setup_with(
        &mut self,
        name: impl Into<String>,
        value: T,
        min: T,
        max: T,
        width: f32,
        height: f32,
    ) -> &mut Self {
        let parameter = Parameter::new(name, value, min, max);
        let (min, max) = parameter.range();
        parameter.set(value.clamp_to(min, max));
        self.setup(parameter, width, height)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the text measurer.
    pub fn set_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.state.lock().engine.set_measure(measure);
        self.base.update();
    }

    /// Get the style.
    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// Set the style.
    pub fn set_style(&mut self, style: FieldStyle) {
        self.style = style;
        self.base.update();
    }

    /// Attach the host's input source.
    pub fn set_input_source(&mut self, source: Option<Arc<dyn InputEventSource>>) {
        self.input.set_source(source);
    }

    /// Check if edits are only committed when focus is left.
    pub fn update_on_enter_only(&self) -> bool {
        self.update_on_enter_only
    }

    pub(crate) fn set_update_on_enter_only(&mut self, enabled: bool) {
        self.update_on_enter_only = enabled;
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Get the bound parameter.
    pub fn parameter(&self) -> &Parameter<T> {
        self.binding.parameter()
    }

    /// Get the current value.
    pub fn value(&self) -> T {
        self.binding.value()
    }

    /// Clamp and set the value. The text follows.
    pub fn set_value(&mut self, value: T) {
        self.binding.set_value(value);
    }

    /// Get the minimum.
    pub fn minimum(&self) -> T {
        self.binding.min()
    }

    /// Get the maximum.
    pub fn maximum(&self) -> T {
        self.binding.max()
    }

    /// Set the minimum, clamping the value into the new range.
    pub fn set_min(&mut self, min: T) {
        self.binding.set_min(min);
    }

    /// Set the maximum, clamping the value into the new range.
    pub fn set_max(&mut self, max: T) {
        self.binding.set_max(max);
    }

    /// Set the range, clamping the value into it.
    pub fn set_range(&mut self, min: T, max: T) {
        self.binding.set_range(min, max);
    }

    /// Connect a listener to value changes of the bound parameter.
    pub fn connect_value_changed<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.binding.parameter().connect(listener)
    }

    /// Disconnect a value listener.
    pub fn disconnect_value_changed(&self, id: ConnectionId) -> bool {
        self.binding.parameter().disconnect(id)
    }

    // =========================================================================
    // Edit State
    // =========================================================================

    /// Get the displayed text.
    pub fn text(&self) -> String {
        self.state.lock().engine.text().to_owned()
    }

    /// Get the selection.
    pub fn selection(&self) -> Selection {
        self.state.lock().engine.selection()
    }

    /// Get the focus state.
    pub fn focus_state(&self) -> FocusState {
        self.state.lock().focus
    }

    /// Check if the field is being edited.
    pub fn is_active(&self) -> bool {
        self.focus_state().is_active()
    }

    /// Get the pointer state.
    pub fn press_tracker(&self) -> PressTracker {
        self.state.lock().press
    }

    /// Get the widget base.
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    /// Get the widget base mutably.
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    // =========================================================================
    // Input Registration
    // =========================================================================

    /// Ask for pointer events.
    pub fn register_mouse_events(&mut self) {
        self.input.register(InputKind::Mouse);
    }

    /// Stop asking for pointer events.
    pub fn unregister_mouse_events(&mut self) {
        self.input.unregister(InputKind::Mouse);
    }

    /// Ask for keyboard events.
    pub fn register_key_events(&mut self) {
        self.input.register(InputKind::Keyboard);
    }

    /// Stop asking for keyboard events.
    pub fn unregister_key_events(&mut self) {
        self.input.unregister(InputKind::Keyboard);
    }

    /// Check whether events of `kind` are wanted.
    pub fn is_registered(&self, kind: InputKind) -> bool {
        self.input.is_registered(kind)
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatch an event. Returns `true` and accepts the event if it was
    /// consumed.
    pub fn handle_event(&mut self, event: &mut WidgetEvent) -> bool {
        let kind = if event.is_mouse() {
            InputKind::Mouse
        } else {
            InputKind::Keyboard
        };
        if !self.input.is_registered(kind) {
            return false;
        }

        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::Wheel(e) => self.handle_wheel(e),
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::KeyRelease(e) => self.handle_key_release(e),
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        self.base.update_hover(event.pos);
        if event.is_button_pressed(MouseButton::Left) {
            return self.handle_mouse_drag(event.pos);
        }
        false
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if !self.base.contains_point(event.pos) {
            if self.is_active() {
                self.exit_focus(true);
            }
            return false;
        }

        {
            let mut state = self.state.lock();
            let offset = self.offset_at(&state.engine, event.pos.x);
            if state.focus.is_active() {
                state.press.count += 1;
            } else {
                state.focus = FocusState::Active;
                state.press.count = 1;
                tracing::debug!(target: targets::FIELD, "focus gained");
            }
            state.press.mouse_down = true;
            state.press.anchor = offset;
            state.engine.begin_selection(offset);
        }
        self.base.update();
        true
    }

    fn handle_mouse_drag(&mut self, pos: Point) -> bool {
        {
            let mut state = self.state.lock();
            if !(state.focus.is_active() && state.press.mouse_down) {
                return false;
            }
            let offset = self.offset_at(&state.engine, pos.x);
            state.engine.extend_selection(offset);
        }
        self.base.update();
        true
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        let was_down = {
            let mut state = self.state.lock();
            let was_down = state.press.mouse_down;
            state.press.mouse_down = false;
            if state.focus.is_active() && state.press.count == 1 && !state.engine.has_selection()
            {
                state.engine.select_all();
            }
            was_down
        };
        if was_down {
            self.base.update();
        }
        was_down
    }

    fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        let over = self.base.is_hovered() || self.base.contains_point(event.pos);
        if !over && !self.is_active() {
            return false;
        }
        if event.delta_y != 0.0 {
            let value = self.binding.step(event.delta_y, self.base.width());
            tracing::debug!(target: targets::FIELD, delta = event.delta_y, %value, "scrolled");
        }
        true
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        {
            let state = self.state.lock();
            if !state.focus.is_active() || state.press.mouse_down {
                return false;
            }
        }
        let Some(command) = EditCommand::from_key_event(event) else {
            return false;
        };
        tracing::debug!(target: targets::FIELD, key = ?event.key, ?command, "key press");

        match command {
            EditCommand::Insert(ch) => {
                let mut buf = [0u8; 4];
                let text: &str = ch.encode_utf8(&mut buf);
                self.edit(|engine| {
                    engine.insert(text);
                    true
                });
            }
            EditCommand::DeleteBackward => self.edit(EditEngine::delete_backward),
            EditCommand::DeleteForward => self.edit(EditEngine::delete_forward),
            EditCommand::CaretLeft => self.move_caret(EditEngine::move_caret_left),
            EditCommand::CaretRight => self.move_caret(EditEngine::move_caret_right),
            EditCommand::CaretHome => self.move_caret(EditEngine::move_caret_home),
            EditCommand::CaretEnd => self.move_caret(EditEngine::move_caret_end),
            EditCommand::Confirm => self.exit_focus(true),
            EditCommand::Cancel => self.exit_focus(false),
        }
        true
    }

    fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        if self.is_active() {
            tracing::debug!(target: targets::FIELD, key = ?event.key, "key release");
        }
        false
    }

    /// Apply a text edit and commit it if the text changed.
    fn edit(&mut self, op: impl FnOnce(&mut EditEngine) -> bool) {
        let changed = op(&mut self.state.lock().engine);
        if changed && !self.update_on_enter_only {
            self.commit_text();
        }
        self.base.update();
    }

    fn move_caret(&mut self, op: impl FnOnce(&mut EditEngine)) {
        op(&mut self.state.lock().engine);
        self.base.update();
    }

    /// Commit the current text. A rejected text stays in place until it is
    /// corrected or focus is left.
    fn commit_text(&self) -> Option<T> {
        let text = self.state.lock().engine.text().to_owned();
        match self.binding.commit(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::trace!(target: targets::FIELD, %err, "commit rejected");
                None
            }
        }
    }

    /// Character offset under an x position, with the text right-aligned
    /// inside the padding.
    fn offset_at(&self, engine: &EditEngine, x: f32) -> usize {
        let rect = self.base.geometry();
        let text_left = rect.right() - self.style.text_padding - engine.text_width();
        engine.hit_test(x - text_left)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Leave focus, committing pending text first when edits are only
    /// committed on enter.
    pub fn leave_focus(&mut self) {
        self.exit_focus(true);
    }

    fn exit_focus(&mut self, commit_pending: bool) {
        if !self.is_active() {
            return;
        }
        if self.update_on_enter_only && commit_pending {
            self.commit_text();
        }

        let text = self.binding.value().format_value();
        {
            let mut state = self.state.lock();
            state.focus = FocusState::Idle;
            state.press = PressTracker::default();
            state.engine.set_text(text);
            state.engine.collapse_to_end();
        }
        self.base.update();

        tracing::debug!(target: targets::FIELD, commit_pending, "focus left");
        self.editing_finished.emit(());
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the field: background, optional focus frame, caret or selection,
    /// label and right-aligned value.
    pub fn paint_field(&self, ctx: &mut PaintContext<'_>, focus_frame: bool) {
        if !self.base.is_visible() {
            return;
        }
        let rect = self.base.geometry();
        let style = &self.style;
        let name = self.binding.parameter().name();
        let state = self.state.lock();
        let engine = &state.engine;

        ctx.renderer().fill_rect(rect, style.background_color);

        if state.focus.is_active() {
            if focus_frame {
                ctx.draw_focus_indicator_styled(0.0, style.focus_color, 1.0);
            }
            let (selection_x, selection_width) =
                engine.selection_geometry(rect.width(), style.text_padding);
            let x = rect.left() + selection_x;
            if engine.has_selection() {
                ctx.renderer().fill_rect(
                    Rect::new(x, rect.top() + 1.0, selection_width, rect.height() - 2.0),
                    style.fill_color,
                );
            } else {
                ctx.renderer().draw_line(
                    Point::new(x, rect.top()),
                    Point::new(x, rect.bottom()),
                    &Stroke::new(style.text_color, 1.0),
                );
            }
        }

        let baseline = rect.top() + rect.height() / 2.0 + 4.0;
        if !name.is_empty() {
            ctx.renderer().draw_text(
                &name,
                Point::new(rect.left() + style.text_padding, baseline),
                style.text_color,
            );
        }
        ctx.renderer().draw_text(
            engine.text(),
            Point::new(
                rect.right() - style.text_padding - engine.text_width(),
                baseline,
            ),
            style.text_color,
        );
    }
}

impl<T: NumericValue> Default for NumericField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NumericValue> fmt::Debug for NumericField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("NumericField")
            .field("parameter", self.binding.parameter())
            .field("text", &state.engine.text())
            .field("selection", &state.engine.selection())
            .field("focus", &state.focus)
            .field("geometry", &self.base.geometry())
            .finish()
    }
}

static_assertions::assert_impl_all!(NumericField<f32>: Send, Sync);
