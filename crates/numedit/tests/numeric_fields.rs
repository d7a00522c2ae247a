//! Integration tests driving whole widgets through events.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use numedit::prelude::*;
use numedit::render::{DisplayList, DrawCommand, MonospaceMetrics, Point};
use numedit::widget::{
    InputEventSource, InputKind, InputSubscriptions, Key, KeyPressEvent, KeyReleaseEvent,
    KeyboardModifiers, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, Selection,
    WheelEvent,
};
use parking_lot::Mutex;

const WIDTH: f32 = 100.0;
const HEIGHT: f32 = 18.0;
const ADVANCE: f32 = 10.0;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn metrics() -> Arc<MonospaceMetrics> {
    Arc::new(MonospaceMetrics::new(ADVANCE))
}

/// X coordinate of the gap after character `offset` of right-aligned `text`.
fn x_at(text: &str, offset: usize) -> f32 {
    let text_left = WIDTH - 4.0 - text.chars().count() as f32 * ADVANCE;
    text_left + offset as f32 * ADVANCE
}

fn press<W: Widget>(widget: &mut W, x: f32) -> bool {
    widget.event(&mut WidgetEvent::MousePress(MousePressEvent::left(Point::new(
        x,
        HEIGHT / 2.0,
    ))))
}

fn drag<W: Widget>(widget: &mut W, x: f32) -> bool {
    widget.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::drag(Point::new(
        x,
        HEIGHT / 2.0,
    ))))
}

fn release<W: Widget>(widget: &mut W, x: f32) -> bool {
    widget.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::left(
        Point::new(x, HEIGHT / 2.0),
    )))
}

fn key<W: Widget>(widget: &mut W, key: Key) -> bool {
    widget.event(&mut WidgetEvent::KeyPress(KeyPressEvent::key(key)))
}

fn scroll<W: Widget>(widget: &mut W, delta: f32) -> bool {
    widget.event(&mut WidgetEvent::Wheel(WheelEvent::vertical(
        Point::new(WIDTH / 2.0, HEIGHT / 2.0),
        delta,
    )))
}

#[test]
fn test_click_then_type_replaces_value() {
    setup();
    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup_with("value", 50i32, 0, 100, WIDTH, HEIGHT);

    let end = x_at("50", 2);
    assert!(press(&mut edit, end));
    assert!(release(&mut edit, end));
    assert_eq!(edit.selection(), Selection::new(0, 2));

    assert!(key(&mut edit, Key::Digit7));
    assert_eq!(edit.text(), "7");
    assert_eq!(edit.value(), 7);
}

#[test]
fn test_drag_then_delete_keeps_value() {
    setup();
    let mut field = InputField::new().with_measure(metrics());
    field.setup_with("gain", 0.0f32, -1.0, 1.0, WIDTH, HEIGHT);
    assert_eq!(field.text(), "0");

    press(&mut field, x_at("0", 0));
    drag(&mut field, x_at("0", 1));
    release(&mut field, x_at("0", 1));
    assert_eq!(field.selection(), Selection::new(0, 1));

    assert!(key(&mut field, Key::Delete));
    assert_eq!(field.text(), "");
    assert_eq!(field.value(), 0.0);
    assert!(field.is_active());
}

#[test]
fn test_scroll_steps_and_clamps() {
    setup();
    let mut edit = NumEdit::<i32>::new();
    edit.setup_with("steps", 9, 0, 10, 40.0, HEIGHT);

    edit.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::hover(Point::new(
        20.0, 9.0,
    ))));
    let scroll_at = |edit: &mut NumEdit<i32>, delta: f32| {
        edit.event(&mut WidgetEvent::Wheel(WheelEvent::vertical(
            Point::new(20.0, 9.0),
            delta,
        )))
    };

    assert!(scroll_at(&mut edit, 1.0));
    assert_eq!(edit.value(), 10);
    assert!(scroll_at(&mut edit, 1.0));
    assert_eq!(edit.value(), 10);
    assert_eq!(edit.text(), "10");

    assert!(scroll_at(&mut edit, -2.0));
    assert_eq!(edit.value(), 9);
}

#[test]
fn test_scroll_while_focused_outside() {
    setup();
    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup_with("far", 0.5f64, 0.0, 1.0, WIDTH, HEIGHT);

    let far = |delta: f32| {
        WidgetEvent::Wheel(WheelEvent::vertical(Point::new(900.0, 900.0), delta))
    };
    assert!(!edit.event(&mut far(1.0)));

    press(&mut edit, x_at("0.5", 3));
    release(&mut edit, x_at("0.5", 3));
    assert!(edit.event(&mut far(1.0)));
    assert!(edit.value() > 0.5);
    assert_eq!(edit.text(), edit.value().to_string());
}

#[test]
fn test_idle_text_follows_value_rewritten_by_earlier_listener() {
    setup();
    let parameter = Parameter::new("even", 2i32, 0, 10);
    let writer = parameter.clone();
    parameter.connect(move |&value| {
        if value % 2 != 0 {
            writer.set(value + 1);
        }
    });

    let mut edit = NumEdit::bound(parameter.clone(), 40.0, HEIGHT);
    assert!(edit.event(&mut WidgetEvent::Wheel(WheelEvent::vertical(
        Point::new(20.0, 9.0),
        1.0,
    ))));

    assert!(!edit.is_active());
    assert_eq!(parameter.get(), 4);
    assert_eq!(edit.text(), parameter.get().to_string());
}

#[test]
fn test_typed_value_rewritten_by_earlier_listener() {
    setup();
    let parameter = Parameter::new("even", 2i32, 0, 10);
    let writer = parameter.clone();
    parameter.connect(move |&value| {
        if value % 2 != 0 {
            writer.set(value + 1);
        }
    });

    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup(parameter.clone(), WIDTH, HEIGHT);
    let end = x_at("2", 1);
    press(&mut edit, end);
    release(&mut edit, end);
    key(&mut edit, Key::Digit5);

    assert_eq!(parameter.get(), 6);
    assert_eq!(edit.text(), "6");

    edit.leave_focus();
    assert_eq!(edit.text(), "6");
}

#[test]
fn test_external_set_moves_caret_to_end() {
    setup();
    let parameter = Parameter::new("shared", 1234i32, 0, 100_000);
    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup(parameter.clone(), WIDTH, HEIGHT);

    press(&mut edit, x_at("1234", 1));
    drag(&mut edit, x_at("1234", 3));
    assert_eq!(edit.selection(), Selection::new(1, 3));

    parameter.set(99_999);
    assert_eq!(edit.text(), "99999");
    assert_eq!(edit.selection(), Selection::caret(5));
    assert!(edit.is_active());
}

#[test]
fn test_two_widgets_share_a_parameter() {
    setup();
    let parameter = Parameter::new("shared", 10i32, 0, 100);
    let mut first = InputField::new().with_measure(metrics());
    first.setup(parameter.clone(), WIDTH, HEIGHT);
    let second = NumEdit::bound(parameter.clone(), WIDTH, HEIGHT);

    press(&mut first, x_at("10", 2));
    release(&mut first, x_at("10", 2));
    key(&mut first, Key::Digit4);

    assert_eq!(parameter.get(), 4);
    assert_eq!(first.text(), "4");
    assert_eq!(second.text(), "4");
}

#[test]
fn test_self_commit_keeps_typed_text() {
    setup();
    let mut field = InputField::new().with_measure(metrics());
    field.setup_with("x", 0i32, -100, 100, WIDTH, HEIGHT);

    press(&mut field, x_at("0", 1));
    release(&mut field, x_at("0", 1));
    key(&mut field, Key::Digit5);
    key(&mut field, Key::Period);
    assert_eq!(field.text(), "5.");
    assert_eq!(field.value(), 5);

    key(&mut field, Key::Enter);
    assert_eq!(field.text(), "5");
}

#[test]
fn test_value_listeners_see_every_commit() {
    setup();
    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup_with("n", 0u16, 0, 1000, WIDTH, HEIGHT);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let id = edit.connect_value_changed(move |&value| seen_clone.lock().push(value));

    press(&mut edit, x_at("0", 1));
    release(&mut edit, x_at("0", 1));
    key(&mut edit, Key::Digit1);
    key(&mut edit, Key::Digit2);
    key(&mut edit, Key::Backspace);
    key(&mut edit, Key::Backspace);
    key(&mut edit, Key::Backspace);

    assert_eq!(*seen.lock(), vec![1, 12, 1]);
    assert!(edit.disconnect_value_changed(id));
    assert!(!edit.disconnect_value_changed(id));
}

#[test]
fn test_caret_navigation_and_insert() {
    setup();
    let mut field = InputField::new().with_measure(metrics());
    field.setup_with("x", 125i32, 0, 1000, WIDTH, HEIGHT);

    press(&mut field, x_at("125", 3));
    drag(&mut field, x_at("125", 3));
    release(&mut field, x_at("125", 3));
    // The drag moved nothing, so the release selects everything.
    assert_eq!(field.selection(), Selection::new(0, 3));

    key(&mut field, Key::ArrowLeft);
    assert_eq!(field.selection(), Selection::caret(0));
    key(&mut field, Key::End);
    key(&mut field, Key::ArrowLeft);
    key(&mut field, Key::Digit0);
    assert_eq!(field.text(), "1205");
    assert_eq!(field.value(), 1000);

    key(&mut field, Key::Home);
    key(&mut field, Key::Delete);
    assert_eq!(field.text(), "205");
    assert_eq!(field.value(), 205);
}

#[test]
fn test_escape_and_editing_finished() {
    setup();
    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup_with("x", 3i8, -5, 5, WIDTH, HEIGHT);

    let finished = Arc::new(AtomicUsize::new(0));
    let finished_clone = finished.clone();
    edit.editing_finished().connect(move |_| {
        finished_clone.fetch_add(1, Ordering::SeqCst);
    });

    press(&mut edit, x_at("3", 1));
    release(&mut edit, x_at("3", 1));
    key(&mut edit, Key::Minus);
    key(&mut edit, Key::Digit4);
    assert_eq!(edit.value(), -4);

    assert!(key(&mut edit, Key::Escape));
    assert!(!edit.is_active());
    assert_eq!(edit.text(), "-4");
    assert_eq!(finished.load(Ordering::SeqCst), 1);

    // Leaving focus again while idle does nothing.
    edit.leave_focus();
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

#[test]
fn test_key_release_is_not_consumed() {
    setup();
    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup_with("x", 1i32, 0, 9, WIDTH, HEIGHT);
    press(&mut edit, x_at("1", 1));
    release(&mut edit, x_at("1", 1));

    let mut event = WidgetEvent::KeyRelease(KeyReleaseEvent::new(
        Key::Digit1,
        KeyboardModifiers::NONE,
    ));
    assert!(!edit.event(&mut event));
    assert!(!event.is_accepted());
}

#[test]
fn test_input_subscriptions_follow_lifecycle() {
    setup();
    let input = Arc::new(InputSubscriptions::new());
    let source: Arc<dyn InputEventSource> = input.clone();

    let mut edit = NumEdit::<f32>::new().with_input_source(source.clone());
    assert_eq!(input.subscriber_count(InputKind::Mouse), 0);

    edit.setup_with("x", 0.0, 0.0, 1.0, WIDTH, HEIGHT);
    edit.setup_with("y", 0.0, 0.0, 1.0, WIDTH, HEIGHT);
    assert_eq!(input.subscriber_count(InputKind::Mouse), 1);
    assert_eq!(input.subscriber_count(InputKind::Keyboard), 1);

    let other = InputField::<u32>::new().with_input_source(source);
    drop(other);
    assert_eq!(input.subscriber_count(InputKind::Mouse), 1);

    edit.field_mut().unregister_key_events();
    assert_eq!(input.subscriber_count(InputKind::Keyboard), 0);

    drop(edit);
    assert_eq!(input.subscriber_count(InputKind::Mouse), 0);
}

#[test]
fn test_drop_disconnects_listener() {
    setup();
    let parameter = Parameter::new("x", 1i32, 0, 10);
    let edit = InputField::bound(parameter.clone(), WIDTH, HEIGHT);
    assert_eq!(parameter.listener_count(), 1);

    drop(edit);
    assert_eq!(parameter.listener_count(), 0);
    parameter.set(2);
}

#[test]
fn test_external_change_requests_repaint() {
    setup();
    let parameter = Parameter::new("x", 1i32, 0, 10);
    let edit = NumEdit::bound(parameter.clone(), WIDTH, HEIGHT);

    let mut list = DisplayList::new();
    edit.paint_into(&mut list);
    assert!(!edit.needs_repaint());

    parameter.set(3);
    assert!(edit.needs_repaint());

    list.clear();
    edit.paint_into(&mut list);
    assert!(list.commands().iter().any(|command| matches!(
        command,
        DrawCommand::Text { text, .. } if text == "3"
    )));
}

#[test]
fn test_hidden_widget_ignores_presses() {
    setup();
    let mut edit = NumEdit::new().with_measure(metrics());
    edit.setup_with("x", 1i32, 0, 10, WIDTH, HEIGHT);
    edit.set_visible(false);

    assert!(!press(&mut edit, x_at("1", 1)));
    assert!(!edit.is_active());
    assert!(!scroll(&mut edit, 1.0));
    assert_eq!(edit.value(), 1);
}
