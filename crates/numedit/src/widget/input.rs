//! Input event subscriptions.
//!
//! A widget that wants pointer or keyboard input registers with the host's
//! [`InputEventSource`]. The host then routes events of that kind to the
//! widget's [`event`](super::Widget::event) method until the subscription is
//! dropped.
//!
//! [`InputRegistration`] is the per-widget bookkeeping: registering twice is
//! a no-op, unregistering something not registered is a no-op, and every
//! subscription is released when the registration is dropped.
//!
//! [`InputSubscriptions`] is a ready-made source backed by a slot map, usable
//! as the registry of a simple host loop and in tests.

use std::fmt;
use std::sync::Arc;

use numedit_core::logging::targets;
use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle for one input subscription.
    pub struct SubscriptionId;
}

/// The kinds of input a widget can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Pointer move, press, drag, release and wheel.
    Mouse,
    /// Key press and release.
    Keyboard,
}

/// A host-provided source of input events.
pub trait InputEventSource: Send + Sync {
    /// Start delivering events of `kind` to the caller.
    fn subscribe(&self, kind: InputKind) -> SubscriptionId;

    /// Stop delivering events for a subscription. Returns `false` if the
    /// subscription was unknown.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// A simple [`InputEventSource`] that only tracks who is subscribed.
#[derive(Default)]
pub struct InputSubscriptions {
    entries: Mutex<SlotMap<SubscriptionId, InputKind>>,
}

impl InputSubscriptions {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions of `kind`.
    pub fn subscriber_count(&self, kind: InputKind) -> usize {
        self.entries.lock().values().filter(|&&k| k == kind).count()
    }

    /// Check whether a subscription is live.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.entries.lock().contains_key(id)
    }
}

impl InputEventSource for InputSubscriptions {
    fn subscribe(&self, kind: InputKind) -> SubscriptionId {
        self.entries.lock().insert(kind)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.entries.lock().remove(id).is_some()
    }
}

impl fmt::Debug for InputSubscriptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSubscriptions")
            .field("mouse", &self.subscriber_count(InputKind::Mouse))
            .field("keyboard", &self.subscriber_count(InputKind::Keyboard))
            .finish()
    }
}

/// Whether a widget wants one kind of input, and its live subscription.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    wanted: bool,
    id: Option<SubscriptionId>,
}

/// A widget's subscriptions with one input source.
///
/// Registration records the wish to receive a kind of input. The actual
/// subscription is taken as soon as a source is attached, so a widget can be
/// set up before or after it is given a source.
#[derive(Default)]
pub struct InputRegistration {
    source: Option<Arc<dyn InputEventSource>>,
    mouse: Slot,
    keyboard: Slot,
}

impl InputRegistration {
    /// Create a registration with no source attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an input source, moving every wanted subscription from the
    /// previous source to the new one.
    pub fn set_source(&mut self, source: Option<Arc<dyn InputEventSource>>) {
        self.release(InputKind::Mouse);
        self.release(InputKind::Keyboard);
        self.source = source;
        self.acquire(InputKind::Mouse);
        self.acquire(InputKind::Keyboard);
    }

    /// Check whether a source is attached.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Ask for events of `kind`. Registering twice is a no-op.
    pub fn register(&mut self, kind: InputKind) {
        self.slot_mut(kind).wanted = true;
        self.acquire(kind);
    }

    /// Stop asking for events of `kind`. Unregistering something not
    /// registered is a no-op.
    pub fn unregister(&mut self, kind: InputKind) {
        self.slot_mut(kind).wanted = false;
        self.release(kind);
    }

    /// Stop asking for any events.
    pub fn unregister_all(&mut self) {
        self.unregister(InputKind::Mouse);
        self.unregister(InputKind::Keyboard);
    }

    /// Check whether events of `kind` are wanted.
    pub fn is_registered(&self, kind: InputKind) -> bool {
        self.slot(kind).wanted
    }

    /// Check whether a live subscription for `kind` is held with the source.
    pub fn is_subscribed(&self, kind: InputKind) -> bool {
        self.slot(kind).id.is_some()
    }

    fn slot(&self, kind: InputKind) -> &Slot {
        match kind {
            InputKind::Mouse => &self.mouse,
            InputKind::Keyboard => &self.keyboard,
        }
    }

    fn slot_mut(&mut self, kind: InputKind) -> &mut Slot {
        match kind {
            InputKind::Mouse => &mut self.mouse,
            InputKind::Keyboard => &mut self.keyboard,
        }
    }

    fn acquire(&mut self, kind: InputKind) {
        let slot = *self.slot(kind);
        if !slot.wanted || slot.id.is_some() {
            return;
        }
        let Some(source) = &self.source else {
            tracing::trace!(target: targets::INPUT, ?kind, "no input source attached");
            return;
        };
        let id = source.subscribe(kind);
        tracing::debug!(target: targets::INPUT, ?kind, ?id, "subscribed");
        self.slot_mut(kind).id = Some(id);
    }

    fn release(&mut self, kind: InputKind) {
        let Some(id) = self.slot_mut(kind).id.take() else {
            return;
        };
        if let Some(source) = &self.source {
            source.unsubscribe(id);
            tracing::debug!(target: targets::INPUT, ?kind, ?id, "unsubscribed");
        }
    }
}

impl Drop for InputRegistration {
    fn drop(&mut self) {
        self.release(InputKind::Mouse);
        self.release(InputKind::Keyboard);
    }
}

impl fmt::Debug for InputRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputRegistration")
            .field("has_source", &self.has_source())
            .field("mouse", &self.mouse)
            .field("keyboard", &self.keyboard)
            .finish()
    }
}

static_assertions::assert_impl_all!(InputRegistration: Send, Sync);
static_assertions::assert_impl_all!(InputSubscriptions: Send, Sync);
