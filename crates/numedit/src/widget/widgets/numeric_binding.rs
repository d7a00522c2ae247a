//! Binding between edited text and a numeric parameter.
//!
//! [`NumericBinding`] validates and commits text, applies scroll steps and
//! range changes, and owns the widget's value-change listener. Every write to
//! the parameter fires its change signal synchronously, including writes the
//! binding makes itself. The binding records the value each commit writes so
//! its listener can report that emit as [`ValueOrigin::Internal`] and the
//! widget does not rebuild the text the user is typing.
//!
//! Other listeners may write the parameter while an emit is in flight, so
//! emits can arrive nested and out of order. An external reaction is always
//! handed the parameter's current value, never the possibly stale emitted one.

use std::fmt;
use std::sync::Arc;

use numedit_core::logging::targets;
use numedit_core::{ConnectionId, NumericValue, Parameter, ParseError};
use parking_lot::Mutex;

/// Where a value change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueOrigin {
    /// Committed from the widget's own text.
    Internal,
    /// Set by anything else: application code, another widget, a scroll step.
    External,
}

/// Connects a parameter to a numeric field.
pub struct NumericBinding<T: NumericValue> {
    parameter: Parameter<T>,
    /// Value written by the commit in progress, if any.
    pending_commit: Arc<Mutex<Option<T>>>,
    connection: Option<ConnectionId>,
}

impl<T: NumericValue> NumericBinding<T> {
    /// Bind to `parameter`. No listener is connected until
    /// [`bind`](Self::bind) is called.
    pub fn new(parameter: Parameter<T>) -> Self {
        Self {
            parameter,
            pending_commit: Arc::new(Mutex::new(None)),
            connection: None,
        }
    }

    /// Get the bound parameter.
    pub fn parameter(&self) -> &Parameter<T> {
        &self.parameter
    }

    /// Get the current value.
    pub fn value(&self) -> T {
        self.parameter.get()
    }

    /// Get the minimum.
    pub fn min(&self) -> T {
        self.parameter.min()
    }

    /// Get the maximum.
    pub fn max(&self) -> T {
        self.parameter.max()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Parse `raw` and write the clamped result as an internal change.
    ///
    /// On a parse error the parameter is left untouched.
    pub fn commit(&self, raw: &str) -> Result<T, ParseError> {
        let parsed = T::parse_text(raw)?;
        let (min, max) = self.parameter.range();
        let value = parsed.clamp_to(min, max);

        *self.pending_commit.lock() = Some(value);
        self.parameter.set(value);
        // A blocked signal never reaches the listener; do not leave the mark
        // for the next external change.
        *self.pending_commit.lock() = None;

        tracing::trace!(target: targets::FIELD, raw, %value, "committed");
        Ok(value)
    }

    /// Clamp `value` and write it as an external change.
    pub fn set_value(&self, value: T) {
        let (min, max) = self.parameter.range();
        self.parameter.set(value.clamp_to(min, max));
    }

    /// Apply one scroll step in the direction of `scroll_delta` and return the
    /// new value.
    ///
    /// The step is written as an external change so the displayed text
    /// follows. A zero delta changes nothing.
    pub fn step(&self, scroll_delta: f32, widget_width: f32) -> T {
        let current = self.parameter.get();
        if scroll_delta == 0.0 || scroll_delta.is_nan() {
            return current;
        }

        let (min, max) = self.parameter.range();
        let step = self.scroll_step(widget_width);
        let next = current.offset_by(step * f64::from(scroll_delta.signum()), min, max);

        tracing::trace!(target: targets::FIELD, %current, %next, step, "scroll step");
        self.parameter.set(next);
        next
    }

    /// Step size for one scroll notch at `widget_width`.
    pub fn scroll_step(&self, widget_width: f32) -> f64 {
        let (min, max) = self.parameter.range();
        T::scroll_step(min, max, widget_width)
    }

    /// Set the minimum and clamp the current value into the new range.
    pub fn set_min(&self, min: T) {
        self.parameter.set_min(min);
        self.clamp_current();
    }

    /// Set the maximum and clamp the current value into the new range.
    pub fn set_max(&self, max: T) {
        self.parameter.set_max(max);
        self.clamp_current();
    }

    /// Set both ends of the range and clamp the current value into it.
    pub fn set_range(&self, min: T, max: T) {
        self.parameter.set_range(min, max);
        self.clamp_current();
    }

    fn clamp_current(&self) {
        let current = self.parameter.get();
        let (min, max) = self.parameter.range();
        let clamped = current.clamp_to(min, max);
        if clamped != current {
            self.parameter.set(clamped);
        }
    }

    // =========================================================================
    // Listener
    // =========================================================================

    /// Connect `reaction` to value changes, replacing any earlier reaction.
    ///
    /// An internal change passes the committed value. An external change
    /// passes the parameter's value at the time the reaction runs.
    pub fn bind<F>(&mut self, reaction: F)
    where
        F: Fn(T, ValueOrigin) + Send + Sync + 'static,
    {
        self.unbind();
        let pending_commit = Arc::clone(&self.pending_commit);
        // The clone keeps the parameter alive only until `unbind`, which drop
        // always runs.
        let parameter = self.parameter.clone();
        let id = self.parameter.connect(move |&value| {
            let own_commit = {
                let mut pending = pending_commit.lock();
                if *pending == Some(value) {
                    *pending = None;
                    true
                } else {
                    false
                }
            };
            if own_commit {
                reaction(value, ValueOrigin::Internal);
            } else {
                reaction(parameter.get(), ValueOrigin::External);
            }
        });
        self.connection = Some(id);
    }

    /// Disconnect the reaction. Returns `false` if none was connected.
    pub fn unbind(&mut self) -> bool {
        match self.connection.take() {
            Some(id) => self.parameter.disconnect(id),
            None => false,
        }
    }

    /// Check whether a reaction is connected.
    pub fn is_bound(&self) -> bool {
        self.connection.is_some()
    }
}

impl<T: NumericValue> Drop for NumericBinding<T> {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl<T: NumericValue> fmt::Debug for NumericBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericBinding")
            .field("parameter", &self.parameter)
            .field("bound", &self.is_bound())
            .finish()
    }
}

static_assertions::assert_impl_all!(NumericBinding<f32>: Send, Sync);
