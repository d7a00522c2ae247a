//! Observable, bounded parameters.
//!
//! A [`Parameter<T>`] is a named value with a `[min, max]` range and a
//! change signal. It is a shared handle: cloning a parameter produces another
//! reference to the same underlying value, so a widget and the application
//! can both observe and mutate it.
//!
//! Every [`set`](Parameter::set) fires the change signal synchronously, even
//! when the new value equals the old one and even when the setter is also a
//! listener. Listeners that write back into the parameter must guard against
//! feedback themselves.
//!
//! The parameter does not clamp on `set`; range enforcement is the job of
//! whoever edits it.
//!
//! # Example
//!
//! ```
//! use numedit_core::Parameter;
//!
//! let gain = Parameter::new("gain", 0.5f32, 0.0, 1.0);
//! let view = gain.clone();
//!
//! gain.connect(|value| println!("gain is now {value}"));
//! view.set(0.75);
//! assert_eq!(gain.get(), 0.75);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::targets;
use crate::numeric::NumericValue;
use crate::signal::{ConnectionId, Signal};

struct ParameterInner<T> {
    name: RwLock<String>,
    value: RwLock<T>,
    range: RwLock<(T, T)>,
    changed: Signal<T>,
}

/// A shared, observable numeric value with a name and a range.
pub struct Parameter<T> {
    inner: Arc<ParameterInner<T>>,
}

impl<T: NumericValue> Parameter<T> {
    /// Create a new parameter.
    ///
    /// An inverted range is normalised by swapping its ends. The initial value
    /// is stored as given.
    pub fn new(name: impl Into<String>, value: T, min: T, max: T) -> Self {
        Self {
            inner: Arc::new(ParameterInner {
                name: RwLock::new(name.into()),
                value: RwLock::new(value),
                range: RwLock::new(ordered(min, max)),
                changed: Signal::new(),
            }),
        }
    }

    /// Create an unnamed parameter spanning the full range of `T`.
    pub fn unbounded(value: T) -> Self {
        Self::new(String::new(), value, T::LOWEST, T::HIGHEST)
    }

    /// Get the parameter name.
    pub fn name(&self) -> String {
        self.inner.name.read().clone()
    }

    /// Set the parameter name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.inner.name.write() = name.into();
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        *self.inner.value.read()
    }

    /// Set the value and notify every listener.
    pub fn set(&self, value: T) {
        *self.inner.value.write() = value;
        tracing::trace!(target: targets::PARAMETER, %value, "parameter set");
        self.inner.changed.emit(value);
    }

    /// Get the minimum.
    pub fn min(&self) -> T {
        self.inner.range.read().0
    }

    /// Get the maximum.
    pub fn max(&self) -> T {
        self.inner.range.read().1
    }

    /// Get `(min, max)`.
    pub fn range(&self) -> (T, T) {
        *self.inner.range.read()
    }

    /// Set the minimum, keeping the current maximum.
    pub fn set_min(&self, min: T) {
        let max = self.max();
        self.set_range(min, max);
    }

    /// Set the maximum, keeping the current minimum.
    pub fn set_max(&self, max: T) {
        let min = self.min();
        self.set_range(min, max);
    }

    /// Set the range. An inverted range is normalised by swapping its ends.
    pub fn set_range(&self, min: T, max: T) {
        if min > max {
            crate::numedit_warn!(%min, %max, "inverted parameter range, swapping ends");
        }
        *self.inner.range.write() = ordered(min, max);
    }

    /// Connect a listener to value changes.
    pub fn connect<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.changed.connect(listener);
        crate::numedit_trace!(?id, "parameter listener connected");
        id
    }

    /// Disconnect a listener.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        crate::numedit_trace!(?id, "parameter listener disconnected");
        self.inner.changed.disconnect(id)
    }

    /// Number of connected listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.changed.connection_count()
    }

    /// Access the change signal directly, for blocking notifications.
    pub fn changed(&self) -> &Signal<T> {
        &self.inner.changed
    }

    /// Check whether two handles refer to the same parameter.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

impl<T> Clone for Parameter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: NumericValue> Default for Parameter<T> {
    fn default() -> Self {
        Self::unbounded(T::default())
    }
}

impl<T: NumericValue> fmt::Debug for Parameter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.range();
        f.debug_struct("Parameter")
            .field("name", &self.name())
            .field("value", &self.get())
            .field("min", &min)
            .field("max", &max)
            .finish()
    }
}

static_assertions::assert_impl_all!(Parameter<f32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn test_parameter_creation() {
        let param = Parameter::new("speed", 5i32, 0, 10);
        assert_eq!(param.name(), "speed");
        assert_eq!(param.get(), 5);
        assert_eq!(param.range(), (0, 10));
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let param = Parameter::new("x", 0i32, 10, -10);
        assert_eq!(param.range(), (-10, 10));

        param.set_min(20);
        assert_eq!(param.range(), (10, 20));
    }

    #[test]
    fn test_clone_shares_value() {
        let param = Parameter::new("x", 1.0f64, 0.0, 2.0);
        let other = param.clone();
        other.set(1.5);
        assert_eq!(param.get(), 1.5);
        assert!(param.ptr_eq(&other));
        assert!(!param.ptr_eq(&Parameter::new("x", 1.0f64, 0.0, 2.0)));
    }

    #[test]
    fn test_every_set_notifies() {
        let param = Parameter::new("x", 3i32, 0, 10);
        let count = Arc::new(AtomicI32::new(0));

        let count_clone = count.clone();
        param.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        param.set(3);
        param.set(4);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_set_does_not_clamp() {
        let param = Parameter::new("x", 3i32, 0, 10);
        param.set(42);
        assert_eq!(param.get(), 42);
    }

    #[test]
    fn test_listener_sees_new_value() {
        let param = Parameter::new("x", 0u8, 0, 100);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let reader = param.clone();
        let id = param.connect(move |&value| {
            seen_clone.lock().push((value, reader.get()));
        });

        param.set(7);
        assert!(param.disconnect(id));
        param.set(8);

        assert_eq!(*seen.lock(), vec![(7, 7)]);
        assert_eq!(param.listener_count(), 0);
    }
}
