//! Callback handles shared between components and their hosts.
//!
//! ## Usage
//!
//! Store a [`CallbackWith`] in component configuration and invoke it whenever
//! the component publishes a notification.

use std::sync::Arc;

/// Stable, comparable slot handle for any shared callable trait object.
///
/// `Slot` compares by identity (`Arc::ptr_eq`) so it can be used in component
/// configuration without forcing deep closure comparisons.
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Create a slot from a shared callable trait object.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Read the current callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// This is useful for value-change handlers and value formatters.
pub struct CallbackWith<T, R = ()> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        let handler = self.slot.shared();
        handler(value)
    }
}

impl<T> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}
