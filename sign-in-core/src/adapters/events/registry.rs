//! Handler registry shared by the subject types.
//!
//! Handlers are invoked from a snapshot taken under the read lock, so a
//! handler may subscribe or unsubscribe while being notified without
//! deadlocking. A panicking handler is logged and skipped; the remaining
//! handlers still receive the value.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

pub(super) type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

pub(super) struct HandlerRegistry<T> {
    next_id: AtomicU64,
    handlers: RwLock<Vec<(u64, Handler<T>)>>,
}

impl<T: 'static> HandlerRegistry<T> {
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicU64::new(0),
            handlers: RwLock::new(Vec::new()),
        })
    }

    /// Appends a handler; it runs after every handler registered before it.
    pub(super) fn register(self: &Arc<Self>, handler: Handler<T>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));

        let registry: Arc<dyn Unsubscribe> = Arc::clone(self) as Arc<dyn Unsubscribe>;
        Subscription {
            id,
            registry: Arc::downgrade(&registry),
        }
    }

    /// Invokes every currently registered handler, in registration order.
    pub(super) fn notify(&self, value: &T) {
        for handler in &self.snapshot() {
            deliver(handler, value);
        }
    }

    /// Returns the registered handlers, in registration order.
    pub(super) fn snapshot(&self) -> Vec<Handler<T>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Runs one handler, containing a panic to that handler.
pub(super) fn deliver<T>(handler: &Handler<T>, value: &T) {
    if catch_unwind(AssertUnwindSafe(|| handler(value))).is_err() {
        tracing::error!("Subscriber panicked while handling a value");
    }
}

trait Unsubscribe: Send + Sync {
    fn remove(&self, id: u64) -> bool;
    fn contains(&self, id: u64) -> bool;
}

impl<T: 'static> Unsubscribe for HandlerRegistry<T> {
    fn remove(&self, id: u64) -> bool {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|(handler_id, _)| *handler_id == id)
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping it leaves the handler registered; call [`Subscription::unsubscribe`]
/// to stop receiving values.
pub struct Subscription {
    id: u64,
    registry: Weak<dyn Unsubscribe>,
}

impl Subscription {
    /// Removes the handler. Returns false if it was already removed or the
    /// channel no longer exists.
    pub fn unsubscribe(self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.remove(self.id))
            .unwrap_or(false)
    }

    /// Returns true while the handler is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.contains(self.id))
            .unwrap_or(false)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
