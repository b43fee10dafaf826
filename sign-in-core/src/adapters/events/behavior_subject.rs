//! Push channel that always holds a current value.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::registry::{deliver, Handler, HandlerRegistry, Subscription};
use crate::ports::Observer;

/// Channel with a current value that is replayed to new subscribers.
///
/// Unlike [`super::Subject`], a value is observable from construction on:
/// `value()` never blocks on a first emission, and `subscribe` immediately
/// invokes the handler with the current value before any later emission.
///
/// `subscribe` and `next` are serialized by a gate: a subscriber either
/// gets a value through its replay or through the notification that
/// follows it, never both, and never a replay older than a value it has
/// already seen. The replay runs while the gate is held, so a handler must
/// not call `next` or `subscribe` on the same subject during its replay.
pub struct BehaviorSubject<T> {
    handlers: Arc<HandlerRegistry<T>>,
    value: Arc<RwLock<T>>,
    gate: Arc<Mutex<()>>,
}

impl<T> BehaviorSubject<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a subject holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            handlers: HandlerRegistry::new(),
            value: Arc::new(RwLock::new(initial)),
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a copy of the current value.
    pub fn value(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Registers a handler and replays the current value to it.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let handler: Handler<T> = Arc::new(handler);
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        let subscription = self.handlers.register(Arc::clone(&handler));
        let current = self.value();
        deliver(&handler, &current);
        subscription
    }

    /// Replaces the current value and pushes it to all subscribers.
    ///
    /// A handler that panics does not stop delivery to the handlers after it.
    pub fn next(&self, value: T) {
        let recipients = {
            let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
            *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.clone();
            self.handlers.snapshot()
        };
        for handler in &recipients {
            deliver(handler, &value);
        }
    }

    /// Returns the number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<T> Clone for BehaviorSubject<T> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            value: Arc::clone(&self.value),
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BehaviorSubject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("BehaviorSubject")
            .field("value", &*value)
            .finish_non_exhaustive()
    }
}

impl<T> Observer<T> for BehaviorSubject<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn next(&self, value: T) {
        BehaviorSubject::next(self, value);
    }
}
