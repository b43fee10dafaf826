//! Multi-subscriber push channel with a last-value cache.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::registry::{Handler, HandlerRegistry, Subscription};
use crate::ports::Observer;

/// Push channel delivering each value to every current subscriber.
///
/// # Delivery
///
/// - `next` notifies handlers synchronously, in registration order
/// - Handlers only see values emitted after they subscribed (no replay)
/// - The last emitted value is cached and readable through [`Subject::last`]
///
/// Clones share the same subscribers and cache.
pub struct Subject<T> {
    handlers: Arc<HandlerRegistry<T>>,
    last: Arc<RwLock<Option<T>>>,
}

impl<T> Subject<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a subject with no subscribers and nothing cached.
    pub fn new() -> Self {
        Self {
            handlers: HandlerRegistry::new(),
            last: Arc::new(RwLock::new(None)),
        }
    }

    /// Registers a handler for every subsequent emission.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let handler: Handler<T> = Arc::new(handler);
        self.handlers.register(handler)
    }

    /// Caches `value` and pushes it to all current subscribers.
    ///
    /// A handler that panics does not stop delivery to the handlers after it.
    pub fn next(&self, value: T) {
        *self.last.write().unwrap_or_else(PoisonError::into_inner) = Some(value.clone());
        self.handlers.notify(&value);
    }

    /// Returns the most recently emitted value.
    pub fn last(&self) -> Option<T> {
        self.last
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<T> Default for Subject<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            last: Arc::clone(&self.last),
        }
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject").finish_non_exhaustive()
    }
}

impl<T> Observer<T> for Subject<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn next(&self, value: T) {
        Subject::next(self, value);
    }
}
