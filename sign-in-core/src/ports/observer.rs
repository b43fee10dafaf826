//! Observer port - push sink for terminal outcomes.

/// Receives values pushed by a producer.
///
/// `next` is synchronous: when it returns, every registered consumer has
/// been notified.
pub trait Observer<T>: Send + Sync {
    fn next(&self, value: T);
}
