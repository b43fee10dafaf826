//! Notification channel adapters.
//!
//! In-process, synchronous push channels implementing the `Observer` port:
//!
//! - `Subject` - Multi-subscriber channel caching its last value (no replay)
//! - `BehaviorSubject` - Channel with a current value replayed on subscribe
//! - `Subscription` - Handle removing a handler from either channel

mod behavior_subject;
mod registry;
mod subject;

pub use behavior_subject::BehaviorSubject;
pub use registry::Subscription;
pub use subject::Subject;
