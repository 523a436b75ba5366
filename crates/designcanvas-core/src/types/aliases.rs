//! Type aliases for shared state.
//!
//! The overlay session is driven from a single UI thread, but pieces of it
//! (the frame's drag state) are reached from event-bus handlers, which must
//! be `Send + Sync`. These aliases name the wrappers used for that.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// A thread-safe, mutex-protected wrapper for state shared with bus handlers.
///
/// Uses `parking_lot::Mutex`, which never poisons.
///
/// # Example
/// ```rust,ignore
/// let state: ThreadSafe<FrameState> = thread_safe(FrameState::default());
/// state.lock().reset();
/// ```
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A non-owning handle to [`ThreadSafe`] state, for handlers that must not
/// keep their owner alive.
pub type WeakThreadSafe<T> = Weak<Mutex<T>>;

/// Wrap a value in a [`ThreadSafe`] container.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
