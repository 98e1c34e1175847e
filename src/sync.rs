//! Mutex helpers.
//!
//! Shared sinks (the buffering test sink and the logging bridge) sit behind
//! a `Mutex`. A panic while a line was being recorded must not make every
//! later write panic too, so locks recover from poison instead of
//! propagating it. The worst outcome is a missing or duplicated line.

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// Silent on recovery: the logging bridge locks through here too.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use cli_report::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
