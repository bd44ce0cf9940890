//! Process-wide serialisation of DES primitive initialisation
//!
//! DES engines may build global tables inside their `init` routine and
//! are not required to be thread-safe while doing so. Every call into a
//! primitive's `init` runs while holding [`DesInitGuard`]. Keying and the
//! block transforms never take it.

use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Constructed exactly once, on first use, even under concurrent first touches
static DES_INIT_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Scoped hold on the process-wide DES initialisation lock
///
/// The lock is released when the guard goes out of scope, on every exit
/// path including early returns and unwinding.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct DesInitGuard {
    _lock: MutexGuard<'static, ()>,
}

impl DesInitGuard {
    /// Block until the initialisation lock is held
    pub fn acquire() -> Self {
        // The mutex protects no data, so a panic in a previous holder
        // leaves nothing inconsistent behind.
        let lock = DES_INIT_MUTEX
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Self { _lock: lock }
    }
}

/// Run `f` while holding the initialisation lock
pub fn with_des_init_guard<R>(f: impl FnOnce() -> R) -> R {
    let _guard = DesInitGuard::acquire();
    f()
}
