//! Process-wide container initialization
//!
//! Containers may only be created while a session is live. The session is a
//! scoped guard: dropping it (on success or on an early `?` return) tears the
//! initialization down again.

use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE_SESSIONS: AtomicUsize = AtomicUsize::new(0);

/// Guard for the container initialization
#[derive(Debug)]
pub struct ContainerSession {
    _private: (),
}

impl ContainerSession {
    /// Initialize the document container for this process
    pub fn initialize() -> Self {
        let previous = LIVE_SESSIONS.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            log::info!("Document container initialized");
        }
        Self { _private: () }
    }

    /// Whether any session is currently live
    pub fn is_initialized() -> bool {
        LIVE_SESSIONS.load(Ordering::SeqCst) > 0
    }

    /// End this session explicitly
    pub fn terminate(self) {
        drop(self);
    }
}

impl Drop for ContainerSession {
    fn drop(&mut self) {
        let previous = LIVE_SESSIONS.fetch_sub(1, Ordering::SeqCst);
        if previous == 1 {
            log::info!("Document container terminated");
        }
    }
}
