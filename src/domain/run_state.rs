//! Single-flight run state
//!
//! One busy flag shared by every invocation in the process. A trigger that
//! arrives while busy is dropped, never queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared busy flag
#[derive(Debug, Clone, Default)]
pub struct RunState {
    busy: Arc<AtomicBool>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the flag. Returns `None` (and changes nothing) when busy.
    pub fn try_acquire(&self) -> Option<RunGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunGuard {
                busy: Arc::clone(&self.busy),
            })
    }
}

/// Held for the lifetime of one invocation; clears the flag on drop.
#[derive(Debug)]
#[must_use = "dropping the guard immediately releases the run state"]
pub struct RunGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
