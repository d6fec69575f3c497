//! Liveness flag shared between a component and its spawned tasks.
//!
//! A component creates one on mount and clears it from `on_cleanup`. Tasks
//! that resolve after teardown check the flag and drop their result instead
//! of writing into disposed signals.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owner as torn down. Visible to every clone.
    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
