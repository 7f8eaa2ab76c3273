//! Swappable handle on the current [`Corrector`].
//!
//! Requests take a snapshot (an `Arc` clone, the only moment the lock is
//! held) and run against it without further synchronization. A rebuilt
//! corrector is published as a whole; requests already running keep the
//! snapshot they started with.

use crate::corrector::{CorrectionResponse, Corrector};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedCorrector {
    current: Arc<RwLock<Arc<Corrector>>>,
}

impl SharedCorrector {
    pub fn new(corrector: Corrector) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(corrector))),
        }
    }

    pub fn snapshot(&self) -> Arc<Corrector> {
        Arc::clone(&self.current.read())
    }

    /// Replace the current corrector, returning the one it replaced.
    pub fn publish(&self, corrector: Corrector) -> Arc<Corrector> {
        let replacement = Arc::new(corrector);
        let previous = std::mem::replace(&mut *self.current.write(), replacement);
        log::info!(
            "Published corrector snapshot ({} words)",
            self.current.read().model().vocabulary_len()
        );
        previous
    }

    pub fn respond(&self, input: &str) -> CorrectionResponse {
        self.snapshot().respond(input)
    }
}
