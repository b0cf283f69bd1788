//! Change notification for the presentation layer.

use std::sync::Arc;

use tokio::sync::watch;

/// Monotonic revision counter shared by everything that mutates visible state.
///
/// The presentation layer subscribes and re-reads the stores whenever the
/// value moves. No-ops do not bump it.
#[derive(Clone)]
pub struct Revision {
    tx: Arc<watch::Sender<u64>>,
}

impl Revision {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn bump(&self) {
        self.tx.send_modify(|rev| *rev += 1);
    }

    pub fn current(&self) -> u64 {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::new()
    }
}
