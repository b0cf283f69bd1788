//! Canonical notification sequence.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::Notification;

use super::filter::NotificationFilter;

/// How a fetched page is merged into the canonical sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Discard everything and install the page (refresh, initial load).
    Replace,
    /// Concatenate the page at the end (load more). No id deduplication.
    Append,
}

/// Shared handle to the canonical notification sequence.
///
/// Filtered views are recomputed from the canonical sequence on every
/// read; nothing derived is cached, so a mutation is visible through every
/// view at once.
#[derive(Clone, Default)]
pub struct NotificationStore {
    inner: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_page(&self, items: Vec<Notification>, mode: PageMode) {
        let mut canonical = self.inner.write();
        match mode {
            PageMode::Replace => *canonical = items,
            PageMode::Append => canonical.extend(items),
        }
    }

    /// Mark a notification read.
    ///
    /// Idempotent. Returns `true` only when the flag actually flipped;
    /// unknown ids and already-read notifications are no-ops.
    pub fn mark_read(&self, id: &str) -> bool {
        let mut canonical = self.inner.write();
        match canonical.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.is_read => {
                notification.is_read = true;
                true
            }
            Some(_) => false,
            None => {
                tracing::debug!(notification_id = %id, "Notification not found, mark_read ignored");
                false
            }
        }
    }

    /// Entries of the canonical sequence that pass `filter`, in order.
    pub fn view(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.inner
            .read()
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect()
    }

    pub fn count(&self, filter: NotificationFilter) -> usize {
        self.inner.read().iter().filter(|n| filter.matches(n)).count()
    }

    pub fn unread_count(&self) -> usize {
        self.inner.read().iter().filter(|n| !n.is_read).count()
    }

    pub fn get(&self, id: &str) -> Option<Notification> {
        self.inner.read().iter().find(|n| n.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
