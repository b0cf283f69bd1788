//! Canonical post list.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::Post;
use crate::mvi::Reducer;

use super::intent::PostIntent;
use super::reducer::PostReducer;

/// Shared handle to the canonical post list.
///
/// Clones share the same list. Writes are synchronous and visible to the
/// very next read.
#[derive(Clone, Default)]
pub struct PostStore {
    inner: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(posts)),
        }
    }

    /// Snapshot of every post in feed order.
    pub fn get_all(&self) -> Vec<Post> {
        self.inner.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<Post> {
        self.inner.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Install a fresh post list from the data source.
    pub fn replace_all(&self, posts: Vec<Post>) {
        *self.inner.write() = posts;
    }

    /// Run `mutator` on the post with `id`.
    ///
    /// Returns `false` and does nothing when the id is unknown.
    pub fn update<F>(&self, id: &str, mutator: F) -> bool
    where
        F: FnOnce(Post) -> Post,
    {
        let mut posts = self.inner.write();
        let Some(slot) = posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "Post not found, update ignored");
            return false;
        };
        *slot = mutator(std::mem::take(slot));
        true
    }

    /// Apply a [`PostIntent`] to the post with `id`.
    pub fn apply(&self, id: &str, intent: PostIntent) -> bool {
        let applied = self.update(id, |post| PostReducer::reduce(post, intent));
        if applied {
            tracing::debug!(post_id = %id, ?intent, "Post intent applied");
        }
        applied
    }
}
