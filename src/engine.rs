//! Interaction state engine.
//!
//! [`Engine`] owns the post store, the notification store and the
//! pagination controller, and exposes them to the presentation layer
//! through read accessors and a single [`Action`] dispatcher. Stores are
//! injected handles; nothing here is global.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::config::Config;
use crate::detail::PostDetailScreen;
use crate::error::FeedError;
use crate::model::{Notification, Post};
use crate::mvi::Intent;
use crate::notifications::{NotificationFilter, NotificationStore};
use crate::pagination::{LoadOutcome, PaginationController, PaginationState};
use crate::posts::{PostIntent, PostStore};
use crate::revision::Revision;
use crate::source::{DataSource, FixtureSource};

/// Everything the presentation layer can ask the engine to do.
///
/// Serialized as `{"type": "toggle_like", "id": "1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    ToggleLike { id: String },
    ToggleRepost { id: String },
    IncrementReplyCount { id: String },
    MarkRead { id: String },
    Refresh,
    LoadMore,
    /// Rate a release from the inbox. Logged only; nothing is stored.
    RateRelease { id: String, rating: u8 },
}

impl Intent for Action {}

/// Serializable view of the whole engine at one revision.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub revision: u64,
    pub posts: Vec<Post>,
    pub notifications: Vec<Notification>,
    pub page: u32,
    pub has_more: bool,
    pub is_loading: bool,
    pub is_refreshing: bool,
}

pub struct Engine {
    source: Arc<dyn DataSource>,
    posts: PostStore,
    notifications: NotificationStore,
    pagination: PaginationController,
    revision: Revision,
}

impl Engine {
    pub fn new(
        source: Arc<dyn DataSource>,
        posts: PostStore,
        notifications: NotificationStore,
        fetch_timeout: Duration,
    ) -> Self {
        let revision = Revision::new();
        let pagination =
            PaginationController::new(Arc::clone(&source), notifications.clone(), fetch_timeout)
                .with_revision(revision.clone());

        Self {
            source,
            posts,
            notifications,
            pagination,
            revision,
        }
    }

    /// Engine over the fixture source, with empty stores.
    pub fn from_config(config: &Config) -> Self {
        let source = Arc::new(FixtureSource::from_config(&config.source));
        Self::new(
            source,
            PostStore::default(),
            NotificationStore::new(),
            Duration::from_millis(config.pagination.fetch_timeout_ms),
        )
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    pub fn view(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.notifications.view(filter)
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        self.revision.current()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let pagination = self.pagination.state();
        FeedSnapshot {
            revision: self.revision.current(),
            posts: self.posts.get_all(),
            notifications: self.notifications.view(NotificationFilter::All),
            page: pagination.page,
            has_more: pagination.has_more,
            is_loading: pagination.is_loading(),
            is_refreshing: pagination.is_refreshing(),
        }
    }

    /// Replace the post store with the source's initial posts.
    pub async fn load_initial_posts(&self) -> Result<usize, FeedError> {
        let posts = self.source.fetch_initial_posts().await.map_err(|err| {
            tracing::warn!(source = self.source.name(), error = %err, "Failed to load posts");
            err
        })?;
        let count = posts.len();
        self.posts.replace_all(posts);
        self.revision.bump();
        tracing::info!(count, "Initial posts loaded");
        Ok(count)
    }

    /// Open the detail screen for a serialized post.
    pub async fn open_post(&self, payload: &str) -> PostDetailScreen {
        PostDetailScreen::open(self.source.as_ref(), payload).await
    }

    pub async fn dispatch(&self, action: Action) -> Result<(), FeedError> {
        tracing::debug!(?action, "Dispatching action");

        match action {
            Action::ToggleLike { id } => self.apply_post(&id, PostIntent::ToggleLike),
            Action::ToggleRepost { id } => self.apply_post(&id, PostIntent::ToggleRepost),
            Action::IncrementReplyCount { id } => {
                self.apply_post(&id, PostIntent::IncrementReplyCount)
            }
            Action::MarkRead { id } => {
                if self.notifications.mark_read(&id) {
                    self.revision.bump();
                }
            }
            Action::Refresh => {
                let outcome = self.pagination.refresh().await?;
                log_outcome("refresh", outcome);
            }
            Action::LoadMore => {
                let outcome = self.pagination.load_more().await?;
                log_outcome("load_more", outcome);
            }
            Action::RateRelease { id, rating } => rate_release(&self.notifications, &id, rating),
        }
        Ok(())
    }

    fn apply_post(&self, id: &str, intent: PostIntent) {
        if self.posts.apply(id, intent) {
            self.revision.bump();
        }
    }
}

fn log_outcome(action: &'static str, outcome: LoadOutcome) {
    match outcome {
        LoadOutcome::Skipped | LoadOutcome::Superseded => {
            tracing::debug!(action, ?outcome, "Pagination request had no effect")
        }
        LoadOutcome::Applied { .. } | LoadOutcome::Exhausted { .. } => {
            tracing::debug!(action, ?outcome, "Pagination request completed")
        }
    }
}

fn rate_release(notifications: &NotificationStore, id: &str, rating: u8) {
    if !(1..=5).contains(&rating) {
        tracing::warn!(notification_id = %id, rating, "Release rating must be 1-5, ignored");
        return;
    }
    match notifications.get(id).as_ref().and_then(|n| n.release()) {
        Some(release) => tracing::info!(
            notification_id = %id,
            album = %release.album_name,
            rating,
            "Release rated"
        ),
        None => tracing::debug!(notification_id = %id, "Rated notification is not a release"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_use_tagged_snake_case() {
        let action: Action = serde_json::from_str(r#"{"type":"mark_read","id":"4"}"#).unwrap();
        assert_eq!(
            action,
            Action::MarkRead {
                id: "4".to_string()
            }
        );

        let action: Action = serde_json::from_str(r#"{"type":"load_more"}"#).unwrap();
        assert_eq!(action, Action::LoadMore);

        assert!(serde_json::from_str::<Action>(r#"{"type":"delete_post","id":"1"}"#).is_err());
    }
}
