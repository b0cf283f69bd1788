//! Data source abstraction.
//!
//! The engine never talks to a backend directly; it asks a [`DataSource`]
//! for posts, notification pages and replies. The in-memory
//! [`FixtureSource`] simulates latency and is swappable for a networked
//! implementation without touching the stores or the pagination
//! controller.

mod fixture;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Notification, Post, Reply};

pub use fixture::FixtureSource;

/// Errors a data source can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    /// The request did not settle in time.
    #[error("Data source timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// The source could not serve the request.
    #[error("Data source '{source_name}' unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
}

/// Result of fetching one notification page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageFetch {
    /// The page exists; its items in arrival order.
    Items(Vec<Notification>),
    /// The requested page is past the end of the feed.
    Exhausted,
}

/// Asynchronous provider of feed data.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the initial set of posts for the home feed.
    async fn fetch_initial_posts(&self) -> Result<Vec<Post>, DataSourceError>;

    /// Fetch notification page `page` (1-based).
    async fn fetch_notification_page(&self, page: u32) -> Result<PageFetch, DataSourceError>;

    /// Fetch replies for the post detail screen.
    ///
    /// Default implementation returns no replies.
    async fn fetch_replies(&self, _post_id: &str) -> Result<Vec<Reply>, DataSourceError> {
        Ok(Vec::new())
    }
}
