//! Shared test utilities and data-source doubles.

#![allow(dead_code, unused_imports)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use tunefeed::model::{Notification, Post, Reply};
use tunefeed::notifications::NotificationStore;
use tunefeed::pagination::PaginationController;
use tunefeed::posts::PostStore;
use tunefeed::source::{DataSource, DataSourceError, FixtureSource, PageFetch};
use tunefeed::Engine;

/// Generous timeout for tests that are not about timeouts.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixture-backed source that records requests and can be told to fail or stall.
pub struct TestSource {
    fixture: FixtureSource,
    latency: Duration,
    slow_pages: HashMap<u32, Duration>,
    failures_left: AtomicUsize,
    requests: Mutex<Vec<u32>>,
}

impl TestSource {
    pub fn new(latency: Duration) -> Self {
        Self {
            fixture: FixtureSource::new(Duration::ZERO, 2),
            latency,
            slow_pages: HashMap::new(),
            failures_left: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Use `latency` instead of the default for one page.
    pub fn with_slow_page(mut self, page: u32, latency: Duration) -> Self {
        self.slow_pages.insert(page, latency);
        self
    }

    /// Fail the next `count` page requests.
    pub fn fail_next(&self, count: usize) {
        self.failures_left.store(count, Ordering::SeqCst);
    }

    /// Pages requested so far, in request order.
    pub fn requests(&self) -> Vec<u32> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl DataSource for TestSource {
    fn name(&self) -> &'static str {
        "test"
    }

    async fn fetch_initial_posts(&self) -> Result<Vec<Post>, DataSourceError> {
        self.fixture.fetch_initial_posts().await
    }

    async fn fetch_notification_page(&self, page: u32) -> Result<PageFetch, DataSourceError> {
        self.requests.lock().push(page);

        let latency = self.slow_pages.get(&page).copied().unwrap_or(self.latency);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(DataSourceError::Unavailable {
                source_name: self.name().to_string(),
                reason: "injected failure".to_string(),
            });
        }

        self.fixture.fetch_notification_page(page).await
    }

    async fn fetch_replies(&self, post_id: &str) -> Result<Vec<Reply>, DataSourceError> {
        self.fixture.fetch_replies(post_id).await
    }
}

pub fn controller(source: Arc<TestSource>) -> (PaginationController, NotificationStore) {
    controller_with_timeout(source, TEST_TIMEOUT)
}

pub fn controller_with_timeout(
    source: Arc<TestSource>,
    timeout: Duration,
) -> (PaginationController, NotificationStore) {
    let store = NotificationStore::new();
    let controller = PaginationController::new(source, store.clone(), timeout);
    (controller, store)
}

pub fn engine(source: Arc<TestSource>) -> Engine {
    Engine::new(
        source,
        PostStore::default(),
        NotificationStore::new(),
        TEST_TIMEOUT,
    )
}

pub fn ids(items: &[Notification]) -> Vec<String> {
    items.iter().map(|n| n.id.clone()).collect()
}
