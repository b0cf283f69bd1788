//! Drives the data source and merges pages into the notification store.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::config::PaginationConfig;
use crate::error::FeedError;
use crate::mvi::Reducer;
use crate::notifications::{NotificationStore, PageMode};
use crate::revision::Revision;
use crate::source::{DataSource, DataSourceError, PageFetch};

use super::intent::PaginationIntent;
use super::reducer::PaginationReducer;
use super::state::{FeedPhase, PaginationState};

/// What a `refresh`/`load_more` call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// `count` items of `page` were merged into the store.
    Applied { page: u32, count: usize },
    /// The source has nothing at `page`; `has_more` is now false.
    Exhausted { page: u32 },
    /// Guard refused the request: one is in flight or the feed is drained.
    Skipped,
    /// The request completed after a newer one was issued and was dropped.
    Superseded,
}

/// Owns the pagination state and is the only writer of page data.
///
/// The state lock is never held across an `.await`: admission (check and
/// transition) and completion (ticket check, store write, transition) are
/// each a single critical section.
#[derive(Clone)]
pub struct PaginationController {
    source: Arc<dyn DataSource>,
    store: NotificationStore,
    state: Arc<Mutex<PaginationState>>,
    fetch_timeout: Duration,
    revision: Revision,
}

impl PaginationController {
    pub fn new(
        source: Arc<dyn DataSource>,
        store: NotificationStore,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            source,
            store,
            state: Arc::new(Mutex::new(PaginationState::default())),
            fetch_timeout,
            revision: Revision::new(),
        }
    }

    /// Report state changes through a shared revision counter.
    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revision = revision;
        self
    }

    pub fn from_config(
        source: Arc<dyn DataSource>,
        store: NotificationStore,
        config: &PaginationConfig,
    ) -> Self {
        Self::new(
            source,
            store,
            Duration::from_millis(config.fetch_timeout_ms),
        )
    }

    /// Snapshot of the current pagination state.
    pub fn state(&self) -> PaginationState {
        *self.state.lock()
    }

    /// Reload page 1 and replace the canonical sequence.
    pub async fn refresh(&self) -> Result<LoadOutcome, FeedError> {
        let ticket = {
            let mut state = self.state.lock();
            if let Some(previous) = state.phase.ticket() {
                tracing::debug!(superseded = previous, "Refresh overtakes in-flight request");
            }
            *state = PaginationReducer::reduce(*state, PaginationIntent::Refresh);
            state.issued
        };
        self.revision.bump();

        self.run(ticket, 1, PageMode::Replace).await
    }

    /// Fetch the next page and append it.
    ///
    /// No-op unless idle with `has_more` set.
    pub async fn load_more(&self) -> Result<LoadOutcome, FeedError> {
        let (ticket, page) = {
            let mut state = self.state.lock();
            if !state.can_load_more() {
                tracing::debug!(
                    phase = ?state.phase,
                    has_more = state.has_more,
                    "Load more skipped"
                );
                return Ok(LoadOutcome::Skipped);
            }
            let next = PaginationReducer::reduce(*state, PaginationIntent::LoadMore);
            let FeedPhase::Loading { page, ticket } = next.phase else {
                return Ok(LoadOutcome::Skipped);
            };
            *state = next;
            (ticket, page)
        };
        self.revision.bump();

        // Nothing merged yet (first load or failed refresh): page 1 replaces.
        let mode = if page == 1 {
            PageMode::Replace
        } else {
            PageMode::Append
        };
        self.run(ticket, page, mode).await
    }

    async fn run(&self, ticket: u64, page: u32, mode: PageMode) -> Result<LoadOutcome, FeedError> {
        tracing::info!(
            source = self.source.name(),
            page,
            ticket,
            "Requesting notification page"
        );
        let mut pending = PendingRequest {
            state: &self.state,
            revision: &self.revision,
            ticket,
            settled: false,
        };
        let fetched = self.fetch(page).await;
        pending.settled = true;

        let mut state = self.state.lock();
        if state.phase.ticket() != Some(ticket) {
            tracing::debug!(page, ticket, "Discarding stale page completion");
            return Ok(LoadOutcome::Superseded);
        }

        let outcome: Result<LoadOutcome, FeedError> = match fetched {
            Ok(PageFetch::Items(items)) => {
                let count = items.len();
                self.store.apply_page(items, mode);
                *state = PaginationReducer::reduce(*state, PaginationIntent::PageLoaded { ticket });
                tracing::info!(page, count, ?mode, "Notification page applied");
                Ok(LoadOutcome::Applied { page, count })
            }
            Ok(PageFetch::Exhausted) => {
                if mode == PageMode::Replace {
                    self.store.apply_page(Vec::new(), mode);
                }
                *state =
                    PaginationReducer::reduce(*state, PaginationIntent::PageExhausted { ticket });
                tracing::info!(page, "Notification feed exhausted");
                Ok(LoadOutcome::Exhausted { page })
            }
            Err(err) => {
                *state =
                    PaginationReducer::reduce(*state, PaginationIntent::RequestFailed { ticket });
                tracing::warn!(page, ticket, error = %err, "Notification page request failed");
                Err(err.into())
            }
        };
        drop(state);
        self.revision.bump();
        outcome
    }

    async fn fetch(&self, page: u32) -> Result<PageFetch, DataSourceError> {
        match tokio::time::timeout(self.fetch_timeout, self.source.fetch_notification_page(page))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(DataSourceError::Timeout {
                after_ms: self.fetch_timeout.as_millis() as u64,
            }),
        }
    }
}

/// Returns the controller to `Idle` if a request future is dropped mid-fetch.
struct PendingRequest<'a> {
    state: &'a Mutex<PaginationState>,
    revision: &'a Revision,
    ticket: u64,
    settled: bool,
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.state.lock();
        if state.phase.ticket() != Some(self.ticket) {
            return;
        }
        *state = PaginationReducer::reduce(
            *state,
            PaginationIntent::RequestFailed {
                ticket: self.ticket,
            },
        );
        drop(state);
        tracing::debug!(ticket = self.ticket, "Request dropped before completion");
        self.revision.bump();
    }
}
