use crate::mvi::Intent;

/// Intents for the pagination state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationIntent {
    /// Pull to refresh. Allowed from any phase.
    Refresh,

    /// Scrolled near the end. Ignored unless idle with more to load.
    LoadMore,

    /// The request with `ticket` returned items.
    PageLoaded { ticket: u64 },

    /// The request with `ticket` hit the end of the feed.
    PageExhausted { ticket: u64 },

    /// The request with `ticket` failed or timed out.
    RequestFailed { ticket: u64 },
}

impl Intent for PaginationIntent {}
