use crate::mvi::UiState;

/// What the controller is doing right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedPhase {
    /// No request in flight.
    #[default]
    Idle,
    /// Fetching `page` to append.
    Loading { page: u32, ticket: u64 },
    /// Fetching page 1 to replace everything.
    Refreshing { ticket: u64 },
}

impl FeedPhase {
    /// Ticket of the request in flight, if any.
    pub fn ticket(&self) -> Option<u64> {
        match self {
            FeedPhase::Idle => None,
            FeedPhase::Loading { ticket, .. } | FeedPhase::Refreshing { ticket } => Some(*ticket),
        }
    }
}

/// Pagination state for the notification inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub phase: FeedPhase,
    /// Last page successfully merged; 0 before the first load.
    pub page: u32,
    /// Cleared once the source reports exhaustion; only `refresh` re-arms it.
    pub has_more: bool,
    /// Last ticket handed out.
    pub issued: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            phase: FeedPhase::Idle,
            page: 0,
            has_more: true,
            issued: 0,
        }
    }
}

impl PaginationState {
    pub fn is_idle(&self) -> bool {
        self.phase == FeedPhase::Idle
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading { .. })
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.phase, FeedPhase::Refreshing { .. })
    }

    /// Whether a `load_more` would issue a request.
    pub fn can_load_more(&self) -> bool {
        self.is_idle() && self.has_more
    }
}

impl UiState for PaginationState {}
