//! Reducer for pagination state transitions.

use crate::mvi::Reducer;

use super::intent::PaginationIntent;
use super::state::{FeedPhase, PaginationState};

pub struct PaginationReducer;

impl Reducer for PaginationReducer {
    type State = PaginationState;
    type Intent = PaginationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaginationIntent::Refresh => {
                let ticket = state.issued + 1;
                PaginationState {
                    phase: FeedPhase::Refreshing { ticket },
                    page: 0,
                    has_more: true,
                    issued: ticket,
                }
            }

            PaginationIntent::LoadMore => {
                if !state.can_load_more() {
                    return state;
                }
                let ticket = state.issued + 1;
                PaginationState {
                    phase: FeedPhase::Loading {
                        page: state.page + 1,
                        ticket,
                    },
                    issued: ticket,
                    ..state
                }
            }

            PaginationIntent::PageLoaded { ticket } => match state.phase {
                FeedPhase::Loading { page, ticket: t } if t == ticket => PaginationState {
                    phase: FeedPhase::Idle,
                    page,
                    ..state
                },
                FeedPhase::Refreshing { ticket: t } if t == ticket => PaginationState {
                    phase: FeedPhase::Idle,
                    page: 1,
                    has_more: true,
                    ..state
                },
                _ => state,
            },

            PaginationIntent::PageExhausted { ticket } => match state.phase {
                FeedPhase::Loading { page, ticket: t } if t == ticket => PaginationState {
                    phase: FeedPhase::Idle,
                    page,
                    has_more: false,
                    ..state
                },
                FeedPhase::Refreshing { ticket: t } if t == ticket => PaginationState {
                    phase: FeedPhase::Idle,
                    page: 1,
                    has_more: false,
                    ..state
                },
                _ => state,
            },

            // Failure leaves page and has_more untouched so the same request can be retried.
            PaginationIntent::RequestFailed { ticket } => {
                if state.phase.ticket() == Some(ticket) {
                    PaginationState {
                        phase: FeedPhase::Idle,
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: PaginationState, intent: PaginationIntent) -> PaginationState {
        PaginationReducer::reduce(state, intent)
    }

    fn idle_at(page: u32, has_more: bool) -> PaginationState {
        PaginationState {
            page,
            has_more,
            ..PaginationState::default()
        }
    }

    #[test]
    fn initial_state_is_idle_page_zero() {
        let state = PaginationState::default();
        assert!(state.is_idle());
        assert_eq!(state.page, 0);
        assert!(state.has_more);
    }

    #[test]
    fn refresh_resets_cursor_from_any_phase() {
        let loading = reduce(idle_at(2, true), PaginationIntent::LoadMore);
        assert!(loading.is_loading());

        let refreshing = reduce(loading, PaginationIntent::Refresh);
        assert!(refreshing.is_refreshing());
        assert_eq!(refreshing.page, 0);
        assert!(refreshing.has_more);
        assert_eq!(refreshing.phase.ticket(), Some(2));
    }

    #[test]
    fn refresh_completion_lands_on_page_one() {
        let state = reduce(idle_at(2, false), PaginationIntent::Refresh);
        let state = reduce(state, PaginationIntent::PageLoaded { ticket: 1 });
        assert!(state.is_idle());
        assert_eq!(state.page, 1);
        assert!(state.has_more);
    }

    #[test]
    fn load_more_requests_next_page() {
        let state = reduce(idle_at(1, true), PaginationIntent::LoadMore);
        assert_eq!(state.phase, FeedPhase::Loading { page: 2, ticket: 1 });
        // Cursor only moves once the page lands.
        assert_eq!(state.page, 1);

        let state = reduce(state, PaginationIntent::PageLoaded { ticket: 1 });
        assert!(state.is_idle());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn load_more_while_in_flight_is_ignored() {
        let loading = reduce(idle_at(1, true), PaginationIntent::LoadMore);
        assert_eq!(reduce(loading, PaginationIntent::LoadMore), loading);

        let refreshing = reduce(idle_at(1, true), PaginationIntent::Refresh);
        assert_eq!(reduce(refreshing, PaginationIntent::LoadMore), refreshing);
    }

    #[test]
    fn load_more_when_drained_is_ignored() {
        let drained = idle_at(3, false);
        assert_eq!(reduce(drained, PaginationIntent::LoadMore), drained);
    }

    #[test]
    fn exhaustion_clears_has_more_and_advances_page() {
        let state = reduce(idle_at(2, true), PaginationIntent::LoadMore);
        let state = reduce(state, PaginationIntent::PageExhausted { ticket: 1 });
        assert!(state.is_idle());
        assert_eq!(state.page, 3);
        assert!(!state.has_more);

        let rearmed = reduce(state, PaginationIntent::Refresh);
        assert!(rearmed.has_more);
    }

    #[test]
    fn failure_returns_to_idle_without_touching_cursor() {
        let state = reduce(idle_at(1, true), PaginationIntent::LoadMore);
        let state = reduce(state, PaginationIntent::RequestFailed { ticket: 1 });
        assert!(state.is_idle());
        assert_eq!(state.page, 1);
        assert!(state.has_more);
    }

    #[test]
    fn stale_completions_are_ignored() {
        let loading = reduce(idle_at(1, true), PaginationIntent::LoadMore);
        let refreshing = reduce(loading, PaginationIntent::Refresh);

        for stale in [
            PaginationIntent::PageLoaded { ticket: 1 },
            PaginationIntent::PageExhausted { ticket: 1 },
            PaginationIntent::RequestFailed { ticket: 1 },
        ] {
            assert_eq!(reduce(refreshing, stale), refreshing);
        }
    }
}
