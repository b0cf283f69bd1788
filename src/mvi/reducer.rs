//! State transitions.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` step.
///
/// Stores and controllers hold the state and call `reduce` under their own
/// lock; the reducer itself never touches shared data or the data source.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
