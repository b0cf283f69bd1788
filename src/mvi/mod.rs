//! Intent/reducer primitives shared by the post, pagination and detail
//! state machines.
//!
//! Posts, pagination and the detail screen each pair a state value with an
//! intent enum and a reducer; the owning store applies intents one at a time.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
