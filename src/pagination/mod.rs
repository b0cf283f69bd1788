//! Refresh / load-more state machine for the notification inbox.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - phase, page cursor and `has_more`
//! - `intent.rs` - user requests and data-source completions
//! - `reducer.rs` - state transitions, including the concurrency guard
//! - `controller.rs` - drives the data source and writes into the store
//!
//! At most one request is ever admitted by `load_more`; `refresh` may
//! overtake an in-flight request, in which case the older completion is
//! discarded by ticket.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{LoadOutcome, PaginationController};
pub use intent::PaginationIntent;
pub use reducer::PaginationReducer;
pub use state::{FeedPhase, PaginationState};
