//! Post store and optimistic engagement mutations.
//!
//! Each user action maps to one named mutator (`toggle_like`,
//! `toggle_repost`, `increment_reply_count`) so the invariants can be
//! checked in isolation; [`PostReducer`] routes [`PostIntent`]s to them and
//! [`PostStore`] applies them to the canonical post list.

mod intent;
mod reducer;
mod store;

pub use intent::PostIntent;
pub use reducer::{increment_reply_count, toggle_like, toggle_repost, PostReducer};
pub use store::PostStore;
