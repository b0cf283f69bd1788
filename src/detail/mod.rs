//! Post detail screen.
//!
//! The screen is opened from a serialized post snapshot. A payload that
//! does not decode is a terminal error state for the screen (no retry).
//! Likes toggled here act on the local snapshot only.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::PostDetailIntent;
pub use reducer::{decode_post_payload, PostDetailReducer};
pub use screen::PostDetailScreen;
pub use state::PostDetailState;
