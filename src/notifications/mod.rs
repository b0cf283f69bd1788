//! Canonical notification list and its filtered views.

mod filter;
mod grouping;
mod store;

pub use filter::NotificationFilter;
pub use grouping::{like_preview, LikePreview, MAX_PREVIEW_USERS};
pub use store::{NotificationStore, PageMode};
