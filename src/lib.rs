//! State layer for a music-review social feed.
//!
//! Optimistic engagement counters on posts, a paginated notification inbox
//! with filtered views, and the refresh/load-more state machine that keeps
//! them consistent. Presentation is out of scope; it reads from and
//! dispatches into [`engine::Engine`].

pub mod config;
pub mod detail;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod notifications;
pub mod pagination;
pub mod posts;
pub mod revision;
pub mod source;

pub use engine::{Action, Engine, FeedSnapshot};
pub use error::FeedError;
