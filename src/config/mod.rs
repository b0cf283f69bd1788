//! Configuration loading.
//!
//! Settings live in `~/.config/tunefeed/config.toml` (or the platform
//! equivalent). A missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, PaginationConfig, SourceConfig};
