//! Error types surfaced to the presentation layer.
//!
//! Mutations addressed to an unknown id are not errors: they are silent
//! no-ops and report "nothing changed" through a `bool` instead.

use thiserror::Error;

use crate::source::DataSourceError;

/// Errors that can occur while driving the feed engine.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A serialized post handed to the detail screen could not be decoded.
    #[error("Malformed post payload: {reason}")]
    MalformedInput { reason: String },

    /// The data source failed or timed out.
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::MalformedInput {
            reason: err.to_string(),
        }
    }
}

impl FeedError {
    /// Stable error kind string for logs and fallback views.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::MalformedInput { .. } => "malformed_input",
            FeedError::DataSource(_) => "data_source",
        }
    }

    /// Whether the presentation layer should offer a manual retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedError::DataSource(_))
    }
}
