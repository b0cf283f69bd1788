//! Intents for the post detail screen.

use chrono::{DateTime, Utc};

use crate::model::{Reply, User};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostDetailIntent {
    /// Open the screen from a serialized post.
    Open { payload: String },

    /// Replies arrived from the data source.
    RepliesLoaded { replies: Vec<Reply> },

    /// Toggle like on the displayed snapshot.
    ToggleLike,

    /// The reply input changed.
    DraftChanged { text: String },

    /// Post the current draft as a reply.
    ///
    /// Id and timestamp are supplied by the caller so the reducer stays pure.
    SubmitReply {
        id: String,
        author: User,
        created_at: DateTime<Utc>,
    },

    /// Leave the screen.
    Close,
}

impl Intent for PostDetailIntent {}
