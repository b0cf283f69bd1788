use crate::mvi::Intent;

/// Optimistic mutations a user can apply to a single post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostIntent {
    /// Flip `liked` and move `like_count` with it.
    ToggleLike,
    /// Flip `reposted` and move `repost_count` with it.
    ToggleRepost,
    /// A reply was composed; replies cannot be undone.
    IncrementReplyCount,
}

impl Intent for PostIntent {}
