//! Review posts and their replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Upper bound of a review rating (inclusive).
pub const MAX_RATING: f32 = 5.0;

/// Album/song metadata attached to a review post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewMeta {
    pub album_cover_uri: String,
    pub album_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_name: Option<String>,
    /// 0 to 5, half steps allowed.
    pub rating: f32,
}

impl ReviewMeta {
    pub fn rating_in_range(&self) -> bool {
        (0.0..=MAX_RATING).contains(&self.rating)
    }
}

/// A review post with its engagement counters.
///
/// `liked`/`like_count` and `reposted`/`repost_count` only ever change in
/// pairs, through the mutators in [`crate::posts`]. Counters are signed:
/// toggling an inconsistent seed (`liked = true`, `like_count = 0`) may go
/// negative and is deliberately left unclamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: User,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub review_meta: ReviewMeta,
    #[serde(default)]
    pub reply_count: i64,
    #[serde(default)]
    pub repost_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub reposted: bool,
}

/// A reply shown on the post detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub author: User,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
