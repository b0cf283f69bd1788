//! Read-side rule for grouped like notifications.

use crate::model::{LikeGroup, User};

/// At most this many likers are shown individually.
pub const MAX_PREVIEW_USERS: usize = 3;

/// What the inbox row shows for a like group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikePreview<'a> {
    /// The first (up to three) likers.
    pub shown: &'a [User],
    /// `+N` marker for the likers not shown, if `grouped_count > 3`.
    pub overflow: Option<u32>,
}

/// Build the preview for a like group. No state is stored.
pub fn like_preview(group: &LikeGroup) -> LikePreview<'_> {
    let shown_len = group.primary_users.len().min(MAX_PREVIEW_USERS);
    let overflow = group
        .grouped_count
        .checked_sub(MAX_PREVIEW_USERS as u32)
        .filter(|rest| *rest > 0);

    LikePreview {
        shown: &group.primary_users[..shown_len],
        overflow,
    }
}
