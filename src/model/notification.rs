//! Notification entities.
//!
//! A notification is a common header (`id`, `message`, `timestamp`,
//! `is_read`) plus a payload discriminated by `type`. On the wire the
//! payload fields sit next to the header, tagged by `"type"`:
//!
//! ```json
//! { "id": "2", "type": "reply", "message": "...", "timestamp": "...",
//!   "isRead": true, "replyAuthor": { ... }, "quotedContent": "..." }
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(flatten)]
    pub kind: NotificationKind,
}

/// Type-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotificationKind {
    Like(LikeGroup),
    Reply(ReplyPreview),
    Quote,
    Release(ReleasePreview),
}

/// Discriminant of [`NotificationKind`], used by the filtered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Like,
    Reply,
    Quote,
    Release,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeGroup {
    /// Total number of likers, always at least 1.
    pub grouped_count: u32,
    /// Likers in display order; may be shorter than `grouped_count`.
    pub primary_users: Vec<User>,
    #[serde(default)]
    pub liked_post_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPreview {
    pub reply_author: User,
    pub quoted_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasePreview {
    pub artist_name: String,
    pub album_name: String,
    pub album_art_uri: String,
    pub release_date: NaiveDate,
}

impl NotificationKind {
    pub fn notification_type(&self) -> NotificationType {
        match self {
            NotificationKind::Like(_) => NotificationType::Like,
            NotificationKind::Reply(_) => NotificationType::Reply,
            NotificationKind::Quote => NotificationType::Quote,
            NotificationKind::Release(_) => NotificationType::Release,
        }
    }
}

impl Notification {
    pub fn notification_type(&self) -> NotificationType {
        self.kind.notification_type()
    }

    pub fn like_group(&self) -> Option<&LikeGroup> {
        match &self.kind {
            NotificationKind::Like(group) => Some(group),
            _ => None,
        }
    }

    pub fn release(&self) -> Option<&ReleasePreview> {
        match &self.kind {
            NotificationKind::Release(release) => Some(release),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_payload_sits_next_to_header() {
        let json = r#"{
            "id": "2",
            "type": "reply",
            "message": "Charlie replied to your post.",
            "timestamp": "2025-04-05T10:00:00Z",
            "isRead": true,
            "replyAuthor": { "displayName": "Charlie", "avatarUri": "https://picsum.photos/50" },
            "quotedContent": "Great work on your latest release!"
        }"#;

        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.notification_type(), NotificationType::Reply);
        assert!(notification.is_read);
        match notification.kind {
            NotificationKind::Reply(preview) => {
                assert_eq!(preview.reply_author.display_name, "Charlie");
                assert_eq!(preview.reply_author.handle, None);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn quote_has_no_payload_and_defaults_unread() {
        let json = r#"{
            "id": "3",
            "type": "quote",
            "message": "Charlie quoted your post.",
            "timestamp": "2025-04-05T09:00:00Z"
        }"#;

        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.kind, NotificationKind::Quote);
        assert!(!notification.is_read);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let json = r#"{
            "id": "9",
            "type": "follow",
            "message": "x",
            "timestamp": "2025-04-05T09:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Notification>(json).is_err());
    }
}
