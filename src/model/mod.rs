//! Entities shared by the stores, the data source and the presentation layer.

mod notification;
mod post;
mod user;

pub use notification::{
    LikeGroup, Notification, NotificationKind, NotificationType, ReleasePreview, ReplyPreview,
};
pub use post::{Post, Reply, ReviewMeta, MAX_RATING};
pub use user::User;
