//! In-memory fixture source with simulated latency.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use super::{DataSource, DataSourceError, PageFetch};
use crate::config::SourceConfig;
use crate::model::{
    LikeGroup, Notification, NotificationKind, Post, ReleasePreview, Reply, ReplyPreview,
    ReviewMeta, User,
};

/// Fixture-backed data source.
///
/// Page 1 is the seed notification set; pages `2..=page_count` re-issue it
/// with ids `p{n}-{id}` so ids never collide across pages. Anything past
/// `page_count` is [`PageFetch::Exhausted`].
#[derive(Debug, Clone)]
pub struct FixtureSource {
    latency: Duration,
    page_count: u32,
    /// Anchor for relative timestamps, fixed so every page agrees.
    now: DateTime<Utc>,
}

impl FixtureSource {
    pub fn new(latency: Duration, page_count: u32) -> Self {
        Self {
            latency,
            page_count,
            now: Utc::now(),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(Duration::from_millis(config.latency_ms), config.page_count)
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_initial_posts(&self) -> Result<Vec<Post>, DataSourceError> {
        self.simulate_latency().await;
        Ok(seed_posts(self.now))
    }

    async fn fetch_notification_page(&self, page: u32) -> Result<PageFetch, DataSourceError> {
        self.simulate_latency().await;

        if page == 0 {
            return Err(DataSourceError::Unavailable {
                source_name: self.name().to_string(),
                reason: "page numbers start at 1".to_string(),
            });
        }
        if page > self.page_count {
            return Ok(PageFetch::Exhausted);
        }

        let seed = seed_notifications(self.now);
        if page == 1 {
            return Ok(PageFetch::Items(seed));
        }

        let items = seed
            .into_iter()
            .map(|n| Notification {
                id: format!("p{}-{}", page, n.id),
                message: format!("Page {}: {}", page, n.message),
                ..n
            })
            .collect();
        Ok(PageFetch::Items(items))
    }

    async fn fetch_replies(&self, _post_id: &str) -> Result<Vec<Reply>, DataSourceError> {
        self.simulate_latency().await;
        Ok(seed_replies(self.now))
    }
}

fn release_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    let post = |id: &str, author: User, body: &str, meta: ReviewMeta| Post {
        id: id.to_string(),
        author,
        body: body.to_string(),
        created_at: now,
        review_meta: meta,
        ..Post::default()
    };

    vec![
        post(
            "1",
            User::new("Alice", "https://picsum.photos/40").with_handle("alice123"),
            "Loving this new album!",
            ReviewMeta {
                album_cover_uri: "https://picsum.photos/80".to_string(),
                album_name: "Revolution".to_string(),
                song_name: Some("Awakening".to_string()),
                rating: 4.5,
            },
        ),
        post(
            "2",
            User::new("Bob", "https://picsum.photos/41").with_handle("bobbybeats"),
            "This Album Slays the Boots Down House on God Period MAMA!",
            ReviewMeta {
                album_cover_uri: "https://picsum.photos/81".to_string(),
                album_name: "Sunrise".to_string(),
                song_name: Some("Morning Glory".to_string()),
                rating: 5.0,
            },
        ),
        post(
            "3",
            User::new("Charlie", "https://picsum.photos/42").with_handle("echocharlie"),
            "Really digging the vibes on this one.",
            ReviewMeta {
                album_cover_uri: "https://picsum.photos/82".to_string(),
                album_name: "Echoes".to_string(),
                song_name: Some("Reflections".to_string()),
                rating: 5.0,
            },
        ),
    ]
}

fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let hours_ago = |h: i64| now - TimeDelta::hours(h);
    let charlie = User::new("Charlie", "https://picsum.photos/50");

    vec![
        Notification {
            id: "1".to_string(),
            message: "Charlie and 4 others liked your post.".to_string(),
            timestamp: hours_ago(1),
            is_read: false,
            kind: NotificationKind::Like(LikeGroup {
                grouped_count: 5,
                primary_users: vec![
                    charlie.clone(),
                    User::new("Sam", "https://picsum.photos/51"),
                    User::new("Alex", "https://picsum.photos/52"),
                    User::new("Jordan", "https://picsum.photos/53"),
                    User::new("Taylor", "https://picsum.photos/54"),
                ],
                liked_post_content: "This is a preview of the liked post content.".to_string(),
            }),
        },
        Notification {
            id: "2".to_string(),
            message: "Charlie replied to your post.".to_string(),
            timestamp: hours_ago(2),
            is_read: true,
            kind: NotificationKind::Reply(ReplyPreview {
                reply_author: charlie,
                quoted_content: "Great work on your latest release!".to_string(),
            }),
        },
        Notification {
            id: "3".to_string(),
            message: "Charlie quoted your post.".to_string(),
            timestamp: hours_ago(3),
            is_read: false,
            kind: NotificationKind::Quote,
        },
        Notification {
            id: "4".to_string(),
            message: "Lady Gaga has a new release out. Rate it!".to_string(),
            timestamp: hours_ago(4),
            is_read: true,
            kind: NotificationKind::Release(ReleasePreview {
                artist_name: "Lady Gaga".to_string(),
                album_name: "Chromatica".to_string(),
                album_art_uri: "https://picsum.photos/100".to_string(),
                release_date: release_date(2025, 4, 5),
            }),
        },
        Notification {
            id: "5".to_string(),
            message: "Beyoncé has a new release out. Rate it!".to_string(),
            timestamp: hours_ago(5),
            is_read: false,
            kind: NotificationKind::Release(ReleasePreview {
                artist_name: "Beyoncé".to_string(),
                album_name: "Renaissance Part II".to_string(),
                album_art_uri: "https://picsum.photos/101".to_string(),
                release_date: release_date(2025, 4, 1),
            }),
        },
    ]
}

fn seed_replies(now: DateTime<Utc>) -> Vec<Reply> {
    let reply = |id: &str, name: &str, body: &str, minutes_ago: i64| Reply {
        id: id.to_string(),
        author: User::new(name, "https://via.placeholder.com/40"),
        body: body.to_string(),
        created_at: now - TimeDelta::minutes(minutes_ago),
    };

    vec![
        reply("reply1", "ReplyUser1", "This is a great review!", 60),
        reply("reply2", "ReplyUser2", "I agree, the album is amazing.", 120),
        reply("reply3", "ReplyUser3", "I disagree. I found it to be quite boring.", 30),
    ]
}
