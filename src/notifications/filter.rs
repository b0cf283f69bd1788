use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Notification, NotificationType};

/// The notification tabs. Each one is a pure projection of the canonical list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFilter {
    #[default]
    All,
    /// Replies only.
    Mentions,
    /// New releases only.
    Releases,
}

impl NotificationFilter {
    pub const ALL: [NotificationFilter; 3] = [
        NotificationFilter::All,
        NotificationFilter::Mentions,
        NotificationFilter::Releases,
    ];

    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Mentions => {
                notification.notification_type() == NotificationType::Reply
            }
            NotificationFilter::Releases => {
                notification.notification_type() == NotificationType::Release
            }
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            NotificationFilter::All => "All",
            NotificationFilter::Mentions => "Mentions",
            NotificationFilter::Releases => "Releases",
        }
    }

    /// Hint shown when the view is empty.
    pub fn empty_message(self) -> &'static str {
        match self {
            NotificationFilter::All => {
                "You'll see activity related to your posts and new music releases here"
            }
            NotificationFilter::Mentions => "No mentions to show yet",
            NotificationFilter::Releases => "No new releases to show yet",
        }
    }
}

impl fmt::Display for NotificationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

impl FromStr for NotificationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(NotificationFilter::All),
            "mentions" => Ok(NotificationFilter::Mentions),
            "releases" => Ok(NotificationFilter::Releases),
            other => Err(format!("unknown notification filter '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Mentions".parse::<NotificationFilter>(), Ok(NotificationFilter::Mentions));
        assert_eq!("releases".parse::<NotificationFilter>(), Ok(NotificationFilter::Releases));
        assert!("likes".parse::<NotificationFilter>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for filter in NotificationFilter::ALL {
            assert_eq!(filter.to_string().parse::<NotificationFilter>(), Ok(filter));
        }
    }
}
