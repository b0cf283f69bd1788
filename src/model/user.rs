use serde::{Deserialize, Serialize};

/// Author snapshot embedded in posts, replies and notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    pub avatar_uri: String,
}

impl User {
    pub fn new(display_name: impl Into<String>, avatar_uri: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            handle: None,
            avatar_uri: avatar_uri.into(),
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}
