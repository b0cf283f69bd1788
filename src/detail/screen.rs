//! Stateful driver for the post detail screen.

use chrono::Utc;
use uuid::Uuid;

use crate::model::User;
use crate::mvi::Reducer;
use crate::source::DataSource;

use super::intent::PostDetailIntent;
use super::reducer::PostDetailReducer;
use super::state::PostDetailState;

/// Holds the detail screen state and feeds intents through the reducer.
#[derive(Debug, Default)]
pub struct PostDetailScreen {
    state: PostDetailState,
}

impl PostDetailScreen {
    /// Open the screen from `payload` and load replies for the post.
    ///
    /// A reply fetch failure is logged and leaves the reply list empty.
    pub async fn open(source: &dyn DataSource, payload: &str) -> Self {
        let mut screen = Self::default();
        screen.dispatch(PostDetailIntent::Open {
            payload: payload.to_string(),
        });

        let post_id = match &screen.state {
            PostDetailState::Ready { post, .. } => post.id.clone(),
            PostDetailState::Failed { reason } => {
                tracing::warn!(reason = %reason, "Post detail payload rejected");
                return screen;
            }
            PostDetailState::Closed => return screen,
        };

        match source.fetch_replies(&post_id).await {
            Ok(replies) => screen.dispatch(PostDetailIntent::RepliesLoaded { replies }),
            Err(err) => {
                tracing::warn!(post_id = %post_id, error = %err, "Failed to load replies");
            }
        }
        screen
    }

    pub fn state(&self) -> &PostDetailState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: PostDetailIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = PostDetailReducer::reduce(state, intent);
    }

    /// Submit the current draft as `author`. Returns whether a reply was added.
    pub fn submit_reply(&mut self, author: User) -> bool {
        let before = self.state.replies().len();
        self.dispatch(PostDetailIntent::SubmitReply {
            id: format!("reply-{}", Uuid::new_v4()),
            author,
            created_at: Utc::now(),
        });
        self.state.replies().len() > before
    }
}
