use crate::model::{Post, Reply};
use crate::mvi::UiState;

/// State of the post detail screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PostDetailState {
    /// Nothing opened yet.
    #[default]
    Closed,

    /// The payload could not be decoded.
    Failed { reason: String },

    /// Post decoded; replies are newest-first.
    Ready {
        post: Post,
        replies: Vec<Reply>,
        draft: String,
    },
}

impl PostDetailState {
    pub fn post(&self) -> Option<&Post> {
        match self {
            PostDetailState::Ready { post, .. } => Some(post),
            _ => None,
        }
    }

    pub fn replies(&self) -> &[Reply] {
        match self {
            PostDetailState::Ready { replies, .. } => replies,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PostDetailState::Failed { .. })
    }
}

impl UiState for PostDetailState {}
