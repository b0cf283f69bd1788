use crate::error::FeedError;
use crate::model::{Post, Reply};
use crate::mvi::Reducer;
use crate::posts::toggle_like;

use super::intent::PostDetailIntent;
use super::state::PostDetailState;

/// Decode a serialized post snapshot.
///
/// Fails with [`FeedError::MalformedInput`] on invalid JSON, missing
/// fields or a rating outside 0–5.
pub fn decode_post_payload(payload: &str) -> Result<Post, FeedError> {
    let post: Post = serde_json::from_str(payload)?;
    if !post.review_meta.rating_in_range() {
        return Err(FeedError::MalformedInput {
            reason: format!("rating {} is outside 0-5", post.review_meta.rating),
        });
    }
    Ok(post)
}

pub struct PostDetailReducer;

impl Reducer for PostDetailReducer {
    type State = PostDetailState;
    type Intent = PostDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostDetailIntent::Open { payload } => match decode_post_payload(&payload) {
                Ok(post) => PostDetailState::Ready {
                    post,
                    replies: Vec::new(),
                    draft: String::new(),
                },
                Err(err) => PostDetailState::Failed {
                    reason: err.to_string(),
                },
            },

            PostDetailIntent::Close => PostDetailState::Closed,

            PostDetailIntent::RepliesLoaded { replies } => match state {
                PostDetailState::Ready { post, draft, .. } => PostDetailState::Ready {
                    post,
                    replies,
                    draft,
                },
                other => other,
            },

            PostDetailIntent::ToggleLike => match state {
                PostDetailState::Ready {
                    post,
                    replies,
                    draft,
                } => PostDetailState::Ready {
                    post: toggle_like(post),
                    replies,
                    draft,
                },
                other => other,
            },

            PostDetailIntent::DraftChanged { text } => match state {
                PostDetailState::Ready { post, replies, .. } => PostDetailState::Ready {
                    post,
                    replies,
                    draft: text,
                },
                other => other,
            },

            PostDetailIntent::SubmitReply {
                id,
                author,
                created_at,
            } => match state {
                PostDetailState::Ready {
                    post,
                    mut replies,
                    draft,
                } if !draft.trim().is_empty() => {
                    replies.insert(
                        0,
                        Reply {
                            id,
                            author,
                            body: draft,
                            created_at,
                        },
                    );
                    PostDetailState::Ready {
                        post,
                        replies,
                        draft: String::new(),
                    }
                }
                other => other,
            },
        }
    }
}
