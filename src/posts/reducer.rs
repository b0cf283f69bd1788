use crate::model::Post;
use crate::mvi::{Reducer, UiState};

use super::intent::PostIntent;

/// Flip `liked`, then add 1 if now liked or subtract 1 if not.
///
/// Applying it twice restores `(liked, like_count)` exactly. The count is
/// not clamped at zero.
pub fn toggle_like(post: Post) -> Post {
    let liked = !post.liked;
    let like_count = post.like_count + if liked { 1 } else { -1 };
    Post {
        liked,
        like_count,
        ..post
    }
}

/// Same as [`toggle_like`] over `(reposted, repost_count)`.
pub fn toggle_repost(post: Post) -> Post {
    let reposted = !post.reposted;
    let repost_count = post.repost_count + if reposted { 1 } else { -1 };
    Post {
        reposted,
        repost_count,
        ..post
    }
}

pub fn increment_reply_count(post: Post) -> Post {
    Post {
        reply_count: post.reply_count + 1,
        ..post
    }
}

impl UiState for Post {}

/// Reducer for a single post.
pub struct PostReducer;

impl Reducer for PostReducer {
    type State = Post;
    type Intent = PostIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostIntent::ToggleLike => toggle_like(state),
            PostIntent::ToggleRepost => toggle_repost(state),
            PostIntent::IncrementReplyCount => increment_reply_count(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(liked: bool, like_count: i64) -> Post {
        Post {
            id: "p".to_string(),
            liked,
            like_count,
            ..Post::default()
        }
    }

    #[test]
    fn toggle_like_is_an_involution() {
        for (liked, count) in [(false, 0), (true, 1), (false, 41), (true, 0), (false, -3)] {
            let start = post(liked, count);
            let twice = toggle_like(toggle_like(start.clone()));
            assert_eq!(twice, start, "liked={} count={}", liked, count);
        }
    }

    #[test]
    fn toggle_like_moves_count_with_flag() {
        let liked = toggle_like(post(false, 10));
        assert!(liked.liked);
        assert_eq!(liked.like_count, 11);

        let unliked = toggle_like(liked);
        assert!(!unliked.liked);
        assert_eq!(unliked.like_count, 10);
    }

    #[test]
    fn inconsistent_seed_goes_negative() {
        let p = toggle_like(post(true, 0));
        assert!(!p.liked);
        assert_eq!(p.like_count, -1);
    }

    #[test]
    fn toggle_repost_leaves_likes_alone() {
        let start = Post {
            repost_count: 2,
            ..post(true, 5)
        };
        let p = toggle_repost(start.clone());
        assert!(p.reposted);
        assert_eq!(p.repost_count, 3);
        assert_eq!((p.liked, p.like_count), (true, 5));
        assert_eq!(toggle_repost(p), start);
    }

    #[test]
    fn reducer_routes_to_named_mutators() {
        let p = PostReducer::reduce(post(false, 0), PostIntent::IncrementReplyCount);
        assert_eq!(p.reply_count, 1);
        let p = PostReducer::reduce(p, PostIntent::IncrementReplyCount);
        assert_eq!(p.reply_count, 2);
        let p = PostReducer::reduce(p, PostIntent::ToggleLike);
        assert_eq!((p.liked, p.like_count), (true, 1));
    }
}
