//! Relational join of posts with their author and comments
//!
//! Pure functions over borrowed collections; recomputed on every render.
//! Foreign keys may dangle, so every lookup tolerates absence.

use serde::Serialize;
use shared::{Comment, Post, User};

use crate::types::Collections;

/// Label shown in place of a name when a post's author is not in the fetched users
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A post together with everything derived from the other collections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedPost<'a> {
    pub post: &'a Post,
    pub author: Option<&'a User>,
    pub comments: Vec<&'a Comment>,
    pub image_url: String,
}

impl<'a> JoinedPost<'a> {
    /// Author name, or [`UNKNOWN_AUTHOR`] when the lookup came back empty
    pub fn author_label(&self) -> &'a str {
        self.author.map(|user| user.name.as_str()).unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

/// First user whose id matches; duplicates beyond the first are ignored
pub fn find_author(users: &[User], user_id: i64) -> Option<&User> {
    users.iter().find(|user| user.id == user_id)
}

/// Every comment on the post, in source order
pub fn comments_for(comments: &[Comment], post_id: i64) -> Vec<&Comment> {
    comments.iter().filter(|comment| comment.post_id == post_id).collect()
}

/// Placeholder picture shown under each post
pub fn image_url(post_id: i64) -> String {
    format!("https://picsum.photos/400/200?random={post_id}")
}

/// Join every post with its author and comments, preserving post order
pub fn join_posts(collections: &Collections) -> Vec<JoinedPost<'_>> {
    collections
        .posts
        .iter()
        .map(|post| JoinedPost {
            post,
            author: find_author(&collections.users, post.user_id),
            comments: comments_for(&collections.comments, post.id),
            image_url: image_url(post.id),
        })
        .collect()
}
