//! Feed trait definitions for dependency injection

use async_trait::async_trait;

use shared::{Comment, Post, User};
use crate::core::JoinedPost;
use crate::error::FeedResult;

/// Source of the three record collections
#[mockall::automock]
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Fetch every post
    async fn fetch_posts(&self) -> FeedResult<Vec<Post>>;

    /// Fetch every user
    async fn fetch_users(&self) -> FeedResult<Vec<User>>;

    /// Fetch every comment
    async fn fetch_comments(&self) -> FeedResult<Vec<Comment>>;
}

/// Presentation of a feed's view state
pub trait Renderer: Send + Sync {
    /// Output while the fetch cycle is in flight
    fn loading(&self) -> FeedResult<String>;

    /// Output after a failed fetch cycle
    fn error(&self, message: &str) -> FeedResult<String>;

    /// Output for the joined posts of a successful fetch cycle
    fn posts(&self, posts: &[JoinedPost<'_>]) -> FeedResult<String>;
}
