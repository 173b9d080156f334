//! Plain-text renderer for terminals

use crate::core::JoinedPost;
use crate::error::FeedResult;
use crate::traits::Renderer;

pub const FEED_TITLE: &str = "Blog Posts - JSONPlaceholder";
pub const LOADING_TEXT: &str = "Loading posts...";
pub const ERROR_PREFIX: &str = "Failed to fetch data";

/// Renders the feed as indented text blocks
#[derive(Debug, Clone)]
pub struct TextRenderer {
    show_images: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { show_images: true }
    }

    /// Omit the placeholder image line under each post
    pub fn without_images(mut self) -> Self {
        self.show_images = false;
        self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn loading(&self) -> FeedResult<String> {
        Ok(LOADING_TEXT.to_string())
    }

    fn error(&self, message: &str) -> FeedResult<String> {
        Ok(format!("{ERROR_PREFIX}: {message}"))
    }

    fn posts(&self, posts: &[JoinedPost<'_>]) -> FeedResult<String> {
        let mut lines = vec![FEED_TITLE.to_string(), "=".repeat(FEED_TITLE.len())];

        for joined in posts {
            lines.push(String::new());
            lines.push(format!("{} says:", joined.author_label()));
            lines.push(format!("  {}", joined.post.title));
            lines.extend(joined.post.body.lines().map(|line| format!("  {line}")));

            if joined.has_comments() {
                lines.push("  Comments".to_string());
                lines.extend(
                    joined
                        .comments
                        .iter()
                        .map(|comment| format!("    - {}: {}", comment.name, comment.body.replace('\n', " "))),
                );
            }

            if self.show_images {
                lines.push(format!("  Image: {}", joined.image_url));
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}
