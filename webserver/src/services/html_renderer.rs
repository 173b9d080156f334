//! HTML renderer for the feed page

use feed::{FeedResult, JoinedPost, Renderer};

pub const PAGE_TITLE: &str = "Blog Posts - JSONPlaceholder";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f4f4f8; color: #222; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.main-title { text-align: center; }
.text-columns { columns: 2 360px; column-gap: 2rem; }
.post-text-block { break-inside: avoid; background: #fff; border-radius: 8px; padding: 1rem; margin-bottom: 2rem; display: flex; flex-direction: column; gap: 0.5rem; }
.post-author { font-style: italic; color: #555; }
.post-title { font-weight: bold; text-transform: capitalize; }
.comments-title { margin-top: 0.5rem; font-weight: bold; }
.comments-list { margin: 0; padding-left: 1.2rem; }
.post-image { width: 100%; margin-top: 1rem; border-radius: 8px; }
.loading-screen, .error-screen { display: flex; min-height: 100vh; align-items: center; justify-content: center; }
.error-text { color: #b00020; }
"#;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the feed as a standalone HTML document
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn page(&self, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
        )
    }

    fn post_block(&self, joined: &JoinedPost<'_>) -> String {
        let mut block = format!(
            "<div class=\"post-text-block\" id=\"post-{}\">\n\
             <span class=\"post-author\">{} says:</span>\n\
             <span class=\"post-title\">{}</span>\n\
             <span class=\"post-body\">{}</span>\n",
            joined.post.id,
            escape_html(joined.author_label()),
            escape_html(&joined.post.title),
            escape_html(&joined.post.body),
        );

        if joined.has_comments() {
            block.push_str("<div class=\"comments-title\">Comments</div>\n<ul class=\"comments-list\">\n");
            for comment in &joined.comments {
                block.push_str(&format!(
                    "<li id=\"comment-{}\"><strong>{}</strong>: {}</li>\n",
                    comment.id,
                    escape_html(&comment.name),
                    escape_html(&comment.body)
                ));
            }
            block.push_str("</ul>\n");
        }

        block.push_str(&format!(
            "<img src=\"{}\" alt=\"Random image\" class=\"post-image\">\n</div>\n",
            escape_html(&joined.image_url)
        ));
        block
    }
}

impl Renderer for HtmlRenderer {
    fn loading(&self) -> FeedResult<String> {
        Ok(self.page("<div class=\"loading-screen\"><p class=\"loading-text\">Loading posts...</p></div>"))
    }

    fn error(&self, message: &str) -> FeedResult<String> {
        Ok(self.page(&format!(
            "<div class=\"error-screen\"><p class=\"error-text\">Failed to fetch data: {}</p></div>",
            escape_html(message)
        )))
    }

    fn posts(&self, posts: &[JoinedPost<'_>]) -> FeedResult<String> {
        let mut body = format!(
            "<div class=\"app\">\n<div class=\"container\">\n<h1 class=\"main-title\">{PAGE_TITLE}</h1>\n<div class=\"text-columns\">\n"
        );
        for joined in posts {
            body.push_str(&self.post_block(joined));
        }
        body.push_str("</div>\n</div>\n</div>");
        Ok(self.page(&body))
    }
}
