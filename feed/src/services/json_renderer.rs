//! JSON renderer for scripting and the web API

use serde::Serialize;

use crate::core::{join_posts, JoinedPost, ViewPhase, ViewState};
use crate::error::FeedResult;
use crate::traits::Renderer;

/// Serializable snapshot of a feed's view state
#[derive(Debug, Clone, Serialize)]
pub struct FeedDocument<'a> {
    pub status: ViewPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<JoinedPost<'a>>>,
}

impl<'a> FeedDocument<'a> {
    pub fn loading() -> Self {
        Self {
            status: ViewPhase::Loading,
            message: None,
            posts: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: ViewPhase::Error,
            message: Some(message.to_string()),
            posts: None,
        }
    }

    pub fn ready(posts: Vec<JoinedPost<'a>>) -> Self {
        Self {
            status: ViewPhase::Ready,
            message: None,
            posts: Some(posts),
        }
    }

    /// Build the document for any view state, joining posts when ready
    pub fn from_view(view: &'a ViewState) -> Self {
        match view {
            ViewState::Loading => Self::loading(),
            ViewState::Error { message } => Self::error(message),
            ViewState::Ready(collections) => Self::ready(join_posts(collections)),
        }
    }
}

/// Renders the feed as a JSON document
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn encode(&self, document: &FeedDocument<'_>) -> FeedResult<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(encoded)
    }
}

impl Renderer for JsonRenderer {
    fn loading(&self) -> FeedResult<String> {
        self.encode(&FeedDocument::loading())
    }

    fn error(&self, message: &str) -> FeedResult<String> {
        self.encode(&FeedDocument::error(message))
    }

    fn posts(&self, posts: &[JoinedPost<'_>]) -> FeedResult<String> {
        self.encode(&FeedDocument::ready(posts.to_vec()))
    }
}
