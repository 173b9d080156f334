//! Router state shared by all handlers

use feed::{Feed, FeedConfig, ResourceSource};

/// Configuration and source every request-scoped feed is built from
#[derive(Debug)]
pub struct AppState<S> {
    pub config: FeedConfig,
    pub source: S,
}

impl<S> AppState<S>
where
    S: ResourceSource + Clone,
{
    pub fn new(config: FeedConfig, source: S) -> Self {
        Self { config, source }
    }

    /// A fresh, unmounted feed for one request
    pub fn new_feed(&self) -> Feed<S> {
        Feed::new(self.config.clone(), self.source.clone())
    }
}
