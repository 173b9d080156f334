//! HTTP resource source backed by reqwest

use std::time::Duration;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use shared::{Comment, Post, ResourceKind, User};
use crate::error::{FeedError, FeedResult};
use crate::traits::ResourceSource;
use crate::types::FeedConfig;

/// Real resource source issuing `GET {base_url}/{resource}` requests
#[derive(Clone, Debug)]
pub struct HttpResourceSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpResourceSource {
    /// Create a source for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> FeedResult<Self> {
        let mut base = Url::parse(base_url.trim()).map_err(|e| FeedError::ConfigError {
            message: format!("Invalid base URL '{base_url}': {e}"),
        })?;

        if base.cannot_be_a_base() {
            return Err(FeedError::ConfigError {
                message: format!("Base URL '{base_url}' cannot carry resource paths"),
            });
        }

        // Without a trailing slash `join` would replace the last segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::ConfigError {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, base_url: base })
    }

    /// Create a source from feed configuration
    pub fn from_config(config: &FeedConfig) -> FeedResult<Self> {
        Self::new(&config.base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute endpoint of a resource collection
    pub fn endpoint(&self, resource: ResourceKind) -> FeedResult<Url> {
        self.base_url
            .join(resource.path())
            .map_err(|e| FeedError::InvalidUrl {
                resource,
                message: e.to_string(),
            })
    }

    /// Fetch one collection and decode it as a JSON array of `T`
    async fn get_collection<T>(&self, resource: ResourceKind) -> FeedResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(resource)?;
        debug!(resource = %resource, url = %url, "requesting collection");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Network {
                resource,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(resource = %resource, status = status.as_u16(), "non-success response");
            return Err(FeedError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| FeedError::Network {
            resource,
            message: e.to_string(),
        })?;

        let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| FeedError::Decode {
            resource,
            message: e.to_string(),
        })?;

        debug!(resource = %resource, count = records.len(), "collection decoded");
        Ok(records)
    }
}

#[async_trait]
impl ResourceSource for HttpResourceSource {
    async fn fetch_posts(&self) -> FeedResult<Vec<Post>> {
        self.get_collection(ResourceKind::Posts).await
    }

    async fn fetch_users(&self) -> FeedResult<Vec<User>> {
        self.get_collection(ResourceKind::Users).await
    }

    async fn fetch_comments(&self) -> FeedResult<Vec<Comment>> {
        self.get_collection(ResourceKind::Comments).await
    }
}
