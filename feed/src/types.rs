//! Feed-specific data types

use std::time::Duration;
use serde::Serialize;
use shared::{Comment, FeedVariant, MountId, Post, User};

use crate::core::ViewState;
use crate::error::{FeedError, FeedResult};

/// Public demo API used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Per-request timeout applied by the HTTP source
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "POSTBOARD_BASE_URL";
pub const ENV_VARIANT: &str = "POSTBOARD_VARIANT";
pub const ENV_TIMEOUT_SECS: &str = "POSTBOARD_TIMEOUT_SECS";
pub const ENV_DELAY_MS: &str = "POSTBOARD_DELAY_MS";

/// Configuration for one feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub base_url: String,
    pub variant: FeedVariant,
    pub request_timeout: Duration,
    /// Pause before the fetch starts, keeping the loading state visible
    pub startup_delay: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            variant: FeedVariant::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            startup_delay: Duration::ZERO,
        }
    }
}

impl FeedConfig {
    /// Load configuration from process environment variables, defaults for anything unset
    pub fn from_env() -> FeedResult<Self> {
        Self::from_env_with(|_| None)
    }

    /// Load configuration with `overrides` taking precedence over the environment
    ///
    /// `overrides` answers for the same `POSTBOARD_*` keys, typically from
    /// command line flags; an environment value it shadows is never parsed.
    pub fn from_env_with<O>(overrides: O) -> FeedResult<Self>
    where
        O: Fn(&str) -> Option<String>,
    {
        Self::from_layers(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration from two lookups, the first one winning per key
    pub fn from_layers<O, E>(overrides: O, env: E) -> FeedResult<Self>
    where
        O: Fn(&str) -> Option<String>,
        E: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| non_blank(overrides(key)).or_else(|| non_blank(env(key))))
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Blank values count as unset. The result is validated once every key
    /// has been applied.
    pub fn from_lookup<F>(lookup: F) -> FeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| non_blank(lookup(key));
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(variant) = lookup(ENV_VARIANT) {
            config.variant = variant.parse()?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(millis) = lookup(ENV_DELAY_MS) {
            config.startup_delay = Duration::from_millis(parse_number(ENV_DELAY_MS, &millis)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the HTTP source cannot work with
    pub fn validate(&self) -> FeedResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(FeedError::ConfigError {
                message: "Base URL must not be empty".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(FeedError::ConfigError {
                message: "Request timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number(key: &str, value: &str) -> FeedResult<u64> {
    value.trim().parse().map_err(|_| FeedError::ConfigError {
        message: format!("{key} must be a non-negative integer, got '{value}'"),
    })
}

/// Collections populated by one fetch cycle
///
/// `comments` stays empty for variants that never request them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collections {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub comments: Vec<Comment>,
}

/// State owned by a feed for the lifetime of its mounts
#[derive(Debug, Default)]
pub struct FeedState {
    /// Active mount, `None` while unmounted
    pub mount_id: Option<MountId>,
    pub view: ViewState,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount_id.is_some()
    }
}
