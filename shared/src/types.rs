//! Core types used throughout the postboard workspace

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::errors::SharedError;

/// Global component ID singleton - set once at startup
static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Identifier for the binary emitting traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComponentId {
    /// Terminal client
    #[default]
    Cli,
    /// HTTP server rendering the feed as HTML
    WebServer,
}

impl ComponentId {
    /// Initialize the global component ID for the terminal client
    pub fn init_cli() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Cli)
    }

    /// Initialize the global component ID for the web server
    pub fn init_webserver() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::WebServer)
    }

    /// Get the global component ID, falling back to the CLI when uninitialized
    pub fn current() -> ComponentId {
        COMPONENT_ID.get().copied().unwrap_or_default()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Cli => write!(f, "cli"),
            ComponentId::WebServer => write!(f, "webserver"),
        }
    }
}

/// Identity of one mount of a feed; a fetch result is only accepted by the
/// mount that started it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountId(Uuid);

impl MountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blog post. `user_id` references [`User::id`] but the source gives no
/// referential-integrity guarantee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// A post author. Extra fields in the payload (address, company...) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A comment left on a post, `post_id` references [`Post::id`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Collections exposed by the REST source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Posts,
    Users,
    Comments,
}

impl ResourceKind {
    /// Endpoint path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Posts => "posts",
            ResourceKind::Users => "users",
            ResourceKind::Comments => "comments",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Which collections a feed pulls before it can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedVariant {
    /// Posts with their author and comment thread
    #[default]
    Full,
    /// Posts with their author only
    PostsAndUsers,
}

impl FeedVariant {
    /// Resources that must all be fetched successfully for this variant
    pub fn resources(&self) -> &'static [ResourceKind] {
        match self {
            FeedVariant::Full => &[ResourceKind::Posts, ResourceKind::Comments, ResourceKind::Users],
            FeedVariant::PostsAndUsers => &[ResourceKind::Posts, ResourceKind::Users],
        }
    }

    pub fn includes(&self, kind: ResourceKind) -> bool {
        self.resources().contains(&kind)
    }
}

impl fmt::Display for FeedVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedVariant::Full => write!(f, "full"),
            FeedVariant::PostsAndUsers => write!(f, "posts-and-users"),
        }
    }
}

impl FromStr for FeedVariant {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(FeedVariant::Full),
            "posts-and-users" | "posts_and_users" => Ok(FeedVariant::PostsAndUsers),
            _ => Err(SharedError::UnknownVariant { input: s.to_string() }),
        }
    }
}
