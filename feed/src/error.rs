//! Feed error types

use thiserror::Error;
use shared::{MountId, ResourceKind, SharedError};

/// Message shown when a failure carries no text of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Feed error types
///
/// Every fetch-side variant collapses into a single user-facing string via
/// [`FeedError::user_message`]; the variants exist for logging.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request for {resource} failed: {message}")]
    Network { resource: ResourceKind, message: String },

    #[error("Failed to fetch {resource}: HTTP {status}")]
    Status { resource: ResourceKind, status: u16 },

    #[error("Malformed {resource} payload: {message}")]
    Decode { resource: ResourceKind, message: String },

    #[error("Invalid endpoint for {resource}: {message}")]
    InvalidUrl { resource: ResourceKind, message: String },

    #[error("Feed is already mounted ({mount_id})")]
    AlreadyMounted { mount_id: MountId },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl FeedError {
    /// The single string shown to the user for this failure
    pub fn user_message(&self) -> String {
        let detail = match self {
            FeedError::Network { message, .. }
            | FeedError::Decode { message, .. }
            | FeedError::InvalidUrl { message, .. }
            | FeedError::ConfigError { message } => Some(message.as_str()),
            _ => None,
        };

        match detail {
            Some(detail) if detail.trim().is_empty() => FALLBACK_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}
