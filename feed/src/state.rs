//! Feed state management

use std::sync::Arc;
use tokio::sync::RwLock;
use crate::types::FeedState;

/// Shared feed state wrapper
pub type SharedFeedState = Arc<RwLock<FeedState>>;

/// Create new shared feed state, unmounted and loading
pub fn create_shared_state() -> SharedFeedState {
    Arc::new(RwLock::new(FeedState::new()))
}
