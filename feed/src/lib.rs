//! Feed library for the postboard workspace
//!
//! Fetches posts, users and comments from a JSONPlaceholder-style REST API
//! behind an all-or-nothing barrier, joins them by foreign key and renders
//! the result according to a three-way view state.

pub mod error;
pub mod types;
pub mod traits;
pub mod state;
pub mod core;
pub mod feed_impl;
pub mod services;

// Re-export main types
pub use error::{FeedError, FeedResult, FALLBACK_ERROR_MESSAGE};
pub use types::*;
pub use traits::*;
pub use crate::core::{
    fetch_collections, join_posts, render_view, JoinedPost, ViewPhase, ViewState, UNKNOWN_AUTHOR,
};
pub use feed_impl::Feed;
pub use services::*;
