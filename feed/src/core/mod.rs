//! Feed core business logic

pub mod fetcher;
pub mod joiner;
pub mod view_state;

pub use fetcher::fetch_collections;
pub use joiner::{comments_for, find_author, image_url, join_posts, JoinedPost, UNKNOWN_AUTHOR};
pub use view_state::{render_view, ViewPhase, ViewState};
