//! Request handlers

pub mod api;
pub mod page;

use feed::{Feed, ResourceSource, ViewState};
use shared::{logging, ComponentId};

/// Run one full mount of `feed` and return the settled view
///
/// The feed is unmounted before returning; a request never shares a mount.
pub(crate) async fn settle_feed<S>(feed: Feed<S>) -> ViewState
where
    S: ResourceSource,
{
    let view = match feed.mount().await {
        Ok(_) => feed.view().await,
        Err(error) => {
            logging::log_error(ComponentId::current(), "Feed mount", &error);
            ViewState::Error {
                message: error.user_message(),
            }
        }
    };
    feed.unmount().await;
    view
}
