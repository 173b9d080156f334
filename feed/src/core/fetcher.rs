//! All-or-nothing fetch of the collections a variant needs

use futures_util::future::try_join3;
use shared::{FeedVariant, ResourceKind};
use tracing::debug;

use crate::error::FeedResult;
use crate::traits::ResourceSource;
use crate::types::Collections;

/// Fetch every collection required by `variant` concurrently
///
/// Resolves once all requests have succeeded, or with the first failure.
/// A failure drops the requests still in flight; nothing partial is returned.
pub async fn fetch_collections<S>(source: &S, variant: FeedVariant) -> FeedResult<Collections>
where
    S: ResourceSource + ?Sized,
{
    debug!(variant = %variant, resources = ?variant.resources(), "fetching collections");

    let comments = async {
        if variant.includes(ResourceKind::Comments) {
            source.fetch_comments().await
        } else {
            Ok(Vec::new())
        }
    };

    let (posts, comments, users) = try_join3(source.fetch_posts(), comments, source.fetch_users()).await?;

    debug!(
        posts = posts.len(),
        users = users.len(),
        comments = comments.len(),
        "collections fetched"
    );

    Ok(Collections { posts, users, comments })
}
