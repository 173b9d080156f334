//! Mount lifecycle of the Feed controller
//!
//! Covers the loading → ready / loading → error transitions, the one fetch
//! per mount rule and the unmount guard.

mod common;

use std::sync::Arc;
use std::time::Duration;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::MockServer;

use common::{comments_json, healthy_server, posts_json, sample_post, sample_user, serve, users_json, GatedSource};
use feed::{
    join_posts, render_view, Feed, FeedConfig, FeedError, HttpResourceSource, MockResourceSource, TextRenderer,
    ViewPhase, UNKNOWN_AUTHOR,
};
use shared::{FeedVariant, ResourceKind};

fn config_for(server: &MockServer, variant: FeedVariant) -> FeedConfig {
    FeedConfig {
        base_url: server.uri(),
        variant,
        request_timeout: Duration::from_secs(5),
        ..FeedConfig::default()
    }
}

fn http_feed(server: &MockServer, variant: FeedVariant) -> Feed<HttpResourceSource> {
    let config = config_for(server, variant);
    let source = HttpResourceSource::from_config(&config).unwrap();
    Feed::new(config, source)
}

#[tokio::test]
async fn test_successful_mount_becomes_ready() {
    let server = healthy_server().await;
    let feed = http_feed(&server, FeedVariant::Full);

    assert!(feed.view().await.is_loading());
    assert_ok!(feed.mount().await);

    let view = feed.view().await;
    assert_eq!(view.phase(), ViewPhase::Ready);
    assert!(!view.is_loading());
    assert!(view.error().is_none());

    let collections = view.collections().unwrap();
    let joined = join_posts(collections);
    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].author_label(), "Ana");
    assert_eq!(joined[0].comments.len(), 1);
    assert_eq!(joined[0].comments[0].name, "Bo");
    assert_eq!(joined[1].author_label(), UNKNOWN_AUTHOR);
    assert!(joined[1].comments.is_empty());
}

#[tokio::test]
async fn test_posts_and_users_variant_ignores_comments_endpoint() {
    let server = MockServer::start().await;
    serve(&server, "posts", 200, posts_json()).await;
    serve(&server, "users", 200, users_json()).await;
    // A broken comments endpoint must not matter for this variant
    serve(&server, "comments", 500, json!({})).await;

    let feed = http_feed(&server, FeedVariant::PostsAndUsers);
    feed.mount().await.unwrap();

    let view = feed.view().await;
    assert_eq!(view.phase(), ViewPhase::Ready);
    assert!(view.collections().unwrap().comments.is_empty());
}

#[tokio::test]
async fn test_any_failed_request_moves_to_error() {
    let server = MockServer::start().await;
    serve(&server, "posts", 200, posts_json()).await;
    serve(&server, "users", 500, json!({"error": "boom"})).await;
    serve(&server, "comments", 200, comments_json()).await;

    let feed = http_feed(&server, FeedVariant::Full);
    feed.mount().await.unwrap();

    let view = feed.view().await;
    assert_eq!(view.phase(), ViewPhase::Error);
    assert!(!view.is_loading());
    assert!(view.collections().is_none());
    assert_eq!(view.error(), Some("Failed to fetch users: HTTP 500"));

    let screen = render_view(&TextRenderer::new(), &view).unwrap();
    assert_eq!(screen, "Failed to fetch data: Failed to fetch users: HTTP 500");
}

#[tokio::test]
async fn test_failing_comments_fail_full_variant() {
    let server = MockServer::start().await;
    serve(&server, "posts", 200, posts_json()).await;
    serve(&server, "users", 200, users_json()).await;
    serve(&server, "comments", 503, json!({})).await;

    let feed = http_feed(&server, FeedVariant::Full);
    feed.mount().await.unwrap();

    assert_eq!(feed.view().await.error(), Some("Failed to fetch comments: HTTP 503"));
}

#[tokio::test]
async fn test_rejected_request_gives_non_empty_message() {
    let mut source = MockResourceSource::new();
    source.expect_fetch_posts().returning(|| {
        Err(FeedError::Network {
            resource: ResourceKind::Posts,
            message: "connection reset".to_string(),
        })
    });
    source.expect_fetch_users().returning(|| Ok(vec![sample_user()]));
    source.expect_fetch_comments().returning(|| Ok(vec![]));

    let feed = Feed::new(FeedConfig::default(), source);
    feed.mount().await.unwrap();

    let view = feed.view().await;
    assert!(!view.is_loading());
    let message = view.error().unwrap();
    assert!(!message.is_empty());
    assert!(message.contains("connection reset"));
}

#[tokio::test]
async fn test_second_mount_is_rejected() {
    let mut source = MockResourceSource::new();
    source.expect_fetch_posts().times(1).returning(|| Ok(vec![sample_post()]));
    source.expect_fetch_users().times(1).returning(|| Ok(vec![sample_user()]));
    source.expect_fetch_comments().times(1).returning(|| Ok(vec![]));

    let feed = Feed::new(FeedConfig::default(), source);
    let mount_id = feed.mount().await.unwrap();

    match feed.mount().await {
        Err(FeedError::AlreadyMounted { mount_id: existing }) => assert_eq!(existing, mount_id),
        other => panic!("expected AlreadyMounted, got {other:?}"),
    }
    assert_eq!(feed.view().await.phase(), ViewPhase::Ready);
}

#[tokio::test]
async fn test_remount_after_unmount_fetches_again() {
    let mut source = MockResourceSource::new();
    source.expect_fetch_posts().times(2).returning(|| Ok(vec![sample_post()]));
    source.expect_fetch_users().times(2).returning(|| Ok(vec![sample_user()]));
    source.expect_fetch_comments().times(2).returning(|| Ok(vec![]));

    let feed = Feed::new(FeedConfig::default(), source);
    let first = feed.mount().await.unwrap();
    feed.unmount().await;

    assert!(!feed.is_mounted().await);
    assert!(feed.view().await.is_loading());

    let second = feed.mount().await.unwrap();
    assert_ne!(first, second);
    assert_eq!(feed.view().await.phase(), ViewPhase::Ready);
}

#[tokio::test]
async fn test_view_stays_loading_while_requests_are_in_flight() {
    let source = GatedSource::new();
    let feed = Arc::new(Feed::new(FeedConfig::default(), source.clone()));

    let task = {
        let feed = feed.clone();
        tokio::spawn(async move { feed.mount().await })
    };

    source.started.notified().await;
    assert!(feed.is_mounted().await);
    assert!(feed.view().await.is_loading());

    source.release.notify_one();
    task.await.unwrap().unwrap();
    assert_eq!(feed.view().await.phase(), ViewPhase::Ready);
}

#[tokio::test]
async fn test_result_after_unmount_is_discarded() {
    let source = GatedSource::new();
    let feed = Arc::new(Feed::new(FeedConfig::default(), source.clone()));

    let task = {
        let feed = feed.clone();
        tokio::spawn(async move { feed.mount().await })
    };

    source.started.notified().await;
    feed.unmount().await;
    source.release.notify_one();
    task.await.unwrap().unwrap();

    assert!(!feed.is_mounted().await);
    assert!(feed.view().await.is_loading());
}

#[tokio::test]
async fn test_startup_delay_keeps_loading_state_visible() {
    let server = healthy_server().await;
    let config = FeedConfig {
        startup_delay: Duration::from_millis(200),
        ..config_for(&server, FeedVariant::Full)
    };
    let source = HttpResourceSource::from_config(&config).unwrap();
    let feed = Arc::new(Feed::new(config, source));

    let task = {
        let feed = feed.clone();
        tokio::spawn(async move { feed.mount().await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(feed.view().await.is_loading());

    task.await.unwrap().unwrap();
    assert_eq!(feed.view().await.phase(), ViewPhase::Ready);
}
