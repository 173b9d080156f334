//! Shared fixtures and helpers for feed integration tests

#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use feed::{FeedResult, ResourceSource};
use shared::{Comment, Post, User};

pub fn posts_json() -> Value {
    json!([
        {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
        {"userId": 99, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
    ])
}

pub fn users_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Ana",
            "username": "ana",
            "email": "ana@example.com",
            "address": {"street": "Kulas Light", "city": "Gwenborough"}
        }
    ])
}

pub fn comments_json() -> Value {
    json!([
        {"postId": 1, "id": 9, "name": "Bo", "email": "bo@example.com", "body": "hi"},
        {"postId": 3, "id": 11, "name": "Zed", "email": "zed@example.com", "body": "elsewhere"}
    ])
}

/// Serve `body` with `status` on `GET /{resource}`
pub async fn serve(server: &MockServer, resource: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{resource}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mock server answering all three collections successfully
pub async fn healthy_server() -> MockServer {
    let server = MockServer::start().await;
    serve(&server, "posts", 200, posts_json()).await;
    serve(&server, "users", 200, users_json()).await;
    serve(&server, "comments", 200, comments_json()).await;
    server
}

pub fn sample_post() -> Post {
    Post {
        id: 1,
        user_id: 1,
        title: "hello".to_string(),
        body: "world".to_string(),
    }
}

pub fn sample_user() -> User {
    User {
        id: 1,
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
    }
}

pub fn sample_comment() -> Comment {
    Comment {
        post_id: 1,
        id: 9,
        name: "Bo".to_string(),
        email: "bo@example.com".to_string(),
        body: "hi".to_string(),
    }
}

/// Source whose posts request blocks until released
///
/// `started` is notified as soon as the request is in flight.
#[derive(Clone, Default)]
pub struct GatedSource {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceSource for GatedSource {
    async fn fetch_posts(&self) -> FeedResult<Vec<Post>> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(vec![sample_post()])
    }

    async fn fetch_users(&self) -> FeedResult<Vec<User>> {
        Ok(vec![sample_user()])
    }

    async fn fetch_comments(&self) -> FeedResult<Vec<Comment>> {
        Ok(vec![sample_comment()])
    }
}
