//! REST API handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use feed::{FeedDocument, ResourceSource, ViewPhase};

use crate::state::AppState;
use super::settle_feed;

/// Joined feed as JSON - `/api/feed`
///
/// `200` with the posts when every request succeeded, `502` with the error
/// message otherwise.
pub async fn get_feed<S>(State(state): State<Arc<AppState<S>>>) -> Response
where
    S: ResourceSource + Clone + 'static,
{
    let view = settle_feed(state.new_feed()).await;
    let document = FeedDocument::from_view(&view);

    let status = match document.status {
        ViewPhase::Ready => StatusCode::OK,
        ViewPhase::Error => StatusCode::BAD_GATEWAY,
        ViewPhase::Loading => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(document)).into_response()
}

/// Liveness probe - `/health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
