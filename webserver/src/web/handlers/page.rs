//! HTML page handler

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use feed::{render_view, ResourceSource};
use shared::{logging, ComponentId};

use crate::services::HtmlRenderer;
use crate::state::AppState;
use super::settle_feed;

/// Render the feed page - `/`
///
/// A failed fetch still answers 200 with the error screen; reloading the
/// page is the retry path.
pub async fn feed_page<S>(State(state): State<Arc<AppState<S>>>) -> Response
where
    S: ResourceSource + Clone + 'static,
{
    let view = settle_feed(state.new_feed()).await;

    match render_view(&HtmlRenderer::new(), &view) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            logging::log_error(ComponentId::current(), "Page render", &error);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
