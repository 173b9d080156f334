//! Main webserver implementation
//!
//! Wires the request-scoped feed handlers into an axum router and runs it
//! until Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use feed::{FeedConfig, ResourceSource};
use shared::{component_info, logging, ComponentId};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::{api, page};

/// Webserver with an injected resource source
pub struct WebServer<S>
where
    S: ResourceSource + Clone + 'static,
{
    bind_address: SocketAddr,
    state: Arc<AppState<S>>,
}

impl<S> WebServer<S>
where
    S: ResourceSource + Clone + 'static,
{
    pub fn new(bind_address: SocketAddr, config: FeedConfig, source: S) -> Self {
        Self {
            bind_address,
            state: Arc::new(AppState::new(config, source)),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(page::feed_page::<S>))
            .route("/api/feed", get(api::get_feed::<S>))
            .route("/health", get(api::health))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.state.clone())
    }

    /// Start the webserver and serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let component = ComponentId::current();
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e)))?;

        component_info!(component, "🌐 Web server listening on http://{}", self.bind_address);
        component_info!(
            component,
            "📊 Feed ({}) from {} at http://{}/",
            self.state.config.variant,
            self.state.config.base_url,
            self.bind_address
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => logging::log_shutdown(component, "Received Ctrl+C signal"),
                    Err(err) => logging::log_error(component, "Signal handling", &err),
                }
            })
            .await?;

        Ok(())
    }
}
