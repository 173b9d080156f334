//! Webserver library for postboard
//!
//! Serves the joined feed as an HTML page and as JSON. Every page load is
//! one mount of the feed: one fetch cycle, rendered once it settles.

pub mod error;
pub mod services;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use services::HtmlRenderer;
pub use state::AppState;
pub use webserver_impl::WebServer;
