//! Service implementations

pub mod html_renderer;

#[cfg(test)]
pub mod tests;

pub use html_renderer::{escape_html, HtmlRenderer};
