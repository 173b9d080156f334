//! Feed services implementations

pub mod http_source;
pub mod text_renderer;
pub mod json_renderer;

#[cfg(test)]
pub mod tests;

pub use http_source::*;
pub use text_renderer::*;
pub use json_renderer::*;
