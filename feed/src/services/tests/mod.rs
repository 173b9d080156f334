//! Tests for feed services
//!
//! Renderers are exercised against hand-built collections; the HTTP source
//! is covered here for configuration and in `tests/` against a mock server.
