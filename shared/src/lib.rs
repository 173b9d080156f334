//! Shared types for the postboard workspace
//!
//! Contains the record types served by the demo REST API, the resource
//! catalogue each feed variant draws from, and the tracing setup used by
//! every binary in the workspace.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
