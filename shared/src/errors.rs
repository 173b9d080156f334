//! Shared error types for the postboard workspace

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Unknown feed variant: {input} (expected 'full' or 'posts-and-users')")]
    UnknownVariant { input: String },

}

pub type SharedResult<T> = Result<T, SharedError>;
