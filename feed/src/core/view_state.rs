//! Three-way view state gate deciding which render path runs

use std::fmt;
use serde::Serialize;

use crate::core::joiner::join_posts;
use crate::error::FeedResult;
use crate::traits::Renderer;
use crate::types::Collections;

/// View state of one mount
///
/// Starts in `Loading`; a settled fetch moves it to `Error` or `Ready`,
/// both of which are terminal until the feed is unmounted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error { message: String },
    Ready(Collections),
}

/// Discriminant of [`ViewState`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    Loading,
    Error,
    Ready,
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewPhase::Loading => write!(f, "loading"),
            ViewPhase::Error => write!(f, "error"),
            ViewPhase::Ready => write!(f, "ready"),
        }
    }
}

impl ViewState {
    pub fn phase(&self) -> ViewPhase {
        match self {
            ViewState::Loading => ViewPhase::Loading,
            ViewState::Error { .. } => ViewPhase::Error,
            ViewState::Ready(_) => ViewPhase::Ready,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn collections(&self) -> Option<&Collections> {
        match self {
            ViewState::Ready(collections) => Some(collections),
            _ => None,
        }
    }

    /// Apply the outcome of a fetch cycle
    ///
    /// Only `Loading` accepts an outcome. Returns `false` and leaves the
    /// state untouched when it has already settled.
    pub fn settle(&mut self, outcome: FeedResult<Collections>) -> bool {
        if !self.is_loading() {
            return false;
        }

        *self = match outcome {
            Ok(collections) => ViewState::Ready(collections),
            Err(error) => ViewState::Error {
                message: error.user_message(),
            },
        };
        true
    }
}

/// Run the render path matching the current state
pub fn render_view<R>(renderer: &R, view: &ViewState) -> FeedResult<String>
where
    R: Renderer + ?Sized,
{
    match view {
        ViewState::Loading => renderer.loading(),
        ViewState::Error { message } => renderer.error(message),
        ViewState::Ready(collections) => renderer.posts(&join_posts(collections)),
    }
}
