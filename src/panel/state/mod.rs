//! State management for the comments panel.
//!
//! This module provides the pure state types behind the panel: the paged
//! comment feed and the load-state guard. All transitions are synchronous;
//! the async plumbing lives in the application model.

mod feed;
mod form;

pub use feed::{CommentFeed, PageMode, PageWindow};
pub use form::{FormFocus, FormState};

/// Whether a store request is currently in flight.
///
/// The two states are mutually exclusive and guard the panel against
/// issuing a second request while one is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No request in flight; intents are accepted.
    #[default]
    Idle,
    /// A request is in flight; new intents are ignored.
    Loading,
}

impl LoadState {
    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}
