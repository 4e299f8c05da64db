//! Message types for the panel update loop.
//!
//! This module defines all message types that can be sent to the panel's
//! update function. Messages represent user gestures, async command results,
//! and system events; they are the only way state transitions happen.

use crate::store::{Comment, StoreError};

use super::state::PageMode;

/// Messages for the comments panel.
#[derive(Debug, Clone)]
pub enum PanelMsg {
    // Form editing
    /// Move focus to the next form element.
    FocusNext,
    /// Move focus to the previous form element.
    FocusPrevious,
    /// Append a character to the focused input buffer.
    InputChar(char),
    /// Delete the last character of the focused input buffer.
    InputBackspace,

    // Intents
    /// Submit the current form content as a new comment.
    SubmitRequested,
    /// Fetch the next page of comments.
    LoadMoreRequested,

    // Command results
    /// A page fetch completed successfully.
    PageLoaded {
        /// Comments in the fetched page, newest-first.
        comments: Vec<Comment>,
        /// Whether the page replaces or extends the feed.
        mode: PageMode,
        /// Round-trip latency in milliseconds.
        latency_ms: u64,
    },
    /// A page fetch failed.
    PageFailed(String),
    /// A comment submission was persisted.
    CommentPosted {
        /// The stored comment as echoed by the store.
        comment: Comment,
        /// Round-trip latency in milliseconds.
        latency_ms: u64,
    },
    /// A comment submission failed.
    PostFailed(String),

    // Application lifecycle
    /// Synthetic startup event; triggers the initial page load.
    Initialized,
    /// Quit the panel.
    Quit,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl PanelMsg {
    /// Creates a load-failure message from a store error.
    #[must_use]
    pub fn load_failed(error: &StoreError) -> Self {
        Self::PageFailed(error.to_string())
    }

    /// Creates a submission-failure message from a store error.
    #[must_use]
    pub fn post_failed(error: &StoreError) -> Self {
        Self::PostFailed(error.to_string())
    }

    /// Returns true for messages produced by completed store commands.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::PageLoaded { .. }
                | Self::PageFailed(_)
                | Self::CommentPosted { .. }
                | Self::PostFailed(_)
        )
    }

    /// Returns true for form editing messages.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FocusNext | Self::FocusPrevious | Self::InputChar(_) | Self::InputBackspace
        )
    }
}
