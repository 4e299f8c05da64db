//! Main panel application model implementing the MVU pattern.
//!
//! This module provides the core state and update logic for the comments
//! panel. It owns the feed, the submission form, and the load-state guard,
//! and coordinates async store commands with synchronous state transitions.
//!
//! # Module Structure
//!
//! - `data_handlers`: intent and store-result handling
//! - `rendering`: view rendering methods for terminal output
//! - `model_impl`: `bubbletea_rs::Model` wiring

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::panel::components::{CommentFormComponent, CommentListComponent};
use crate::panel::state::{CommentFeed, FormFocus, FormState, LoadState};
use crate::store::{Comment, CommentStore, PageSize};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::messages::PanelMsg;

mod data_handlers;
mod model_impl;
mod rendering;


/// Main application model for the comments panel.
pub struct CommentsPanel {
    /// Paged comment feed with cursor and exhaustion tracking.
    feed: CommentFeed,
    /// Submission form buffers and focus.
    form: FormState,
    /// Guard against concurrent store requests.
    load_state: LoadState,
    /// Non-blocking notice shown in the status bar.
    notice: Option<String>,
    /// Persistent load-failure message shown in place of the empty state.
    feed_error: Option<String>,
    page_size: PageSize,
    store: Arc<dyn CommentStore>,
    telemetry: Arc<dyn TelemetrySink>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    has_initialized: bool,
    list: CommentListComponent,
    form_component: CommentFormComponent,
}

impl CommentsPanel {
    /// Creates a panel over the given store with an empty feed.
    #[must_use]
    pub fn new(store: Arc<dyn CommentStore>, page_size: PageSize) -> Self {
        Self {
            feed: CommentFeed::new(),
            form: FormState::default(),
            load_state: LoadState::Idle,
            notice: None,
            feed_error: None,
            page_size,
            store,
            telemetry: Arc::new(NoopTelemetrySink),
            width: 80,
            height: 24,
            has_initialized: false,
            list: CommentListComponent::new(),
            form_component: CommentFormComponent::new(),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Comments currently displayed, in display order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        self.feed.comments()
    }

    /// Number of comments currently displayed.
    #[must_use]
    pub const fn comment_count(&self) -> usize {
        self.feed.len()
    }

    /// Returns true while a store request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    /// Returns true until the collection is exhausted.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.feed.has_more()
    }

    /// Next page index the panel will request.
    #[must_use]
    pub const fn page_cursor(&self) -> u32 {
        self.feed.page_cursor()
    }

    /// Current author input buffer.
    #[must_use]
    pub fn author_input(&self) -> &str {
        self.form.author()
    }

    /// Current body input buffer.
    #[must_use]
    pub fn body_input(&self) -> &str {
        self.form.body()
    }

    /// Currently focused form element.
    #[must_use]
    pub const fn focus(&self) -> FormFocus {
        self.form.focus()
    }

    /// Current status-bar notice, if any.
    #[must_use]
    pub fn status_notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Persistent inline load-failure message, if any.
    #[must_use]
    pub fn feed_error(&self) -> Option<&str> {
        self.feed_error.as_deref()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function: every gesture, store result, and
    /// lifecycle event passes through here.
    pub fn handle_message(&mut self, msg: &PanelMsg) -> Option<Cmd> {
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        match msg {
            PanelMsg::SubmitRequested => self.handle_submit_requested(),
            PanelMsg::LoadMoreRequested => self.handle_load_more_requested(),
            PanelMsg::Initialized => self.handle_initialized(),
            PanelMsg::Quit => Some(bubbletea_rs::quit()),
            PanelMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => None,
        }
    }

    /// Dispatches form editing messages.
    fn handle_form_msg(&mut self, msg: &PanelMsg) -> Option<Cmd> {
        match msg {
            PanelMsg::FocusNext => self.form.focus_next(),
            PanelMsg::FocusPrevious => self.form.focus_previous(),
            PanelMsg::InputChar(ch) => self.form.push_char(*ch),
            PanelMsg::InputBackspace => self.form.pop_char(),
            _ => {
                // Unreachable: caller filters to form messages.
            }
        }
        None
    }
}
