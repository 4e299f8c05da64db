//! Intent and store-result handlers for the comments panel.
//!
//! Intents validate input and snapshot the page window synchronously, then
//! hand the actual store call to an async command. Completion messages merge
//! the result back into the feed on the single update path, so the loading
//! guard is the only synchronisation required.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use crate::panel::state::{LoadState, PageMode};
use crate::store::models::normalise_author;
use crate::store::Comment;
use crate::telemetry::TelemetryEvent;

use super::CommentsPanel;
use super::PanelMsg;

impl CommentsPanel {
    /// Dispatches store-result messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &PanelMsg) -> Option<Cmd> {
        match msg {
            PanelMsg::PageLoaded {
                comments,
                mode,
                latency_ms,
            } => self.handle_page_loaded(comments, *mode, *latency_ms),
            PanelMsg::PageFailed(message) => self.handle_page_failed(message),
            PanelMsg::CommentPosted {
                comment,
                latency_ms,
            } => self.handle_comment_posted(comment, *latency_ms),
            PanelMsg::PostFailed(message) => self.handle_post_failed(message),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Handles a submission intent.
    ///
    /// A trimmed-empty body is silently ignored without a store call; a
    /// blank author is replaced with the anonymous label before the request
    /// is issued.
    pub(super) fn handle_submit_requested(&mut self) -> Option<Cmd> {
        if self.load_state.is_loading() {
            return None;
        }
        let body = self.form.body().trim().to_owned();
        if body.is_empty() {
            return None;
        }
        let author = normalise_author(Some(self.form.author().trim().to_owned()));

        self.load_state = LoadState::Loading;
        self.notice = None;
        Some(self.create_cmd(author, body))
    }

    /// Handles a load-more intent, always an appending fetch.
    pub(super) fn handle_load_more_requested(&mut self) -> Option<Cmd> {
        self.start_fetch(PageMode::Append)
    }

    /// Handles the synthetic startup message by issuing the initial
    /// (replacing) page fetch. Subsequent `Initialized` messages are
    /// ignored.
    pub(super) fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }
        self.has_initialized = true;
        self.start_fetch(PageMode::Replace)
    }

    /// Issues a page fetch unless the loading guard or the exhaustion flag
    /// forbids it.
    fn start_fetch(&mut self, mode: PageMode) -> Option<Cmd> {
        if self.load_state.is_loading() || !self.feed.should_fetch(mode) {
            return None;
        }
        self.load_state = LoadState::Loading;
        self.notice = None;
        Some(self.fetch_page_cmd(mode))
    }

    fn handle_page_loaded(
        &mut self,
        comments: &[Comment],
        mode: PageMode,
        latency_ms: u64,
    ) -> Option<Cmd> {
        let item_count = comments.len();
        self.feed.apply_page(comments.to_vec(), mode, self.page_size);
        self.load_state = LoadState::Idle;
        self.notice = None;
        self.feed_error = None;

        self.telemetry.record(TelemetryEvent::PageFetched {
            latency_ms,
            item_count,
            exhausted: !self.feed.has_more(),
        });
        None
    }

    fn handle_page_failed(&mut self, message: &str) -> Option<Cmd> {
        tracing::warn!("page fetch failed: {message}");
        self.load_state = LoadState::Idle;
        self.notice = Some(message.to_owned());
        // Shown in place of the empty-state placeholder while the feed is
        // empty; existing comments stay untouched.
        self.feed_error = Some(message.to_owned());
        None
    }

    fn handle_comment_posted(&mut self, comment: &Comment, latency_ms: u64) -> Option<Cmd> {
        self.feed.prepend(comment.clone());
        self.form.clear_body();
        self.load_state = LoadState::Idle;
        self.notice = None;

        self.telemetry
            .record(TelemetryEvent::CommentPosted { latency_ms });
        None
    }

    fn handle_post_failed(&mut self, message: &str) -> Option<Cmd> {
        tracing::warn!("comment submission failed: {message}");
        self.load_state = LoadState::Idle;
        self.notice = Some(message.to_owned());
        None
    }

    /// Builds the async command for a page fetch.
    ///
    /// The window is snapshotted now, on the update path; the command only
    /// performs the store call.
    fn fetch_page_cmd(&self, mode: PageMode) -> Cmd {
        let store = Arc::clone(&self.store);
        let window = self.feed.next_window(self.page_size);
        Box::pin(async move {
            let started = Instant::now();
            match store.list_page(window.offset, window.limit).await {
                Ok(comments) => {
                    let latency_ms = elapsed_ms(started);
                    Some(Box::new(PanelMsg::PageLoaded {
                        comments,
                        mode,
                        latency_ms,
                    }) as Box<dyn Any + Send>)
                }
                Err(error) => Some(Box::new(PanelMsg::load_failed(&error)) as Box<dyn Any + Send>),
            }
        })
    }

    /// Builds the async command for a comment submission.
    fn create_cmd(&self, author: String, body: String) -> Cmd {
        let store = Arc::clone(&self.store);
        Box::pin(async move {
            let started = Instant::now();
            match store.create(&author, &body).await {
                Ok(comment) => {
                    let latency_ms = elapsed_ms(started);
                    Some(Box::new(PanelMsg::CommentPosted {
                        comment,
                        latency_ms,
                    }) as Box<dyn Any + Send>)
                }
                Err(error) => Some(Box::new(PanelMsg::post_failed(&error)) as Box<dyn Any + Send>),
            }
        })
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the initial page load without
    /// waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(PanelMsg::Initialized) as Box<dyn Any + Send>) })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Latency over u64::MAX milliseconds is unrealistic"
)]
fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
