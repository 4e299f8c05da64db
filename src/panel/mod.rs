//! Terminal panel for viewing and posting delivery comments.
//!
//! # Architecture
//!
//! The panel follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: application state in [`app::CommentsPanel`]
//! - **View**: pure rendering in [`components`] and `app::rendering`
//! - **Update**: message-driven transitions in `CommentsPanel::handle_message`
//!
//! UI gestures never call the store directly: keys map to [`messages::PanelMsg`]
//! intents, the update path validates and transitions, and async commands
//! carry the store I/O. Completions come back as messages on the same path,
//! so at most one request is ever in flight.
//!
//! # Panel context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the store and paging configuration are handed over through
//! module-level storage: call [`set_panel_context`] before [`run_panel`].
//! Unlike a one-shot cell, the context is replaceable so that bulk mounting
//! can run several panels sequentially in one process.
//!
//! There is no cancellation path for in-flight requests: a store call runs
//! to completion or failure, and when the program exits first the runtime
//! drops the pending command, so a late completion is never delivered to a
//! torn-down model.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::store::{Comment, CommentStore, PageSize, StoreError};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

mod style;

pub use app::CommentsPanel;

/// Everything `CommentsPanel::init` needs to build a working panel.
#[derive(Clone)]
pub struct PanelContext {
    /// Comment store scoped to one delivery record.
    pub store: Arc<dyn CommentStore>,
    /// Comments fetched per page.
    pub page_size: PageSize,
    /// Telemetry sink for fetch and submission events.
    pub telemetry: Arc<dyn TelemetrySink>,
}

impl PanelContext {
    /// Creates a context with telemetry disabled.
    #[must_use]
    pub fn new(store: Arc<dyn CommentStore>, page_size: PageSize) -> Self {
        Self {
            store,
            page_size,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }
}

/// Module-level storage for the next panel's context.
static PANEL_CONTEXT: Mutex<Option<PanelContext>> = Mutex::new(None);

/// Sets the context used by the next `CommentsPanel::init` call.
///
/// Replaces any previously stored context; bulk mounting relies on this to
/// run one panel per record sequentially.
pub fn set_panel_context(context: PanelContext) {
    *PANEL_CONTEXT
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(context);
}

/// Builds a panel from the stored context.
///
/// Without a context the panel still renders, but every store call fails
/// with a configuration error surfaced through the usual notice path.
pub(crate) fn panel_from_context() -> CommentsPanel {
    let context = PANEL_CONTEXT
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    context.map_or_else(
        || CommentsPanel::new(Arc::new(UnconfiguredStore), PageSize::default()),
        |ctx| CommentsPanel::new(ctx.store, ctx.page_size).with_telemetry(ctx.telemetry),
    )
}

/// Runs the panel program in the alternate screen until the user quits.
///
/// # Errors
///
/// Returns [`StoreError::Io`] when the terminal program cannot be built or
/// fails while running.
pub async fn run_panel() -> Result<(), StoreError> {
    use bubbletea_rs::Program;

    let program = Program::<CommentsPanel>::builder()
        .alt_screen(true)
        .build()
        .map_err(|error| StoreError::Io {
            message: format!("terminal error: {error}"),
        })?;

    program.run().await.map_err(|error| StoreError::Io {
        message: format!("terminal error: {error}"),
    })?;

    Ok(())
}

/// Placeholder store used when no panel context was provided.
struct UnconfiguredStore;

#[async_trait]
impl CommentStore for UnconfiguredStore {
    async fn list_page(&self, _offset: u64, _limit: u32) -> Result<Vec<Comment>, StoreError> {
        Err(unconfigured())
    }

    async fn create(&self, _author_name: &str, _body: &str) -> Result<Comment, StoreError> {
        Err(unconfigured())
    }
}

fn unconfigured() -> StoreError {
    StoreError::Configuration {
        message: "panel context was not initialised before the panel started".to_owned(),
    }
}
