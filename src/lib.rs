//! Paloma library crate providing a delivery comments panel.
//!
//! The library wraps a PostgREST-style comment collection behind a typed
//! store client, drives a terminal panel for reading and posting comments
//! with paginated loading and optimistic submission, and surfaces friendly
//! errors that can be displayed in the CLI.

pub mod config;
pub mod mount;
pub mod panel;
pub mod store;
pub mod telemetry;

pub use config::{OperationMode, PalomaConfig};
pub use panel::CommentsPanel;
pub use store::{
    CollectionEndpoint, Comment, CommentStore, PageSize, RecordId, RestCommentStore, ServiceKey,
    StoreError,
};
