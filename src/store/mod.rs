//! Comment store client for the delivery comment collection.
//!
//! This module provides a trait-based client for the remote paged comment
//! collection. The trait-based design enables mocking in tests while the
//! REST implementation handles real HTTP requests against a PostgREST-style
//! endpoint.

mod error;
mod identity;
pub mod models;
mod rest;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use error::StoreError;
pub use identity::{CollectionEndpoint, DEFAULT_PAGE_SIZE, PageSize, RecordId, ServiceKey};
pub use models::Comment;
pub use rest::RestCommentStore;

use async_trait::async_trait;

/// Client for one delivery record's comment collection.
///
/// A page fetch must request exactly `limit` items starting at `offset`; a
/// returned count below `limit` is the sole exhaustion signal. Every call is
/// attempted exactly once; retry policy, if any, belongs to the caller and
/// is deliberately absent here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fetches one page of comments ordered by creation time descending.
    async fn list_page(&self, offset: u64, limit: u32) -> Result<Vec<Comment>, StoreError>;

    /// Persists a new comment and returns the stored record, including the
    /// server-assigned id and timestamp.
    async fn create(&self, author_name: &str, body: &str) -> Result<Comment, StoreError>;
}
