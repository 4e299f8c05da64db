//! REST implementation of the comment store.
//!
//! Speaks the PostgREST conventions of the remote collection: item-range
//! headers for paging, `eq.` filters for record scoping, and
//! `Prefer: return=representation` so a create echoes the persisted row.

use async_trait::async_trait;
use http::StatusCode;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, RANGE};
use serde::Serialize;

use super::CommentStore;
use super::error::StoreError;
use super::identity::{CollectionEndpoint, RecordId, ServiceKey};
use super::models::{ApiComment, Comment};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("apikey");
const RANGE_UNIT_HEADER: HeaderName = HeaderName::from_static("range-unit");
const PREFER_HEADER: HeaderName = HeaderName::from_static("prefer");

/// Wire shape of a comment submission.
#[derive(Debug, Serialize)]
struct ApiNewComment<'a> {
    record_id: &'a str,
    author_name: &'a str,
    body: &'a str,
}

/// Comment store backed by the remote REST collection.
pub struct RestCommentStore {
    client: reqwest::Client,
    endpoint: CollectionEndpoint,
    record_id: RecordId,
    key: ServiceKey,
}

impl RestCommentStore {
    /// Creates a store client scoped to one delivery record.
    #[must_use]
    pub fn new(endpoint: CollectionEndpoint, record_id: RecordId, key: ServiceKey) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            record_id,
            key,
        }
    }

    /// Returns the record identifier this store is scoped to.
    #[must_use]
    pub const fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    /// Builds the headers carried by every request.
    ///
    /// The credential is sent both as the `apikey` header and as a bearer
    /// token, per the store's authentication convention.
    fn auth_headers(&self) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        let key = header_value(self.key.value())?;
        headers.insert(API_KEY_HEADER, key);
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", self.key.value()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            PREFER_HEADER,
            HeaderValue::from_static("return=representation"),
        );
        Ok(headers)
    }

    /// Reads the response body, classifying non-success statuses as remote
    /// failures before attempting to decode.
    async fn read_success_body(
        operation: &str,
        response: reqwest::Response,
    ) -> Result<String, StoreError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| map_transport(operation, &error))?;
        if !status.is_success() {
            return Err(map_remote(operation, status, &body));
        }
        Ok(body)
    }
}

#[async_trait]
impl CommentStore for RestCommentStore {
    async fn list_page(&self, offset: u64, limit: u32) -> Result<Vec<Comment>, StoreError> {
        let operation = "list comments";
        let last = offset.saturating_add(u64::from(limit.saturating_sub(1)));
        let filter = format!("eq.{}", self.record_id.as_str());

        let response = self
            .client
            .get(self.endpoint.url().clone())
            .query(&[
                ("select", "*"),
                ("record_id", filter.as_str()),
                ("order", "created_at.desc"),
            ])
            .headers(self.auth_headers()?)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(RANGE, format!("{offset}-{last}"))
            .header(RANGE_UNIT_HEADER, HeaderValue::from_static("items"))
            .send()
            .await
            .map_err(|error| map_transport(operation, &error))?;

        let body = Self::read_success_body(operation, response).await?;
        let rows: Vec<ApiComment> =
            serde_json::from_str(&body).map_err(|error| map_decode(operation, &error))?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn create(&self, author_name: &str, body: &str) -> Result<Comment, StoreError> {
        let operation = "create comment";
        let payload = ApiNewComment {
            record_id: self.record_id.as_str(),
            author_name,
            body,
        };

        let response = self
            .client
            .post(self.endpoint.url().clone())
            .headers(self.auth_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|error| map_transport(operation, &error))?;

        let text = Self::read_success_body(operation, response).await?;
        let mut rows: Vec<ApiComment> =
            serde_json::from_str(&text).map_err(|error| map_decode(operation, &error))?;
        if rows.is_empty() {
            return Err(StoreError::Decode {
                message: format!("{operation}: store returned an empty representation"),
            });
        }
        Ok(Comment::from(rows.remove(0)))
    }
}

fn header_value(value: &str) -> Result<HeaderValue, StoreError> {
    HeaderValue::from_str(value).map_err(|error| StoreError::Configuration {
        message: format!("service key cannot be sent as a header: {error}"),
    })
}

fn map_transport(operation: &str, error: &reqwest::Error) -> StoreError {
    StoreError::Transport {
        message: format!("{operation} failed: {error}"),
    }
}

fn map_decode(operation: &str, error: &serde_json::Error) -> StoreError {
    StoreError::Decode {
        message: format!("{operation}: {error}"),
    }
}

fn map_remote(operation: &str, status: StatusCode, body: &str) -> StoreError {
    let message = extract_remote_message(body)
        .unwrap_or_else(|| format!("{operation} failed with status {status}"));
    StoreError::Remote { status, message }
}

/// Pulls the human-readable message out of a PostgREST error body.
fn extract_remote_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
