//! Data models for delivery comments.
//!
//! The public [`Comment`] type is the domain entity held by the panel. The
//! `Api`-prefixed types are deserialisation targets for the wire payload;
//! they are decoded with serde so a malformed response surfaces as a typed
//! decode failure instead of leaking an arbitrary shape into the panel.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(feature = "test-support")]
pub mod test_support;

/// Author name substituted when the wire value or submission input is blank.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A persisted comment attached to a delivery record.
///
/// Immutable once received; the panel only ever references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Server-assigned comment identifier.
    pub id: u64,
    /// Identifier of the delivery record the comment belongs to.
    pub record_id: String,
    /// Display name of the author; never blank.
    pub author_name: String,
    /// Comment text.
    pub body: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a comment row as returned by the store.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) id: u64,
    pub(super) record_id: String,
    pub(super) author_name: Option<String>,
    pub(super) body: String,
    pub(super) created_at: DateTime<Utc>,
}

impl From<ApiComment> for Comment {
    fn from(api: ApiComment) -> Self {
        Self {
            id: api.id,
            record_id: api.record_id,
            author_name: normalise_author(api.author_name),
            body: api.body,
            created_at: api.created_at,
        }
    }
}

/// Replaces a missing or blank wire author with [`ANONYMOUS_AUTHOR`].
pub(crate) fn normalise_author(author: Option<String>) -> String {
    match author {
        Some(name) if !name.trim().is_empty() => name,
        _ => ANONYMOUS_AUTHOR.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn api_comment_decodes_and_converts() {
        let json = r#"{
            "id": 7,
            "record_id": "entrega-42",
            "author_name": "Alice",
            "body": "Looks good",
            "created_at": "2026-08-05T12:30:00Z"
        }"#;
        let api: ApiComment = serde_json::from_str(json).expect("payload should decode");
        let comment = Comment::from(api);
        assert_eq!(comment.id, 7);
        assert_eq!(comment.author_name, "Alice");
        assert_eq!(
            Some(comment.created_at),
            Utc.with_ymd_and_hms(2026, 8, 5, 12, 30, 0).single()
        );
    }

    #[test]
    fn blank_author_becomes_anonymous() {
        assert_eq!(normalise_author(Some("   ".to_owned())), ANONYMOUS_AUTHOR);
        assert_eq!(normalise_author(None), ANONYMOUS_AUTHOR);
        assert_eq!(normalise_author(Some("Bob".to_owned())), "Bob");
    }

    #[test]
    fn missing_required_field_fails_to_decode() {
        let json = r#"{ "id": 7, "author_name": "Alice" }"#;
        let result: Result<ApiComment, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
