//! Builders for comment fixtures used across unit and integration tests.

use chrono::{Duration, TimeZone, Utc};

use super::Comment;

/// Builds a comment with the given id, author, and body.
///
/// Timestamps descend as ids ascend, so a slice built with increasing ids is
/// already in the store's newest-first order.
#[must_use]
pub fn minimal_comment(id: u64, author: &str, body: &str) -> Comment {
    let base = Utc
        .with_ymd_and_hms(2026, 8, 5, 12, 0, 0)
        .single()
        .unwrap_or_default();
    let offset = Duration::minutes(i64::try_from(id).unwrap_or(i64::MAX));
    Comment {
        id,
        record_id: "entrega-42".to_owned(),
        author_name: author.to_owned(),
        body: body.to_owned(),
        created_at: base - offset,
    }
}

/// Builds `count` comments in newest-first order starting at id 1.
#[must_use]
pub fn comment_page(count: u64) -> Vec<Comment> {
    (1..=count)
        .map(|id| minimal_comment(id, "alice", &format!("Comment {id}")))
        .collect()
}
