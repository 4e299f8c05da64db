//! Full-stack test: panel driving the REST store against a mock server.

use std::sync::Arc;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paloma::panel::CommentsPanel;
use paloma::panel::messages::PanelMsg;
use paloma::store::{CollectionEndpoint, CommentStore, PageSize, RecordId, RestCommentStore, ServiceKey};

const COLLECTION_PATH: &str = "/rest/v1/delivery_comments";

fn comment_row(id: u64, author: &str, body: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "record_id": "entrega-42",
        "author_name": author,
        "body": body,
        "created_at": created_at
    })
}

fn rows(range: std::ops::RangeInclusive<u64>) -> serde_json::Value {
    let items: Vec<_> = range
        .map(|id| comment_row(id, "alice", &format!("comment {id}"), "2026-08-05T10:00:00Z"))
        .collect();
    serde_json::Value::Array(items)
}

async fn drive(panel: &mut CommentsPanel, msg: &PanelMsg) {
    let mut pending = panel.handle_message(msg);
    while let Some(cmd) = pending.take() {
        let Some(out) = cmd.await else {
            break;
        };
        let Ok(panel_msg) = out.downcast::<PanelMsg>() else {
            break;
        };
        pending = panel.handle_message(&panel_msg);
    }
}

fn type_text(panel: &mut CommentsPanel, text: &str) {
    for ch in text.chars() {
        panel.handle_message(&PanelMsg::InputChar(ch));
    }
}

fn panel_against(server: &MockServer) -> CommentsPanel {
    let endpoint = CollectionEndpoint::from_base(&server.uri()).expect("base should parse");
    let store = RestCommentStore::new(
        endpoint,
        RecordId::new("entrega-42").expect("record id should be accepted"),
        ServiceKey::new("secret-key").expect("key should be accepted"),
    );
    CommentsPanel::new(
        Arc::new(store) as Arc<dyn CommentStore>,
        PageSize::new(5).expect("page size should be valid"),
    )
}

#[tokio::test]
async fn panel_pages_through_the_collection_and_posts() {
    let server = MockServer::start().await;

    // First page: full, so the collection is not exhausted.
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(header("range", "0-4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows(1..=5)))
        .expect(1)
        .mount(&server)
        .await;

    // Second page: short, which exhausts the collection.
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(header("range", "5-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows(6..=7)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([
            comment_row(8, "Bob", "posted from the panel", "2026-08-05T12:00:00Z")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut panel = panel_against(&server);

    drive(&mut panel, &PanelMsg::Initialized).await;
    assert_eq!(panel.comment_count(), 5);
    assert!(panel.has_more());

    drive(&mut panel, &PanelMsg::LoadMoreRequested).await;
    assert_eq!(panel.comment_count(), 7);
    assert!(!panel.has_more());

    type_text(&mut panel, "Bob");
    panel.handle_message(&PanelMsg::FocusNext);
    type_text(&mut panel, "posted from the panel");
    drive(&mut panel, &PanelMsg::SubmitRequested).await;

    assert_eq!(panel.comment_count(), 8);
    assert_eq!(panel.comments().first().map(|c| c.id), Some(8));
    assert_eq!(panel.body_input(), "");
}

#[tokio::test]
async fn remote_failure_surfaces_as_a_notice_and_leaves_state_alone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "JWT expired"
        })))
        .mount(&server)
        .await;

    let mut panel = panel_against(&server);
    drive(&mut panel, &PanelMsg::Initialized).await;

    assert_eq!(panel.comment_count(), 0);
    assert!(!panel.is_loading());
    assert!(panel.status_notice().is_some_and(|m| m.contains("JWT expired")));
    assert!(panel.has_more());
}
