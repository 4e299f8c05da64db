//! End-to-end panel behaviour against a scripted store.
//!
//! These tests drive the public update path the same way the terminal
//! runtime does: feed a message, await the resulting command, feed the
//! completion back.

use std::sync::Arc;

use paloma::panel::CommentsPanel;
use paloma::panel::messages::PanelMsg;
use paloma::store::models::test_support::{comment_page, minimal_comment};
use paloma::store::test_support::ScriptedStore;
use paloma::store::{CommentStore, PageSize, StoreError};

fn panel_over(store: &Arc<ScriptedStore>, size: u32) -> CommentsPanel {
    CommentsPanel::new(
        Arc::clone(store) as Arc<dyn CommentStore>,
        PageSize::new(size).expect("page size should be valid"),
    )
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

#[tokio::test]
async fn paging_scenario_five_then_three() {
    let store = Arc::new(ScriptedStore::default());
    store.push_page(Ok(comment_page(5)));
    store.push_page(Ok(comment_page(3)));
    let mut panel = panel_over(&store, 5);

    drive(&mut panel, &PanelMsg::Initialized).await;
    assert!(panel.has_more());
    assert_eq!(panel.page_cursor(), 1);

    drive(&mut panel, &PanelMsg::LoadMoreRequested).await;
    assert!(!panel.has_more());
    assert_eq!(panel.comment_count(), 8);
    // One cursor advance per non-empty page.
    assert_eq!(panel.page_cursor(), 2);

    // The second window started where the first ended.
    assert_eq!(store.recorded_windows(), vec![(0, 5), (5, 5)]);
}

#[tokio::test]
async fn anonymous_submission_flow() {
    let store = Arc::new(ScriptedStore::default());
    let mut panel = panel_over(&store, 5);
    drive(&mut panel, &PanelMsg::Initialized).await;

    // Leave the author blank, fill only the body.
    panel.handle_message(&PanelMsg::FocusNext);
    type_text(&mut panel, "hello");
    drive(&mut panel, &PanelMsg::SubmitRequested).await;

    assert_eq!(
        store.recorded_creates(),
        vec![("Anonymous".to_owned(), "hello".to_owned())]
    );
    assert_eq!(
        panel.comments().first().map(|c| c.author_name.as_str()),
        Some("Anonymous")
    );
    assert_eq!(panel.comments().first().map(|c| c.body.as_str()), Some("hello"));
}

#[tokio::test]
async fn whitespace_body_never_reaches_the_store() {
    let store = Arc::new(ScriptedStore::default());
    store.push_page(Ok(comment_page(2)));
    let mut panel = panel_over(&store, 5);
    drive(&mut panel, &PanelMsg::Initialized).await;

    type_text(&mut panel, "Bob");
    panel.handle_message(&PanelMsg::FocusNext);
    type_text(&mut panel, "   ");
    drive(&mut panel, &PanelMsg::SubmitRequested).await;

    assert_eq!(store.create_call_count(), 0);
    assert_eq!(panel.comment_count(), 2);
}

#[tokio::test]
async fn optimistic_prepend_keeps_submission_at_the_head() {
    let store = Arc::new(ScriptedStore::default());
    store.push_page(Ok(comment_page(5)));
    store.push_create(Ok(minimal_comment(50, "Bob", "newest by position")));
    let mut panel = panel_over(&store, 5);
    drive(&mut panel, &PanelMsg::Initialized).await;

    panel.handle_message(&PanelMsg::FocusNext);
    type_text(&mut panel, "newest by position");
    drive(&mut panel, &PanelMsg::SubmitRequested).await;

    // The echoed comment has an older timestamp than the loaded page, yet
    // stays at the head: it is not re-sorted into place.
    assert_eq!(panel.comments().first().map(|c| c.id), Some(50));
    let head_created_at = panel.comments().first().map(|c| c.created_at);
    let second_created_at = panel.comments().get(1).map(|c| c.created_at);
    assert!(head_created_at < second_created_at);
}

#[tokio::test]
async fn first_load_remote_failure_keeps_the_feed_empty() {
    let store = Arc::new(ScriptedStore::default());
    store.push_page(Err(StoreError::Remote {
        status: http::StatusCode::SERVICE_UNAVAILABLE,
        message: "store offline".to_owned(),
    }));
    let mut panel = panel_over(&store, 5);

    drive(&mut panel, &PanelMsg::Initialized).await;

    assert_eq!(panel.comment_count(), 0);
    assert_eq!(panel.page_cursor(), 0);
    assert!(panel.feed_error().is_some_and(|m| m.contains("store offline")));
    // Not exhausted: the user can retry via load more.
    assert!(panel.has_more());
    drive(&mut panel, &PanelMsg::LoadMoreRequested).await;
    assert_eq!(store.list_call_count(), 2);
}
