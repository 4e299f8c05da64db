//! Rendering logic for the comments panel.
//!
//! These are pure query methods that read state without modification; the
//! only state transitions happen in the message handlers.

use crate::panel::components::{CommentFormViewContext, CommentListViewContext};
use crate::panel::state::FormFocus;
use crate::panel::style::styles;

use super::CommentsPanel;

/// Rows used by header, form, load-more affordance, and status bar.
pub(super) const CHROME_HEIGHT: usize = 6;

impl CommentsPanel {
    /// Renders the header line with a loading indicator.
    pub(super) fn render_header(&self) -> String {
        let style = styles();
        let loading_indicator = if self.is_loading() { " [Loading...]" } else { "" };
        format!(
            "{}Delivery comments{}{loading_indicator}\n",
            style.header, style.reset
        )
    }

    /// Renders the submission form.
    pub(super) fn render_form(&self) -> String {
        let ctx = CommentFormViewContext {
            author: self.form.author(),
            body: self.form.body(),
            focus: self.form.focus(),
            is_loading: self.is_loading(),
        };
        self.form_component.view(&ctx)
    }

    /// Renders the feed area: the list, the empty-state placeholder, or the
    /// inline load-failure message.
    pub(super) fn render_feed(&self, max_height: usize) -> String {
        let style = styles();

        if self.feed.is_empty() {
            if let Some(message) = self.feed_error() {
                return format!("  {}{message}{}\n", style.error, style.reset);
            }
            return format!("  {}No comments yet.{}\n", style.dim, style.reset);
        }

        let ctx = CommentListViewContext {
            comments: self.feed.comments(),
            max_width: (self.width as usize).max(1),
            max_height: max_height.max(1),
        };
        self.list.view(&ctx)
    }

    /// Renders the load-more affordance.
    ///
    /// Disabled while a request is in flight or once the collection is
    /// exhausted; the exhausted state has its own label.
    pub(super) fn render_load_more(&self) -> String {
        let style = styles();

        if !self.has_more() {
            return format!("  {}[ No more comments ]{}\n", style.disabled, style.reset);
        }
        if self.is_loading() {
            return format!("  {}[ Load more comments ]{}\n", style.disabled, style.reset);
        }
        if self.focus() == FormFocus::LoadMore {
            return format!("  {}[ Load more comments ]{}\n", style.focus, style.reset);
        }
        "  [ Load more comments ]\n".to_owned()
    }

    /// Renders the status bar with the current notice or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let style = styles();
        if let Some(notice) = self.status_notice() {
            return format!("{}Error: {notice}{}\n", style.error, style.reset);
        }
        format!(
            "{}Tab:fields  Enter:send  m:load more  Esc:quit{}\n",
            style.dim, style.reset
        )
    }
}
