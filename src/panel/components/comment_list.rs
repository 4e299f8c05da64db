//! Comment list component.
//!
//! Renders the feed as a sequence of comment cards: an author/date header
//! line followed by the wrapped body text. The component is a pure function
//! of its view context and never touches panel state.

use chrono::{DateTime, Utc};

use crate::panel::style::styles;
use crate::store::Comment;
use crate::store::models::ANONYMOUS_AUTHOR;

use super::text_fit::wrap_plain;

/// Context for rendering the comment list.
#[derive(Debug, Clone)]
pub struct CommentListViewContext<'a> {
    /// Comments in display order.
    pub comments: &'a [Comment],
    /// Maximum visible width in columns.
    pub max_width: usize,
    /// Maximum number of lines the list may occupy.
    pub max_height: usize,
}

/// Component for displaying the comment feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentListComponent;

impl CommentListComponent {
    /// Creates a new list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the list as a string, one line per row.
    ///
    /// Rendering stops once the height budget is spent; a dimmed ellipsis
    /// row marks the cut.
    #[must_use]
    pub fn view(&self, ctx: &CommentListViewContext<'_>) -> String {
        let style = styles();
        let mut lines: Vec<String> = Vec::new();
        let body_width = ctx.max_width.saturating_sub(2).max(1);

        'comments: for comment in ctx.comments {
            let author = display_author(comment);
            lines.push(format!(
                "{}{author}{}  {}{}{}",
                style.author,
                style.reset,
                style.dim,
                format_created_at(comment.created_at),
                style.reset,
            ));
            for body_line in wrap_plain(&comment.body, body_width) {
                lines.push(format!("  {body_line}"));
            }
            lines.push(String::new());

            if lines.len() >= ctx.max_height {
                lines.truncate(ctx.max_height.saturating_sub(1));
                lines.push(format!("{}…{}", style.dim, style.reset));
                break 'comments;
            }
        }

        let mut output = String::new();
        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

/// Author shown for a comment; blank stored names fall back to the
/// anonymous label.
fn display_author(comment: &Comment) -> &str {
    if comment.author_name.trim().is_empty() {
        ANONYMOUS_AUTHOR
    } else {
        &comment.author_name
    }
}

/// Short localised date/time, matching the original widget's compact
/// day-first format.
fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at.format("%d/%m/%Y %H:%M").to_string()
}
