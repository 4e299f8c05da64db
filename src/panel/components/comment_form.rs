//! Submission form component.
//!
//! Renders the author and body inputs with a focus marker and a send
//! affordance. Inputs stay editable while a request is in flight; only the
//! affordances render as disabled, mirroring the submit guard in the panel.

use crate::panel::state::FormFocus;
use crate::panel::style::styles;

/// Context for rendering the submission form.
#[derive(Debug, Clone)]
pub struct CommentFormViewContext<'a> {
    /// Current author input buffer.
    pub author: &'a str,
    /// Current body input buffer.
    pub body: &'a str,
    /// Which form element has focus.
    pub focus: FormFocus,
    /// Whether a store request is in flight.
    pub is_loading: bool,
}

/// Component for the comment submission form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentFormComponent;

impl CommentFormComponent {
    /// Creates a new form component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the form as a string, one line per row.
    #[must_use]
    pub fn view(&self, ctx: &CommentFormViewContext<'_>) -> String {
        let mut output = String::new();
        output.push_str(&render_input(
            "Your name (optional)",
            ctx.author,
            ctx.focus == FormFocus::Author,
        ));
        output.push_str(&render_input(
            "Write a comment",
            ctx.body,
            ctx.focus == FormFocus::Body,
        ));
        output.push_str(&render_send_affordance(ctx.is_loading));
        output
    }
}

fn render_input(label: &str, value: &str, focused: bool) -> String {
    let style = styles();
    let marker = if focused {
        format!("{}>{}", style.focus, style.reset)
    } else {
        " ".to_owned()
    };
    let caret = if focused { "_" } else { "" };
    format!(
        "{marker} {}{label}:{} {value}{caret}\n",
        style.dim, style.reset
    )
}

fn render_send_affordance(is_loading: bool) -> String {
    let style = styles();
    if is_loading {
        format!("  {}[ Sending... ]{}\n", style.disabled, style.reset)
    } else {
        "  [ Enter to send ]\n".to_owned()
    }
}
