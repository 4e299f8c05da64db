//! Input handling for the comments panel.
//!
//! Translates terminal key events into panel messages. Mapping depends on
//! the current form focus: printable keys edit the focused input, while the
//! same keys act as shortcuts when the load-more affordance has focus.

use crate::panel::state::FormFocus;

use super::messages::PanelMsg;

/// Focus-dependent context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    /// Currently focused form element.
    pub focus: FormFocus,
}

/// Maps a key event to a panel message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<PanelMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc => Some(PanelMsg::Quit),
        KeyCode::Tab => Some(PanelMsg::FocusNext),
        KeyCode::BackTab => Some(PanelMsg::FocusPrevious),
        KeyCode::Enter => Some(match context.focus {
            FormFocus::LoadMore => PanelMsg::LoadMoreRequested,
            FormFocus::Author | FormFocus::Body => PanelMsg::SubmitRequested,
        }),
        KeyCode::Backspace if context.focus.is_editing() => Some(PanelMsg::InputBackspace),
        KeyCode::Char(ch) if context.focus.is_editing() => Some(PanelMsg::InputChar(ch)),
        KeyCode::Char('q') => Some(PanelMsg::Quit),
        KeyCode::Char('m') | KeyCode::Char(' ') => Some(PanelMsg::LoadMoreRequested),
        _ => None,
    }
}
