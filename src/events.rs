//! Keyboard handling: crossterm key events become TEA messages

use crate::tea::message::{CommentsMessage, Message, PostsMessage, SystemMessage, UiMessage};
use crate::tea::Model;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translates terminal key events into application messages.
///
/// The handler is stateless; it reads the model only to resolve which post
/// the cursor is on when the comment panel is toggled.
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a message, or `None` when the key is unbound
    pub fn handle_key_event(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        // Ctrl+C always quits, regardless of other bindings.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(SystemMessage::Quit.into());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(SystemMessage::Quit.into()),

            KeyCode::Char('j') | KeyCode::Down => Some(UiMessage::SelectNext.into()),
            KeyCode::Char('k') | KeyCode::Up => Some(UiMessage::SelectPrevious.into()),
            KeyCode::Char('g') | KeyCode::Home => Some(UiMessage::SelectFirst.into()),
            KeyCode::Char('G') | KeyCode::End => Some(UiMessage::SelectLast.into()),

            KeyCode::Enter | KeyCode::Char(' ') => {
                let post = model.selected_post()?;
                Some(CommentsMessage::Toggle(post.id).into())
            }

            KeyCode::Char('v') => Some(UiMessage::ToggleLayout.into()),

            KeyCode::Char('+') | KeyCode::Char('=') => Some(UiMessage::IncrementLimit.into()),
            KeyCode::Char('-') | KeyCode::Char('_') => Some(UiMessage::DecrementLimit.into()),

            KeyCode::Char('r') | KeyCode::F(5) => Some(PostsMessage::Load.into()),

            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
