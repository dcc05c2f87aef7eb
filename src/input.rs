//! Keyboard handling: maps host key events onto messages and enforces the
//! submission gate ordering: dropdown confirm, then submit, then newline,
//! then deletion and navigation, then plain character editing.

use crate::commands::Cmd;
use crate::messages::{Direction, DropdownMsg, EditMsg, Msg};
use crate::model::MentionInput;
use crate::update::update;

/// A key event as delivered by the host, already decoupled from any
/// windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// Apply one keydown to the model.
///
/// The surface performs all editing itself, so there is no separate
/// "prevent default" signal: a handled key simply mutates the model, and
/// the returned command tells the host what to push outward.
pub fn handle_key(model: &mut MentionInput, key: Key, shift: bool) -> Option<Cmd> {
    match key {
        // With the dropdown open, Enter confirms the highlighted candidate
        Key::Enter if model.dropdown_open() => {
            update(model, Msg::Dropdown(DropdownMsg::ConfirmHighlighted))
        }

        // Enter submits: flush the canonical plain text, then fire exactly
        // one submit signal
        Key::Enter if !shift => {
            model.sync_carrier();
            Some(Cmd::Submit {
                message: model.plain_text(),
            })
        }

        // Shift+Enter inserts a line break
        Key::Enter => update(model, Msg::Edit(EditMsg::InsertLineBreak)),

        // Backspace removes the previous unit; a token directly before the
        // caret is removed whole, never partially
        Key::Backspace => update(model, Msg::Edit(EditMsg::DeleteBackward)),

        // Dropdown navigation and dismissal
        Key::ArrowDown if model.dropdown_open() => {
            update(model, Msg::Dropdown(DropdownMsg::Navigate(Direction::Down)))
        }
        Key::ArrowUp if model.dropdown_open() => {
            update(model, Msg::Dropdown(DropdownMsg::Navigate(Direction::Up)))
        }
        Key::Escape if model.dropdown_open() => {
            update(model, Msg::Dropdown(DropdownMsg::Close))
        }

        // Caret movement
        Key::ArrowLeft => update(model, Msg::Edit(EditMsg::MoveCaret(Direction::Left))),
        Key::ArrowRight => update(model, Msg::Edit(EditMsg::MoveCaret(Direction::Right))),

        Key::ArrowUp | Key::ArrowDown | Key::Escape => None,

        // Character input
        Key::Char(ch) => update(model, Msg::Edit(EditMsg::InsertChar(ch))),
    }
}
