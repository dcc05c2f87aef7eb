//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Inward transport
//! events decode into [`HostMsg`] via [`HostMsg::from_event`].

use serde::Deserialize;

use crate::contact::Contact;

/// Direction for caret movement and dropdown navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editing messages (surface mutation, caret movement).
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    /// Insert a single character at the caret
    InsertChar(char),
    /// Insert a string (e.g., from paste)
    InsertText(String),
    /// Insert a hard line break (Shift+Enter)
    InsertLineBreak,
    /// Delete the unit before the caret (a whole token if one precedes it)
    DeleteBackward,
    /// Move the caret one unit left/right (a token is a single unit)
    MoveCaret(Direction),
    /// Place the caret at a plain-text offset (mouse click)
    SetCaret(usize),
}

impl EditMsg {
    /// Whether this message can change the plain text, as opposed to only
    /// moving the caret.
    pub fn is_text_changing(&self) -> bool {
        !matches!(self, EditMsg::MoveCaret(_) | EditMsg::SetCaret(_))
    }
}

/// Dropdown messages (candidate list navigation and selection).
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownMsg {
    /// Move the highlight (ArrowUp/ArrowDown)
    Navigate(Direction),
    /// Confirm the highlighted candidate (Enter)
    ConfirmHighlighted,
    /// Confirm a candidate row directly (pointer click)
    ClickCandidate(usize),
    /// Dismiss the dropdown (Escape)
    Close,
}

/// Host-delivered messages (transport events, focus changes, timers).
#[derive(Debug, Clone, PartialEq)]
pub enum HostMsg {
    /// Candidate search results arrived from the resolver
    SearchResults(Vec<Contact>),
    /// The resolver confirmed a mention; replace the trailing query span
    /// with an atomic token
    ConfirmMention(Contact),
    /// Reset the surface and the plain-text carrier
    ClearInput,
    /// Pass-through view-scroll request
    ScrollToBottom,
    /// The input lost focus; arms the grace window before closing the
    /// dropdown so that a click on a candidate row still lands
    Blur,
    /// Focus moved; `in_dropdown` is true when it landed inside the dropdown
    FocusChanged { in_dropdown: bool },
    /// The blur grace timer elapsed
    BlurGraceElapsed,
}

#[derive(Debug, Deserialize)]
struct ConfirmPayload {
    contact_id: u64,
    display_name: String,
    first_name: String,
}

#[derive(Debug, Deserialize)]
struct SearchResultsPayload {
    contacts: Vec<Contact>,
}

impl HostMsg {
    /// Decode a named transport event into a message. Unknown names and
    /// malformed payloads are dropped (logged at debug level), never errors.
    pub fn from_event(name: &str, payload: &serde_json::Value) -> Option<HostMsg> {
        match name {
            "update_contact_highlight" => {
                let p: ConfirmPayload = decode(name, payload)?;
                Some(HostMsg::ConfirmMention(Contact {
                    id: p.contact_id,
                    display_name: p.display_name,
                    first_name: p.first_name,
                }))
            }
            "search_results" => {
                let p: SearchResultsPayload = decode(name, payload)?;
                Some(HostMsg::SearchResults(p.contacts))
            }
            "clear_input" => Some(HostMsg::ClearInput),
            "scroll_to_bottom" => Some(HostMsg::ScrollToBottom),
            _ => {
                tracing::debug!(event = name, "ignoring unknown transport event");
                None
            }
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(name: &str, payload: &serde_json::Value) -> Option<T> {
    match serde_json::from_value(payload.clone()) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(event = name, %error, "dropping malformed event payload");
            None
        }
    }
}

/// Top-level message type.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Editing messages (surface, caret)
    Edit(EditMsg),
    /// Dropdown messages (navigation, selection)
    Dropdown(DropdownMsg),
    /// Host messages (transport, focus, timers)
    Host(HostMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Edit(EditMsg::InsertChar(ch))
    }

    /// Create a caret movement message
    pub fn move_caret(direction: Direction) -> Self {
        Msg::Edit(EditMsg::MoveCaret(direction))
    }
}
