//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Within one call,
//! derived state (plain text, carrier, query) is recomputed before any
//! command is returned, so an emitted search always carries a consistent,
//! just-computed snapshot.

use crate::commands::Cmd;
use crate::dropdown::Dropdown;
use crate::mention;
use crate::messages::{Direction, DropdownMsg, EditMsg, HostMsg, Msg};
use crate::model::MentionInput;
use crate::query;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut MentionInput, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Edit(m) => update_edit(model, m),
        Msg::Dropdown(m) => update_dropdown(model, m),
        Msg::Host(m) => update_host(model, m),
    }
}

/// Handle editing messages (surface mutation, caret movement)
pub fn update_edit(model: &mut MentionInput, msg: EditMsg) -> Option<Cmd> {
    let text_changed = msg.is_text_changing();
    match msg {
        EditMsg::InsertChar(ch) => model.surface.insert_char(ch),
        EditMsg::InsertText(text) => model.surface.insert_str(&text),
        EditMsg::InsertLineBreak => model.surface.insert_line_break(),
        EditMsg::DeleteBackward => model.surface.delete_backward(),
        EditMsg::MoveCaret(Direction::Left) => model.surface.move_left(),
        EditMsg::MoveCaret(Direction::Right) => model.surface.move_right(),
        EditMsg::MoveCaret(_) => {} // Up/Down not used for caret movement
        EditMsg::SetCaret(offset) => model.surface.set_caret(offset),
    }
    after_edit(model, text_changed)
}

/// Post-mutation resync: write the carrier, re-detect the query, close a
/// dropdown whose query went away, and emit the outward search request.
/// This is the data-flow fixed point every surface mutation converges to.
pub(crate) fn after_edit(model: &mut MentionInput, text_changed: bool) -> Option<Cmd> {
    if text_changed {
        model.sync_carrier();
    }
    let text = model.surface.plain_text();
    match query::detect(&text, model.surface.caret(), model.config.min_query_len) {
        Some(q) => {
            tracing::debug!(query = %q.text, "active mention query");
            Some(Cmd::SearchContacts { message: text })
        }
        None => {
            if model.dropdown.take().is_some() {
                tracing::debug!("query no longer active, closing dropdown");
            }
            None
        }
    }
}

/// Handle dropdown messages (navigation, selection, dismissal)
pub fn update_dropdown(model: &mut MentionInput, msg: DropdownMsg) -> Option<Cmd> {
    match msg {
        DropdownMsg::Navigate(direction) => {
            if let Some(dropdown) = model.dropdown.as_mut() {
                dropdown.navigate(direction);
            }
            None
        }
        DropdownMsg::ConfirmHighlighted => {
            // No highlight yet: swallow the key, keep the list open
            let contact_id = model
                .dropdown
                .as_ref()
                .and_then(Dropdown::highlighted_contact)
                .map(|c| c.id)?;
            close_dropdown(model);
            Some(Cmd::SelectContact { contact_id })
        }
        DropdownMsg::ClickCandidate(index) => {
            let contact_id = model
                .dropdown
                .as_ref()
                .and_then(|d| d.candidates().get(index))
                .map(|c| c.id)?;
            close_dropdown(model);
            Some(Cmd::SelectContact { contact_id })
        }
        DropdownMsg::Close => {
            close_dropdown(model);
            None
        }
    }
}

fn close_dropdown(model: &mut MentionInput) {
    model.dropdown = None;
    model.focus_in_dropdown = false;
}

/// Handle host messages (transport events, focus, timers)
pub fn update_host(model: &mut MentionInput, msg: HostMsg) -> Option<Cmd> {
    match msg {
        HostMsg::SearchResults(contacts) => {
            // Results are matched to the current state at arrival time: a
            // reply for a query the user has since edited away or broken
            // must not open the list.
            let text = model.surface.plain_text();
            let still_active =
                query::detect(&text, model.surface.caret(), model.config.min_query_len).is_some();
            if !still_active {
                tracing::debug!("discarding search results, no active query");
                close_dropdown(model);
                return None;
            }
            // Opening replaces any prior instance; empty results never open
            model.dropdown = Dropdown::open(contacts);
            None
        }
        HostMsg::ConfirmMention(contact) => {
            if mention::insert_mention(&mut model.surface, &contact) {
                model.sync_carrier();
            }
            close_dropdown(model);
            None
        }
        HostMsg::ClearInput => {
            model.clear();
            None
        }
        HostMsg::ScrollToBottom => Some(Cmd::ScrollToBottom),
        HostMsg::Blur => {
            if model.dropdown_open() {
                Some(Cmd::ScheduleBlurCheck {
                    delay_ms: model.config.blur_grace_ms,
                })
            } else {
                None
            }
        }
        HostMsg::FocusChanged { in_dropdown } => {
            model.focus_in_dropdown = in_dropdown;
            None
        }
        HostMsg::BlurGraceElapsed => {
            // Idempotent: a re-armed or duplicate check closes at most once
            if !model.focus_in_dropdown {
                model.dropdown = None;
            }
            None
        }
    }
}
