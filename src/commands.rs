//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host must perform after an update:
//! pushing outward triggers over its transport, arming the blur grace
//! timer, or scrolling the view. The core itself never blocks or performs
//! I/O; everything outward is fire-and-forget.

/// Outward side effect requested by an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Ask the resolver to search contacts. Carries the entire current
    /// plain text, freshly derived within the same event.
    SearchContacts { message: String },
    /// Tell the resolver a candidate was picked
    SelectContact { contact_id: u64 },
    /// Submit the message with the canonical plain text
    Submit { message: String },
    /// Arm (or re-arm) the blur grace check; the host answers with
    /// `HostMsg::BlurGraceElapsed` after the delay
    ScheduleBlurCheck { delay_ms: u64 },
    /// Scroll the transcript view to the bottom
    ScrollToBottom,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Transport representation of the outward triggers: event name plus
    /// JSON payload. Host-local commands (timers, scrolling, batches) have
    /// no transport form.
    pub fn to_event(&self) -> Option<(&'static str, serde_json::Value)> {
        match self {
            Cmd::SearchContacts { message } => Some((
                "search_contacts",
                serde_json::json!({ "message": message }),
            )),
            Cmd::SelectContact { contact_id } => {
                Some(("select_contact", serde_json::json!({ "id": contact_id })))
            }
            Cmd::Submit { message } => {
                Some(("submit", serde_json::json!({ "message": message })))
            }
            _ => None,
        }
    }
}
