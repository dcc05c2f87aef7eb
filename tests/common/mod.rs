//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mention_input::commands::Cmd;
use mention_input::config::MentionConfig;
use mention_input::contact::Contact;
use mention_input::input::{handle_key, Key};
use mention_input::messages::{HostMsg, Msg};
use mention_input::model::MentionInput;
use mention_input::update::update;

/// Create a widget model with default config and a wired carrier
pub fn test_model() -> MentionInput {
    MentionInput::new(MentionConfig::default())
}

/// Create a model and type `text` through the key handler
pub fn test_model_with_text(text: &str) -> MentionInput {
    let mut model = test_model();
    type_text(&mut model, text);
    model
}

/// Type a string one character at a time through the submission gate,
/// returning the command produced by the last keystroke
pub fn type_text(model: &mut MentionInput, text: &str) -> Option<Cmd> {
    let mut last = None;
    for ch in text.chars() {
        last = handle_key(model, Key::Char(ch), false);
    }
    last
}

pub fn contact(id: u64, display_name: &str, first_name: &str) -> Contact {
    Contact::new(id, display_name, first_name)
}

/// Three stock candidates for dropdown tests
pub fn candidates() -> Vec<Contact> {
    vec![
        contact(1, "Alice Smith", "Alice"),
        contact(2, "Bob Jones", "Bob"),
        contact(3, "Carol White", "Carol"),
    ]
}

/// Open the dropdown by typing a valid query and delivering results
pub fn open_dropdown(model: &mut MentionInput) {
    type_text(model, "@al");
    update(model, Msg::Host(HostMsg::SearchResults(candidates())));
    assert!(model.dropdown_open(), "dropdown should open on results");
}
