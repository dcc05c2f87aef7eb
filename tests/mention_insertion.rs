//! Mention insertion tests - trailing span replacement, caret, races

mod common;

use common::{contact, open_dropdown, test_model, test_model_with_text, type_text};
use mention_input::input::{handle_key, Key};
use mention_input::messages::{HostMsg, Msg};
use mention_input::surface::Run;
use mention_input::update::update;

fn confirm_jane(model: &mut mention_input::MentionInput) {
    update(
        model,
        Msg::Host(HostMsg::ConfirmMention(contact(7, "Jane Doe", "Jane"))),
    );
}

// ========================================================================
// Trailing span replacement
// ========================================================================

#[test]
fn test_confirm_replaces_trailing_query_with_token() {
    let mut model = test_model_with_text("hi @jane");
    confirm_jane(&mut model);

    assert_eq!(model.plain_text(), "hi Jane");
    assert_eq!(
        model.surface.runs(),
        &[
            Run::text("hi "),
            Run::Mention {
                contact_id: 7,
                display_name: "Jane Doe".to_string(),
                label: "Jane".to_string(),
            },
        ]
    );
    assert_eq!(model.surface.caret(), 7);
    assert_eq!(model.carrier.as_deref(), Some("hi Jane"));
}

#[test]
fn test_token_keeps_full_contact_metadata() {
    let mut model = test_model_with_text("@jane");
    confirm_jane(&mut model);

    let token = model
        .surface
        .runs()
        .iter()
        .find(|r| r.is_mention())
        .expect("token present");
    assert_eq!(
        token,
        &Run::Mention {
            contact_id: 7,
            display_name: "Jane Doe".to_string(),
            label: "Jane".to_string(),
        }
    );
}

#[test]
fn test_typing_continues_after_the_token() {
    let mut model = test_model_with_text("hi @jane");
    confirm_jane(&mut model);
    type_text(&mut model, " see");

    assert_eq!(model.plain_text(), "hi Jane see");
    assert_eq!(model.surface.runs().len(), 3);
    assert_eq!(model.surface.runs()[2], Run::text(" see"));
}

#[test]
fn test_confirm_closes_an_open_dropdown() {
    let mut model = test_model();
    open_dropdown(&mut model); // surface is "@al"
    update(
        &mut model,
        Msg::Host(HostMsg::ConfirmMention(contact(1, "Alice Smith", "Alice"))),
    );
    assert!(!model.dropdown_open());
    assert_eq!(model.plain_text(), "Alice");
}

// ========================================================================
// No-op races
// ========================================================================

#[test]
fn test_text_typed_past_the_query_is_a_noop() {
    let mut model = test_model_with_text("hi @jane see");
    confirm_jane(&mut model);

    assert_eq!(model.plain_text(), "hi @jane see");
    assert!(!model.surface.runs().iter().any(Run::is_mention));
}

#[test]
fn test_query_deleted_before_confirmation_is_a_noop() {
    let mut model = test_model_with_text("@ja");
    for _ in 0..3 {
        handle_key(&mut model, Key::Backspace, false);
    }
    confirm_jane(&mut model);

    assert_eq!(model.plain_text(), "");
    assert!(model.surface.is_empty());
}

#[test]
fn test_empty_first_name_falls_back_to_display_name() {
    let mut model = test_model_with_text("@jane");
    update(
        &mut model,
        Msg::Host(HostMsg::ConfirmMention(contact(7, "Jane Doe", ""))),
    );
    assert_eq!(model.plain_text(), "Jane Doe");
}

// ========================================================================
// Token atomicity
// ========================================================================

#[test]
fn test_backspace_removes_the_whole_token() {
    let mut model = test_model_with_text("hi @jane");
    confirm_jane(&mut model);

    handle_key(&mut model, Key::Backspace, false);
    assert_eq!(model.plain_text(), "hi ");
    assert!(!model.surface.runs().iter().any(Run::is_mention));
    assert_eq!(model.carrier.as_deref(), Some("hi "));
}

#[test]
fn test_no_operation_leaves_a_partial_token() {
    let mut model = test_model_with_text("hi @jane");
    confirm_jane(&mut model);

    // after any number of backspaces the label is either whole or gone
    for _ in 0..8 {
        handle_key(&mut model, Key::Backspace, false);
        let text = model.plain_text();
        let has_token = model.surface.runs().iter().any(Run::is_mention);
        if has_token {
            assert!(text.contains("Jane"), "token must stay whole, got {text:?}");
        } else {
            assert!(!text.contains("Jane"), "token must vanish whole, got {text:?}");
        }
    }
    assert_eq!(model.plain_text(), "");
}
