//! Submission gate tests - Enter routing between submit, newline, and select

mod common;

use common::{contact, open_dropdown, test_model, test_model_with_text};
use mention_input::commands::Cmd;
use mention_input::input::{handle_key, Key};
use mention_input::messages::{HostMsg, Msg};
use mention_input::surface::Run;
use mention_input::update::update;

#[test]
fn test_enter_submits_exactly_once_with_the_flattened_text() {
    let mut model = test_model_with_text("hello");
    let cmd = handle_key(&mut model, Key::Enter, false);
    assert_eq!(
        cmd,
        Some(Cmd::Submit {
            message: "hello".to_string()
        })
    );
    assert_eq!(model.carrier.as_deref(), Some("hello"));
    // the surface itself is untouched by submission
    assert_eq!(model.plain_text(), "hello");
}

#[test]
fn test_submit_flattens_tokens_into_labels() {
    let mut model = test_model_with_text("hi @jane");
    update(
        &mut model,
        Msg::Host(HostMsg::ConfirmMention(contact(7, "Jane Doe", "Jane"))),
    );
    let cmd = handle_key(&mut model, Key::Enter, false);
    assert_eq!(
        cmd,
        Some(Cmd::Submit {
            message: "hi Jane".to_string()
        })
    );
}

#[test]
fn test_shift_enter_inserts_a_line_break_and_never_submits() {
    let mut model = test_model_with_text("hello");
    let cmd = handle_key(&mut model, Key::Enter, true);
    assert!(!matches!(cmd, Some(Cmd::Submit { .. })));
    assert_eq!(model.plain_text(), "hello\n");
    assert_eq!(model.surface.runs()[1], Run::LineBreak);
}

#[test]
fn test_enter_with_open_dropdown_selects_instead_of_submitting() {
    let mut model = test_model();
    open_dropdown(&mut model);
    handle_key(&mut model, Key::ArrowDown, false); // highlight Alice
    let cmd = handle_key(&mut model, Key::Enter, false);
    assert_eq!(cmd, Some(Cmd::SelectContact { contact_id: 1 }));
    assert!(!model.dropdown_open());
}

#[test]
fn test_enter_with_no_highlight_is_swallowed() {
    let mut model = test_model();
    open_dropdown(&mut model);
    let cmd = handle_key(&mut model, Key::Enter, false);
    assert_eq!(cmd, None);
    assert!(model.dropdown_open(), "list stays open until a pick is made");
}

#[test]
fn test_arrow_keys_fall_through_when_dropdown_is_closed() {
    let mut model = test_model_with_text("ab");
    handle_key(&mut model, Key::ArrowUp, false);
    handle_key(&mut model, Key::ArrowDown, false);
    assert_eq!(model.surface.caret(), 2);
    handle_key(&mut model, Key::ArrowLeft, false);
    assert_eq!(model.surface.caret(), 1);
}
