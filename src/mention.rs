//! Replacing a trailing @query span with an atomic mention token.

use std::ops::Range;

use crate::contact::Contact;
use crate::surface::{Run, Surface};

/// Widest trailing `@name` span, anchored at the end of the plain text.
///
/// The name run is letters only; any other character between the `@` and the
/// end of the text means no span. The range is in char offsets and includes
/// the `@` itself. End-anchoring means a confirmation arriving after the
/// user typed past the query (e.g. `"hi @jane see"`) finds nothing.
pub fn trailing_mention_span(plain_text: &str) -> Option<Range<usize>> {
    let chars: Vec<char> = plain_text.chars().collect();
    let mut i = chars.len();
    while i > 0 && chars[i - 1].is_ascii_alphabetic() {
        i -= 1;
    }
    if i == 0 || i == chars.len() || chars[i - 1] != '@' {
        return None;
    }
    Some(i - 1..chars.len())
}

/// Replace the trailing @query span with one atomic mention token labeled
/// with the contact's first name, and move the caret to the end of the
/// surface. Returns `false` (leaving the surface untouched) when no span is
/// present, which happens when the user edited the query away before the
/// confirmation arrived.
pub fn insert_mention(surface: &mut Surface, contact: &Contact) -> bool {
    let plain_text = surface.plain_text();
    let Some(span) = trailing_mention_span(&plain_text) else {
        tracing::debug!(
            contact_id = contact.id,
            "no trailing @query span, skipping mention insertion"
        );
        return false;
    };
    let label = if contact.first_name.is_empty() {
        contact.display_name.clone()
    } else {
        contact.first_name.clone()
    };
    surface.replace_range(
        span,
        Run::Mention {
            contact_id: contact.id,
            display_name: contact.display_name.clone(),
            label,
        },
    );
    surface.set_caret(surface.len_chars());
    true
}
