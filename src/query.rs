//! Detection of an active, unterminated @query at the caret.

/// An in-progress mention query: the span between the last `@` before the
/// caret and the caret itself. Transient, re-derived on every input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionQuery {
    /// Char offset of the `@` in the plain text.
    pub start_offset: usize,
    /// Query text (everything after the `@`, up to the caret).
    pub text: String,
}

/// Find the active mention query at the caret, if any.
///
/// Looks for the rightmost `@` in the text before the caret. The query is
/// valid only when it is at least `min_len` characters long and contains no
/// whitespace; a span that is too short, or that crosses a word boundary,
/// counts as no active query (the `@` stays ordinary text).
pub fn detect(plain_text: &str, caret_offset: usize, min_len: usize) -> Option<MentionQuery> {
    let before: Vec<char> = plain_text.chars().take(caret_offset).collect();
    let at_pos = before.iter().rposition(|&c| c == '@')?;
    let text: String = before[at_pos + 1..].iter().collect();
    if before.len() - at_pos - 1 < min_len || text.chars().any(char::is_whitespace) {
        return None;
    }
    Some(MentionQuery {
        start_offset: at_pos,
        text,
    })
}
