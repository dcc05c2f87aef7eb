//! Editable surface: the ordered run sequence behind the mention input.
//!
//! A surface is a list of tagged runs (free text, atomic mention tokens,
//! line breaks) plus a caret expressed in plain-text character coordinates.
//! The plain text is always re-derived from the runs in order, never edited
//! independently, so the flattened view cannot drift from the surface.

use std::ops::Range;

/// A single run in the editable surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Run {
    /// Free-form text. Never contains `\n`; line breaks are their own run.
    Text(String),
    /// Atomic mention token: removed or kept whole, never split by caret
    /// placement or partial edits. Carries the full contact metadata even
    /// though only `label` is visible.
    Mention {
        contact_id: u64,
        display_name: String,
        label: String,
    },
    /// Hard line break; contributes `\n` to the plain text.
    LineBreak,
}

impl Run {
    /// Create a text run.
    pub fn text(s: &str) -> Self {
        Run::Text(s.to_string())
    }

    /// Characters this run contributes to the plain text.
    pub fn len_chars(&self) -> usize {
        match self {
            Run::Text(s) => s.chars().count(),
            Run::Mention { label, .. } => label.chars().count(),
            Run::LineBreak => 1,
        }
    }

    pub fn is_mention(&self) -> bool {
        matches!(self, Run::Mention { .. })
    }

    /// Whether the caret may rest strictly inside this run.
    fn caret_enterable(&self) -> bool {
        matches!(self, Run::Text(_))
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            Run::Text(s) => out.push_str(s),
            Run::Mention { label, .. } => out.push_str(label),
            Run::LineBreak => out.push('\n'),
        }
    }
}

/// The editable surface: runs plus a caret in plain-text char coordinates.
///
/// Invariants kept by every operation:
/// - the caret is within `0..=len_chars()`,
/// - the caret never sits strictly inside an atomic run,
/// - text runs are non-empty and no two are adjacent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    runs: Vec<Run>,
    caret: usize,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a surface from existing runs, caret at the end.
    pub fn from_runs(runs: Vec<Run>) -> Self {
        let mut surface = Self { runs, caret: 0 };
        surface.normalize();
        surface.caret = surface.len_chars();
        surface
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total length of the plain text in characters.
    pub fn len_chars(&self) -> usize {
        self.runs.iter().map(Run::len_chars).sum()
    }

    /// Canonical plain-text projection, in run order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            run.write_plain(&mut out);
        }
        out
    }

    /// Place the caret, clamping to the text bounds and snapping out of any
    /// token interior to the token's end boundary.
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = self.snap(offset.min(self.len_chars()));
    }

    fn snap(&self, offset: usize) -> usize {
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.len_chars();
            if offset > start && offset < end && !run.caret_enterable() {
                return end;
            }
            start = end;
        }
        offset
    }

    // =========================================================================
    // Editing operations
    // =========================================================================

    /// Insert plain text at the caret. `\n` characters become line breaks.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut idx = self.split_at(self.caret);
        for (n, piece) in text.split('\n').enumerate() {
            if n > 0 {
                self.runs.insert(idx, Run::LineBreak);
                idx += 1;
            }
            if !piece.is_empty() {
                self.runs.insert(idx, Run::Text(piece.to_string()));
                idx += 1;
            }
        }
        self.caret += text.chars().count();
        self.normalize();
    }

    /// Insert a single character at the caret.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_line_break();
            return;
        }
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Insert a hard line break at the caret.
    pub fn insert_line_break(&mut self) {
        let idx = self.split_at(self.caret);
        self.runs.insert(idx, Run::LineBreak);
        self.caret += 1;
        self.normalize();
    }

    /// Delete the unit before the caret: one character of text, a whole line
    /// break, or an entire mention token. Tokens are never partially erased.
    /// No-op when the caret is at offset 0.
    pub fn delete_backward(&mut self) {
        if self.caret == 0 {
            return;
        }
        let (i, start) = self.run_before(self.caret);
        if let Run::Text(s) = &mut self.runs[i] {
            let local = self.caret - start;
            let b0 = char_to_byte(s, local - 1);
            let b1 = char_to_byte(s, local);
            s.replace_range(b0..b1, "");
            self.caret -= 1;
        } else {
            // line break or mention: removed as one unit
            let len = self.runs[i].len_chars();
            self.runs.remove(i);
            self.caret -= len;
        }
        self.normalize();
    }

    /// Move the caret one unit left; an atomic token is a single unit.
    pub fn move_left(&mut self) {
        if self.caret == 0 {
            return;
        }
        let (i, start) = self.run_before(self.caret);
        self.caret = match &self.runs[i] {
            Run::Text(_) => self.caret - 1,
            _ => start,
        };
    }

    /// Move the caret one unit right; an atomic token is a single unit.
    pub fn move_right(&mut self) {
        if self.caret >= self.len_chars() {
            return;
        }
        let (i, start) = self.run_at(self.caret);
        self.caret = match &self.runs[i] {
            Run::Text(_) => self.caret + 1,
            run => start + run.len_chars(),
        };
    }

    /// Replace a plain-text char range with a single run. Text runs are
    /// split at the boundaries; atomic runs overlapping the range at all are
    /// dropped whole. The caret lands at the end of the inserted run.
    pub fn replace_range(&mut self, range: Range<usize>, run: Run) {
        let total = self.len_chars();
        let start = range.start.min(total);
        let end = range.end.min(total).max(start);
        let new_len = run.len_chars();

        let mut prefix: Vec<Run> = Vec::with_capacity(self.runs.len() + 2);
        let mut suffix: Vec<Run> = Vec::new();
        let mut pos = 0;
        for r in self.runs.drain(..) {
            let r_end = pos + r.len_chars();
            if r_end <= start {
                prefix.push(r);
            } else if pos >= end {
                suffix.push(r);
            } else if let Run::Text(s) = r {
                // overlapping text run: keep the parts outside the range
                if pos < start {
                    let keep = char_to_byte(&s, start - pos);
                    prefix.push(Run::Text(s[..keep].to_string()));
                }
                if r_end > end {
                    let keep = char_to_byte(&s, end - pos);
                    suffix.push(Run::Text(s[keep..].to_string()));
                }
            }
            pos = r_end;
        }
        prefix.push(run);
        prefix.extend(suffix);
        self.runs = prefix;
        self.caret = start + new_len;
        self.normalize();
    }

    /// Reset to the empty surface.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.caret = 0;
    }

    // =========================================================================
    // Run lookup
    // =========================================================================

    /// Split the run sequence at a char offset, returning the index where
    /// runs covering `offset..` begin. Splits a text run when the offset
    /// falls inside it; offsets inside atomic runs resolve past them.
    fn split_at(&mut self, offset: usize) -> usize {
        let mut start = 0;
        for i in 0..self.runs.len() {
            if offset <= start {
                return i;
            }
            let end = start + self.runs[i].len_chars();
            if offset < end {
                if let Run::Text(s) = &mut self.runs[i] {
                    let byte = char_to_byte(s, offset - start);
                    let tail = s.split_off(byte);
                    self.runs.insert(i + 1, Run::Text(tail));
                }
                return i + 1;
            }
            start = end;
        }
        self.runs.len()
    }

    /// Run containing the character at `offset - 1`, with its start offset.
    fn run_before(&self, offset: usize) -> (usize, usize) {
        debug_assert!(offset > 0);
        let mut start = 0;
        for (i, run) in self.runs.iter().enumerate() {
            let end = start + run.len_chars();
            if offset > start && offset <= end {
                return (i, start);
            }
            start = end;
        }
        (self.runs.len().saturating_sub(1), start)
    }

    /// Run containing the character at `offset`, with its start offset.
    fn run_at(&self, offset: usize) -> (usize, usize) {
        let mut start = 0;
        for (i, run) in self.runs.iter().enumerate() {
            let end = start + run.len_chars();
            if offset >= start && offset < end {
                return (i, start);
            }
            start = end;
        }
        (self.runs.len().saturating_sub(1), start)
    }

    /// Merge adjacent text runs and drop empty ones. The plain text (and
    /// hence the caret) is unaffected.
    fn normalize(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if matches!(&run, Run::Text(s) if s.is_empty()) {
                continue;
            }
            if let (Some(Run::Text(prev)), Run::Text(cur)) = (merged.last_mut(), &run) {
                prev.push_str(cur);
                continue;
            }
            merged.push(run);
        }
        self.runs = merged;
    }
}

/// Byte index of the `n`th char in `s` (or `s.len()` past the end).
fn char_to_byte(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
