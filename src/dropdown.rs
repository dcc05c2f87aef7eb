//! Candidate dropdown state machine.
//!
//! One dropdown exists at a time; the model holds it as `Option<Dropdown>`,
//! so "open" is simply `Some`. A fresh dropdown has no highlight: the first
//! ArrowDown selects the first candidate, the first ArrowUp the last.

use crate::contact::Contact;
use crate::messages::Direction;

/// An open candidate list with an optional keyboard highlight.
///
/// Invariant: `candidates` is non-empty and `highlighted` is `None` or a
/// valid index.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    candidates: Vec<Contact>,
    highlighted: Option<usize>,
}

impl Dropdown {
    /// Open a dropdown over search results. Empty results mean "no match"
    /// and never open a list.
    pub fn open(candidates: Vec<Contact>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates,
            highlighted: None,
        })
    }

    pub fn candidates(&self) -> &[Contact] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_contact(&self) -> Option<&Contact> {
        self.highlighted.and_then(|i| self.candidates.get(i))
    }

    /// Move the highlight, wrapping at both ends. With no highlight yet,
    /// Down selects the first candidate and Up selects the last.
    pub fn navigate(&mut self, direction: Direction) {
        let count = self.candidates.len();
        self.highlighted = Some(match (self.highlighted, direction) {
            (None, Direction::Down) => 0,
            (None, _) => count - 1,
            (Some(i), Direction::Down) => (i + 1) % count,
            (Some(i), _) => (i + count - 1) % count,
        });
    }
}
