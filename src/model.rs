//! The widget model: all state owned by one mention-input instance.

use crate::config::MentionConfig;
use crate::dropdown::Dropdown;
use crate::styles;
use crate::surface::Surface;

/// All state for a single mention-input widget instance.
///
/// Owned exclusively by the host's UI loop; every change flows through
/// [`crate::update::update`] or [`crate::input::handle_key`]. There is no
/// interior locking because everything runs on that single loop.
#[derive(Debug, Clone, Default)]
pub struct MentionInput {
    /// The editable surface (runs plus caret)
    pub surface: Surface,
    /// The open candidate dropdown, if any
    pub dropdown: Option<Dropdown>,
    /// Companion plain-text carrier the host form submits. `None` when the
    /// host wired no carrier; writes are then skipped silently.
    pub carrier: Option<String>,
    /// Whether focus currently sits inside the dropdown (consulted by the
    /// blur grace check)
    pub focus_in_dropdown: bool,
    /// Widget configuration
    pub config: MentionConfig,
}

impl MentionInput {
    /// Create a widget instance with a wired plain-text carrier.
    ///
    /// Also registers the process-wide mention style defaults; repeated
    /// instantiation does not re-register them.
    pub fn new(config: MentionConfig) -> Self {
        styles::active();
        Self {
            carrier: Some(String::new()),
            config,
            ..Self::default()
        }
    }

    /// Canonical plain text derived from the surface.
    pub fn plain_text(&self) -> String {
        self.surface.plain_text()
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown.is_some()
    }

    /// Push the canonical plain text into the carrier, if one is wired.
    pub fn sync_carrier(&mut self) {
        if let Some(carrier) = self.carrier.as_mut() {
            *carrier = self.surface.plain_text();
        }
    }

    /// Reset surface, carrier, and dropdown (the inward `clear_input`
    /// trigger). Any in-flight search simply finds no active query when its
    /// results arrive.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.dropdown = None;
        self.focus_in_dropdown = false;
        self.sync_carrier();
    }
}
