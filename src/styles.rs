//! Shared mention-token presentation defaults, registered once per process.
//!
//! Every widget instance renders its tokens with the same highlight style,
//! so the defaults live behind a process-wide, idempotent registration
//! rather than per-instance state. The host maps these onto its own styling
//! system when rendering `Run::Mention`.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Visual defaults for rendered mention tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionStyle {
    /// Token background color
    pub background: String,
    /// Token border color
    pub border: String,
    /// Token text color
    pub text: String,
}

impl Default for MentionStyle {
    fn default() -> Self {
        Self {
            background: "#dbeafe".to_string(),
            border: "#93c5fd".to_string(),
            text: "#1e40af".to_string(),
        }
    }
}

static STYLE: OnceLock<MentionStyle> = OnceLock::new();

/// Register process-wide style defaults. The first call wins; repeated
/// widget instantiation is a no-op. Returns the active style.
pub fn register(style: MentionStyle) -> &'static MentionStyle {
    STYLE.get_or_init(|| style)
}

/// The active style, registering the built-in defaults when nothing was
/// registered yet.
pub fn active() -> &'static MentionStyle {
    STYLE.get_or_init(MentionStyle::default)
}
