//! Contact entity resolved by the external search backend.

use serde::{Deserialize, Serialize};

/// A contact returned by the external resolver as a candidate for an
/// in-progress mention query. Read-only from the core's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub display_name: String,
    pub first_name: String,
}

impl Contact {
    pub fn new(id: u64, display_name: &str, first_name: &str) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            first_name: first_name.to_string(),
        }
    }
}
