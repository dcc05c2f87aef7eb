//! Widget configuration
//!
//! Hosts may ship a YAML config file; everything has a sensible default so
//! an unconfigured widget works out of the box.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tunable behavior of a mention-input instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionConfig {
    /// Minimum query length before a search is triggered
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Grace delay between blur and dropdown close, in milliseconds
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
}

fn default_min_query_len() -> usize {
    2
}

fn default_blur_grace_ms() -> u64 {
    150
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            blur_grace_ms: default_blur_grace_ms(),
        }
    }
}

impl MentionConfig {
    /// Load config from a YAML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Load config from a YAML file, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("config file not found at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config
            }
            Err(error) => {
                tracing::warn!(%error, "falling back to default config");
                Self::default()
            }
        }
    }
}
