//! Lunch configuration
//!
//! A single JSON file at ~/.lunch/config.json, loaded once at startup and
//! never re-read during the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use satchel_core::Paths;
use serde::Deserialize;

/// School identity used to query the menu API
#[derive(Debug, Clone, Deserialize)]
pub struct LunchConfig {
    pub school_id: String,
    pub grade: String,
}

/// Fixed config location under the home directory
pub fn config_path() -> PathBuf {
    Paths::new().home.join(".lunch").join("config.json")
}

impl LunchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Config file not found: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))
    }
}
