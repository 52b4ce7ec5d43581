//! Bot profile loading
//!
//! A bot is described by a small TOML profile of behavior weights. Loading
//! is the narrow contract the harness depends on; what the engine does with
//! the weights is its own business. Workers re-load profiles from their
//! source paths rather than sharing loaded state.

use crate::core::error::{BotgridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_weight() -> f32 {
    0.5
}

/// Behavior weights for one competitor (0.0 to 1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotProfile {
    /// Display name; defaults to the profile file stem
    #[serde(default)]
    pub name: String,
    /// Tendency to press attacks
    #[serde(default = "default_weight")]
    pub aggression: f32,
    /// Ability to absorb attacks
    #[serde(default = "default_weight")]
    pub defense: f32,
    /// Consistency of targeting from turn to turn
    #[serde(default = "default_weight")]
    pub focus: f32,
}

impl Default for BotProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            aggression: 0.5,
            defense: 0.5,
            focus: 0.5,
        }
    }
}

/// Load a bot profile from its source file
pub fn load_bot(path: &Path) -> Result<BotProfile> {
    let contents = fs::read_to_string(path).map_err(|e| {
        BotgridError::Config(format!("failed to read bot file {:?}: {}", path, e))
    })?;

    let mut profile: BotProfile = toml::from_str(&contents)
        .map_err(|e| BotgridError::Config(format!("failed to parse bot profile {:?}: {}", path, e)))?;

    if profile.name.is_empty() {
        profile.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bot".to_string());
    }
    Ok(profile)
}
