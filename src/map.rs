//! Map loading
//!
//! Maps are literal TOML data consumed by the engine. The harness treats
//! their contents as opaque beyond the handful of fields it forwards.

use crate::core::error::{BotgridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in map used when no map file is given
const DEFAULT_MAP: &str = include_str!("../data/maps/default.toml");

fn default_robots_per_side() -> u32 {
    50
}

fn default_turns() -> u32 {
    100
}

/// Grid layout for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridMap {
    pub width: u32,
    pub height: u32,
    /// Robots each side fields at spawn
    #[serde(default = "default_robots_per_side")]
    pub robots_per_side: u32,
    /// Turns before the match is scored
    #[serde(default = "default_turns")]
    pub turns: u32,
}

impl GridMap {
    /// Load a map file, or the built-in default when `path` is None
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                BotgridError::Config(format!("failed to read map file {:?}: {}", path, e))
            })?,
            None => DEFAULT_MAP.to_string(),
        };

        let map: GridMap = toml::from_str(&contents)
            .map_err(|e| BotgridError::Config(format!("failed to parse map: {}", e)))?;
        Ok(map)
    }
}
