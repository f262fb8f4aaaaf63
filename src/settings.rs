//! Game settings
//!
//! Loaded from an optional JSON file; any missing field keeps its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_TICK_RATE, PLAYER_SIZE, PLAYER_SPEED};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Player ===
    /// Pixels moved per tick on each held axis
    pub player_speed: f32,
    /// Side length of the player square
    pub player_size: f32,

    // === Progression ===
    /// Level number a new game starts on (1-based)
    pub start_level: u32,
    /// Optional JSON level set replacing the built-in levels
    pub levels_path: Option<PathBuf>,

    // === Host loop ===
    /// Ticks per second the host scheduler aims for
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            start_level: 1,
            levels_path: None,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Seconds of simulated time covered by `ticks`
    pub fn ticks_to_secs(&self, ticks: u64) -> f64 {
        ticks as f64 / self.tick_rate.max(1) as f64
    }
}
