//! Maze settings
//!
//! Persisted as JSON: LocalStorage on the web, a file on native.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{MovementModel, StepParams};

/// Environment variable naming a native settings file
pub const SETTINGS_ENV: &str = "MAZE_WALK_SETTINGS";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cell edge length in world units
    pub cell_size: f32,
    /// Walking speed (world units/second)
    pub move_speed: f32,
    /// Camera height; carried through but ignored by collision
    pub eye_height: f32,
    /// Spawn point as world `[x, z]`; center of cell (1, 1) when unset
    pub spawn: Option<[f32; 2]>,
    pub movement: MovementModel,
    /// Text of the banner shown on reaching the goal
    pub goal_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            move_speed: MOVE_SPEED,
            eye_height: EYE_HEIGHT,
            spawn: None,
            movement: MovementModel::Direct,
            goal_text: GOAL_TEXT.to_string(),
        }
    }
}

impl Settings {
    /// Spawn position in world space
    pub fn spawn_position(&self) -> Vec3 {
        let [x, z] = self
            .spawn
            .unwrap_or([self.cell_size * 1.5, self.cell_size * 1.5]);
        Vec3::new(x, self.eye_height, z)
    }

    pub fn step_params(&self) -> StepParams {
        StepParams {
            speed: self.move_speed,
            model: self.movement,
        }
    }

    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings JSON ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file (native)
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "maze_walk_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load from the file named by `MAZE_WALK_SETTINGS`, or defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(path),
            None => Self::default(),
        }
    }
}
