/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as road length,
/// tile size, and jump timings.
pub const ROAD_LENGTH: usize = 50; // Number of tiles in a generated road.

/// World-space width of one road tile.
pub const TILE_SIZE: f32 = 40.0;

/// Fallback duration (in seconds) of a one-step jump, used when the host has
/// no motion clip to take the timing from.
pub const ONE_STEP_DURATION: f32 = 0.1;

/// Fallback duration (in seconds) of a two-step jump.
pub const TWO_STEP_DURATION: f32 = 0.2;

/// Delay (in seconds) before input is re-enabled after the start command, so
/// the click that pressed Start is not also counted as a jump.
pub const INPUT_GUARD_DELAY: f32 = 0.1;

/// Fixed frame delta (in seconds) for the demo driver's simulated clock.
pub const DEMO_FRAME_DT: f32 = 1.0 / 60.0;

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Runtime overrides for the constants above, loadable from a JSON file.
/// Missing fields keep their default values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub road_length: usize,
    pub tile_size: f32,
    pub one_step_duration: f32,
    pub two_step_duration: f32,
    pub input_guard_delay: f32,
    /// Seed for the road RNG. None seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            road_length: ROAD_LENGTH,
            tile_size: TILE_SIZE,
            one_step_duration: ONE_STEP_DURATION,
            two_step_duration: TWO_STEP_DURATION,
            input_guard_delay: INPUT_GUARD_DELAY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
