use serde::{Serialize, Deserialize};

/// Minimal 3-axis position for the character node. Travel happens along +x
/// only; y and z are carried untouched for the host's transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One unit of road: a stone the character can land on, or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Stone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Init,
    Playing,
    Ended,
}

/// Legal step sizes for a single jump command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpStep {
    One,
    Two,
}

impl JumpStep {
    /// Map a pointer button to a step size: primary (0) jumps one tile,
    /// secondary (2) jumps two. Other buttons do nothing.
    pub fn from_button(button: u8) -> Option<Self> {
        match button {
            0 => Some(JumpStep::One),
            2 => Some(JumpStep::Two),
            _ => None,
        }
    }

    pub fn tiles(self) -> u32 {
        match self {
            JumpStep::One => 1,
            JumpStep::Two => 2,
        }
    }

    /// Name of the motion clip the host plays for this step size.
    pub fn clip_name(self) -> &'static str {
        match self {
            JumpStep::One => "oneStep",
            JumpStep::Two => "twoStep",
        }
    }
}
