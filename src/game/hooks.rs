//! Host collaborator boundary.
//!
//! The real game runs inside a scene-graph host that owns rendering, UI and
//! animation playback. These traits are the only surface the game logic
//! touches. Every handle is optional: a missing collaborator is skipped, so
//! an incomplete host setup degrades visually instead of halting the game.

/// Visual road owned by the host's scene: one block node per stone tile.
pub trait Stage {
    /// Place a block for the stone tile at `index`, at world-space `x`.
    fn spawn_block(&mut self, index: usize, x: f32);
    /// Remove every spawned block, ahead of a road regeneration.
    fn clear_blocks(&mut self);
}

/// Start menu and step counter label.
pub trait Hud {
    fn set_menu_visible(&mut self, visible: bool);
    fn set_steps_text(&mut self, text: &str);
}

/// Named motion clips owned by the host's animation system.
pub trait MotionCues {
    /// Duration of the named clip in seconds, if the host has it.
    fn clip_duration(&self, name: &str) -> Option<f32>;
    /// Start playback of the named clip.
    fn play(&mut self, name: &str);
}

/// Bundle of optional collaborators handed to a session at construction.
#[derive(Default)]
pub struct HostHooks {
    pub stage: Option<Box<dyn Stage>>,
    pub hud: Option<Box<dyn Hud>>,
    pub cues: Option<Box<dyn MotionCues>>,
}
