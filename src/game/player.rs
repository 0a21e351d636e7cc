//! Player motion controller.
//!
//! Converts discrete step commands into timed, constant-velocity translations
//! along the road axis and reports the cumulative step index when a jump
//! lands. At most one jump is ever in flight; commands arriving mid-jump are
//! dropped so steps can never be double-counted.

use log::debug;

use crate::config::game::GameConfig;
use crate::game::hooks::MotionCues;
use crate::game::types::{JumpStep, Vec3};

/// Transient record of a jump in flight.
#[derive(Debug, Clone, Copy)]
struct JumpState {
    elapsed: f32,
    duration: f32,
    speed: f32,
    target: Vec3,
}

/// Landing notification, carrying the character's new cumulative step index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpEnded {
    pub move_index: u32,
}

pub struct PlayerController {
    pos: Vec3,
    move_index: u32,
    input_enabled: bool,
    in_flight: Option<JumpState>,
    tile_size: f32,
    one_step_duration: f32,
    two_step_duration: f32,
    cues: Option<Box<dyn MotionCues>>,
}

impl PlayerController {
    pub fn new(config: &GameConfig, cues: Option<Box<dyn MotionCues>>) -> Self {
        Self {
            pos: Vec3::ZERO,
            move_index: 0,
            input_enabled: false,
            in_flight: None,
            tile_size: config.tile_size,
            one_step_duration: config.one_step_duration,
            two_step_duration: config.two_step_duration,
            cues,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.pos
    }

    /// Cumulative steps taken since the last reset.
    pub fn move_index(&self) -> u32 {
        self.move_index
    }

    pub fn is_jumping(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Gate for pointer events. While disabled, pointer releases are dropped.
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    /// Forward a pointer-release event: the primary button jumps one step,
    /// the secondary two. Ignored while input is disabled.
    pub fn handle_pointer_up(&mut self, button: u8) {
        if !self.input_enabled {
            return;
        }
        if let Some(step) = JumpStep::from_button(button) {
            self.jump(step);
        }
    }

    /// Start a jump of the given step size. No-op while another jump is in
    /// flight.
    pub fn jump(&mut self, step: JumpStep) {
        if self.in_flight.is_some() {
            return;
        }

        let duration = self.step_duration(step);
        let distance = step.tiles() as f32 * self.tile_size;
        let target = Vec3::new(self.pos.x + distance, self.pos.y, self.pos.z);

        if let Some(cues) = self.cues.as_mut() {
            cues.play(step.clip_name());
        }

        self.move_index += step.tiles();
        self.in_flight = Some(JumpState {
            elapsed: 0.0,
            duration,
            speed: distance / duration,
            target,
        });
        debug!("[Player] jump {:?} toward x = {}", step, target.x);
    }

    /// Advance an in-flight jump by `dt` seconds. Returns the landing event
    /// on the frame the jump completes; None on every other frame and while
    /// idle.
    pub fn advance(&mut self, dt: f32) -> Option<JumpEnded> {
        let jump = self.in_flight.as_mut()?;
        jump.elapsed += dt;

        if jump.elapsed >= jump.duration {
            // Snap to the exact target instead of integrating the last frame,
            // so float error cannot accumulate across jumps.
            let target = jump.target;
            self.in_flight = None;
            self.pos = target;
            return Some(JumpEnded {
                move_index: self.move_index,
            });
        }

        self.pos.x += jump.speed * dt;
        None
    }

    /// Zero the step counter, drop any in-flight jump and return the
    /// character to the origin.
    pub fn reset(&mut self) {
        self.move_index = 0;
        self.in_flight = None;
        self.pos = Vec3::ZERO;
    }

    /// Duration of the motion clip for `step`, falling back to the configured
    /// fixed durations when the host has no animation for it.
    fn step_duration(&self, step: JumpStep) -> f32 {
        self.cues
            .as_ref()
            .and_then(|c| c.clip_duration(step.clip_name()))
            .unwrap_or(match step {
                JumpStep::One => self.one_step_duration,
                JumpStep::Two => self.two_step_duration,
            })
    }
}
