//! Game session orchestration.
//!
//! Wires the state manager and the motion controller together and exposes the
//! surface the host driver calls: the start command, pointer events and the
//! per-frame update. The host's scene-graph event bus is replaced by the
//! landing event returned from the controller and consumed here.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use uuid::Uuid;

use crate::config::game::GameConfig;
use crate::game::hooks::HostHooks;
use crate::game::player::PlayerController;
use crate::game::state::GameManager;
use crate::game::types::{GamePhase, Tile, Vec3};

/// Serializable view of a running session, for external frontends.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub run_id: Uuid,
    pub phase: GamePhase,
    pub steps: u32,
    pub road: Vec<Tile>,
    pub player_pos: Vec3,
}

pub struct Game {
    manager: GameManager,
    player: PlayerController,
    run_id: Uuid,
    input_guard: Option<f32>,
    input_guard_delay: f32,
}

impl Game {
    /// Build a session from the given config and host collaborators. A
    /// configured seed makes every road sequence deterministic; otherwise the
    /// RNG is seeded from the OS.
    pub fn new(config: &GameConfig, hooks: HostHooks) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut game = Self {
            manager: GameManager::new(config, rng, hooks.stage, hooks.hud),
            player: PlayerController::new(config, hooks.cues),
            run_id: Uuid::new_v4(),
            input_guard: None,
            input_guard_delay: config.input_guard_delay,
        };
        game.enter_init();
        game
    }

    /// The start/replay command: INIT -> PLAYING. Input is enabled only after
    /// the guard delay has elapsed in `update`, so the click that pressed
    /// Start is swallowed instead of triggering the first jump.
    pub fn start(&mut self) {
        if self.manager.phase() == GamePhase::Playing {
            return;
        }
        self.run_id = Uuid::new_v4();
        self.manager.enter_playing();
        self.input_guard = Some(self.input_guard_delay);
        info!("[Session] run {} started", self.run_id);
    }

    /// Forward a pointer-release event to the controller. Ignored outside the
    /// PLAYING phase.
    pub fn handle_pointer_up(&mut self, button: u8) {
        if self.manager.phase() != GamePhase::Playing {
            return;
        }
        self.player.handle_pointer_up(button);
    }

    /// Per-frame update: counts down the input guard, advances any in-flight
    /// jump and resolves the landing.
    pub fn update(&mut self, dt: f32) {
        if let Some(remaining) = self.input_guard.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.input_guard = None;
                self.player.set_input_enabled(true);
            }
        }

        if let Some(ended) = self.player.advance(dt) {
            self.manager.report_steps(ended.move_index);
            if self.manager.check_result(ended.move_index) {
                info!(
                    "[Session] run {} over after {} steps",
                    self.run_id, ended.move_index
                );
                self.enter_init();
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.manager.phase()
    }

    pub fn steps(&self) -> u32 {
        self.player.move_index()
    }

    pub fn player_position(&self) -> Vec3 {
        self.player.position()
    }

    pub fn road(&self) -> &[Tile] {
        self.manager.road()
    }

    pub fn is_jumping(&self) -> bool {
        self.player.is_jumping()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            run_id: self.run_id,
            phase: self.phase(),
            steps: self.steps(),
            road: self.road().to_vec(),
            player_pos: self.player_position(),
        }
    }

    /// INIT transition shared by construction and end-of-run: fresh road,
    /// character at the origin, input off until the next start command.
    fn enter_init(&mut self) {
        self.manager.enter_init();
        self.player.reset();
        self.player.set_input_enabled(false);
        self.input_guard = None;
    }

    /// Test hook: install a fixed road in place of a generated one.
    #[cfg(test)]
    pub(crate) fn set_road(&mut self, road: Vec<Tile>) {
        self.manager.set_road(road);
    }
}
