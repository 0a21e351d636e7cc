//! Game state manager.
//!
//! Owns the road, the current phase and the stage/HUD collaborators: lays out
//! a fresh road on each reset, keeps the step label current, and decides when
//! a landing ends the run.

use log::info;
use rand::rngs::StdRng;

use crate::config::game::GameConfig;
use crate::game::hooks::{Hud, Stage};
use crate::game::road::generate_road;
use crate::game::types::{GamePhase, Tile};

pub struct GameManager {
    road: Vec<Tile>,
    road_length: usize,
    tile_size: f32,
    phase: GamePhase,
    rng: StdRng,
    stage: Option<Box<dyn Stage>>,
    hud: Option<Box<dyn Hud>>,
}

impl GameManager {
    pub fn new(
        config: &GameConfig,
        rng: StdRng,
        stage: Option<Box<dyn Stage>>,
        hud: Option<Box<dyn Hud>>,
    ) -> Self {
        Self {
            road: Vec::new(),
            road_length: config.road_length,
            tile_size: config.tile_size,
            phase: GamePhase::Init,
            rng,
            stage,
            hud,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn road(&self) -> &[Tile] {
        &self.road
    }

    /// Enter the INIT phase: show the start menu and lay out a fresh road.
    pub fn enter_init(&mut self) {
        self.phase = GamePhase::Init;
        if let Some(hud) = self.hud.as_mut() {
            hud.set_menu_visible(true);
        }
        self.regenerate_road();
    }

    /// Enter the PLAYING phase: hide the menu and zero the step label.
    pub fn enter_playing(&mut self) {
        self.phase = GamePhase::Playing;
        if let Some(hud) = self.hud.as_mut() {
            hud.set_menu_visible(false);
            hud.set_steps_text("0");
        }
    }

    /// Rebuild the road and respawn the stage blocks. Only stone tiles get a
    /// block; a gap is the absence of one.
    pub fn regenerate_road(&mut self) {
        self.road = generate_road(self.road_length, &mut self.rng);

        if let Some(stage) = self.stage.as_mut() {
            stage.clear_blocks();
            for (i, tile) in self.road.iter().enumerate() {
                if *tile == Tile::Stone {
                    stage.spawn_block(i, i as f32 * self.tile_size);
                }
            }
        }
        info!("[Manager] road regenerated: {} tiles", self.road.len());
    }

    /// Update the step label after a landing. The displayed count is clamped
    /// to the road length when the character overruns the end.
    pub fn report_steps(&mut self, move_index: u32) {
        let shown = (move_index as usize).min(self.road_length);
        if let Some(hud) = self.hud.as_mut() {
            hud.set_steps_text(&shown.to_string());
        }
    }

    /// Decide whether the landing at `move_index` ends the run: landing on a
    /// gap or past the last tile does, landing on stone does not.
    pub fn check_result(&self, move_index: u32) -> bool {
        let index = move_index as usize;
        if index >= self.road_length {
            return true;
        }
        self.road[index] == Tile::Empty
    }

    /// Test hook: install a fixed road in place of a generated one.
    #[cfg(test)]
    pub(crate) fn set_road(&mut self, road: Vec<Tile>) {
        self.road_length = road.len();
        self.road = road;
    }
}
