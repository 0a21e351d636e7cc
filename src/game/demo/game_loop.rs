//! Standalone demo loop for local play.
//!
//! Drives a game session from the terminal, standing in for the host engine:
//! stdin commands play the role of pointer events and a fixed-dt loop plays
//! the role of the frame clock. The stage and animation collaborators are
//! deliberately left unattached; the game degrades to the config fallback
//! durations and this module renders the road directly from the session.

use std::io::{self, Write};

use log::warn;

use crate::config::game::{DEMO_FRAME_DT, GameConfig};
use crate::game::demo::render::print_road;
use crate::game::hooks::{HostHooks, Hud};
use crate::game::session::Game;
use crate::game::types::GamePhase;

/// HUD backed by the terminal: the menu is a command banner, the step label a
/// printed line.
struct TerminalHud;

impl Hud for TerminalHud {
    fn set_menu_visible(&mut self, visible: bool) {
        if visible {
            println!("=== ROAD HOPPER ===");
            println!("s: start   1: one step   2: two steps   q: quit");
        }
    }

    fn set_steps_text(&mut self, text: &str) {
        println!("Steps: {}", text);
    }
}

/// Prompt for and read one command line.
fn read_command() -> io::Result<String> {
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Pump the simulated frame clock: give the input guard time to elapse, then
/// keep updating until any in-flight jump has landed.
fn settle(game: &mut Game, config: &GameConfig) {
    let guard_frames = (config.input_guard_delay / DEMO_FRAME_DT).ceil() as u32 + 1;
    for _ in 0..guard_frames {
        game.update(DEMO_FRAME_DT);
    }
    while game.is_jumping() {
        game.update(DEMO_FRAME_DT);
    }
}

/// Run the interactive demo loop until the player quits.
pub fn run_demo(config: &GameConfig, dump_json: bool) -> io::Result<()> {
    let hooks = HostHooks {
        hud: Some(Box::new(TerminalHud)),
        ..Default::default()
    };
    let mut game = Game::new(config, hooks);

    loop {
        let command = read_command()?;
        let phase_before = game.phase();

        match command.as_str() {
            "q" => break,
            "s" => game.start(),
            "1" => game.handle_pointer_up(0),
            "2" => game.handle_pointer_up(2),
            "" => continue,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        }

        settle(&mut game, config);

        if phase_before == GamePhase::Playing && game.phase() == GamePhase::Init {
            println!("The run is over. Press s to go again.");
        }

        print_road(game.road(), game.player_position(), config.tile_size);

        if dump_json {
            match serde_json::to_string(&game.snapshot()) {
                Ok(text) => println!("{}", text),
                Err(e) => warn!("[Demo] snapshot serialization failed: {}", e),
            }
        }
    }

    Ok(())
}
