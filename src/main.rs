//! Main entry point for the terminal demo.
//!
//! Initializes logging, parses the few supported flags and hands control to
//! the interactive demo loop.

use std::env;
use std::io;
use std::path::Path;
use std::process;

pub mod config;
mod game;

use config::game::GameConfig;

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("usage: road-hopper [--config <path.json>] [--seed <u64>] [--json]");
    process::exit(2);
}

fn main() -> io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    let mut config = GameConfig::default();
    let mut dump_json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => dump_json = true,
            "--config" => match args.next() {
                Some(path) => config = GameConfig::from_file(Path::new(&path))?,
                None => usage_error("--config expects a file path"),
            },
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => config.seed = Some(seed),
                None => usage_error("--seed expects an integer"),
            },
            other => usage_error(&format!("unknown flag: {}", other)),
        }
    }

    game::demo::game_loop::run_demo(&config, dump_json)
}
