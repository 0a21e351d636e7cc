// Demo module for the game. Provides the interactive terminal loop and its
// rendering helpers.
pub mod game_loop;
pub mod render;
