//! Terminal rendering for the demo driver.
//!
//! Prints the road and the character position for local play/debugging.

use crate::game::types::{Tile, Vec3};

/// Print the road as one row of glyphs with the character's tile marked.
pub fn print_road(road: &[Tile], player_pos: Vec3, tile_size: f32) {
    let player_index = (player_pos.x / tile_size).round() as usize;

    for (i, tile) in road.iter().enumerate() {
        let symbol = if i == player_index {
            "P"
        } else {
            match tile {
                Tile::Stone => "██",
                Tile::Empty => "  ",
            }
        };
        print!("{:<3}", symbol);
    }
    println!();
}
