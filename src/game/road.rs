//! Road generation.
//!
//! A road is a flat run of tiles: stones the character can land on and gaps
//! it has to jump over.

use rand::Rng;

use crate::game::types::Tile;

/// Generate a road of `length` tiles.
///
/// The first tile is always stone so the character has somewhere to stand.
/// A gap is never followed by another gap, so every road stays traversable
/// with single steps; after a stone the next tile is stone or gap with equal
/// probability.
pub fn generate_road<R: Rng>(length: usize, rng: &mut R) -> Vec<Tile> {
    let mut road = Vec::with_capacity(length);
    if length == 0 {
        return road;
    }
    road.push(Tile::Stone);

    for i in 1..length {
        if road[i - 1] == Tile::Empty {
            road.push(Tile::Stone);
        } else if rng.random_bool(0.5) {
            road.push(Tile::Stone);
        } else {
            road.push(Tile::Empty);
        }
    }

    road
}
