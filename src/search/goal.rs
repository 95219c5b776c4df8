//! The goal set of the puzzle. Rather than a single target board, any board
//! whose non-blank tiles read 1 to 8 in row-major order is accepted, no
//! matter where the blank sits. That gives exactly nine goal boards.

use crate::search::{action::NUM_CELLS, PuzzleState};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The tiles 1 to 8 in the order every goal board lists them.
const GOAL_ORDER: [u8; NUM_CELLS - 1] = [1, 2, 3, 4, 5, 6, 7, 8];

static GOAL_TILES: Lazy<HashSet<[u8; NUM_CELLS]>> = Lazy::new(|| {
    (0..NUM_CELLS)
        .map(|blank_index| {
            let mut tiles = [0; NUM_CELLS];
            let (before, after) = GOAL_ORDER.split_at(blank_index);
            tiles[..blank_index].copy_from_slice(before);
            tiles[blank_index + 1..].copy_from_slice(after);
            tiles
        })
        .collect()
});

/// Returns true if the tiles form one of the nine goal boards.
pub fn is_goal_tiles(tiles: &[u8; NUM_CELLS]) -> bool {
    GOAL_TILES.contains(tiles)
}

/// All nine goal boards, in no particular order.
pub fn goal_states() -> impl Iterator<Item = PuzzleState> {
    GOAL_TILES
        .iter()
        .map(|tiles| PuzzleState::from_valid_tiles(*tiles))
}

/// The two cells a tile may occupy on some goal board: cell `tile - 1` when
/// the blank comes after it, cell `tile` when the blank comes before it.
pub fn goal_cells(tile: u8) -> (usize, usize) {
    debug_assert!((1..=8).contains(&tile), "the blank has no goal cell");
    let tile = tile as usize;
    (tile - 1, tile)
}
