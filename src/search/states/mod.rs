mod generator;
mod state;

pub use generator::{is_solvable, random_solvable_state, scrambled_state};
pub use state::{PuzzleState, Successors};
