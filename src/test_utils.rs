use crate::search::{PuzzleState, SearchConfig, SearchResult};
use rand::{rngs::SmallRng, SeedableRng};

/// The canonical goal board.
pub fn solved_state() -> PuzzleState {
    "123456780".parse().unwrap()
}

/// One vertical move away from the canonical goal. Moving the blank down
/// solves it. Note that boards whose blank merely sits elsewhere in the
/// tile order, such as `123456708`, are goals themselves.
pub fn one_move_state() -> PuzzleState {
    "123450786".parse().unwrap()
}

/// A board with odd inversion parity, from which no goal is reachable.
pub fn unsolvable_state() -> PuzzleState {
    "213456780".parse().unwrap()
}

/// Run a search with a fixed seed.
pub fn run(config: &SearchConfig, state: &PuzzleState) -> SearchResult {
    config
        .search(state, &mut SmallRng::seed_from_u64(0))
        .unwrap()
}

/// A board far from every goal, where moves of different prices make
/// cheaper routes to already queued states common.
pub fn deep_state() -> PuzzleState {
    "680725341".parse().unwrap()
}
