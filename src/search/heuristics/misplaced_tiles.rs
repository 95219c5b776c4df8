use crate::search::{action::NUM_CELLS, Heuristic, HeuristicValue, PuzzleState};

/// The canonical board the tiles are compared against.
const CANONICAL: [u8; NUM_CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Counts the tiles that are not where the canonical board puts them,
/// scaled by a constant weight. Only the canonical board is consulted, so on
/// the other eight goal boards the estimate is not zero.
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    weight: f64,
}

impl MisplacedTiles {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for MisplacedTiles {
    fn default() -> Self {
        Self::new(2.)
    }
}

impl Heuristic for MisplacedTiles {
    fn evaluate(&mut self, state: &PuzzleState) -> HeuristicValue {
        let misplaced = state
            .tiles()
            .iter()
            .zip(CANONICAL.iter())
            .filter(|(&tile, &expected)| tile != 0 && tile != expected)
            .count();
        (misplaced as f64 * self.weight).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn canonical_board_scores_zero() {
        let mut heuristic = MisplacedTiles::default();
        assert_eq!(heuristic.evaluate(&solved_state()).into_inner(), 0.);
    }

    #[test]
    fn blank_is_not_counted() {
        let mut heuristic = MisplacedTiles::default();
        // 6 is misplaced, the blank is too but does not count
        assert_eq!(heuristic.evaluate(&one_move_state()).into_inner(), 2.);
    }

    #[test]
    fn other_goal_boards_are_overestimated() {
        let mut heuristic = MisplacedTiles::default();
        let state: PuzzleState = "012345678".parse().unwrap();
        assert!(state.is_goal());
        assert_eq!(heuristic.evaluate(&state).into_inner(), 16.);
    }
}
