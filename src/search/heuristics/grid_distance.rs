use crate::search::{
    action::GRID_WIDTH, goal::goal_cells, Heuristic, HeuristicValue, PuzzleState,
};

fn manhattan(a: usize, b: usize) -> usize {
    let (row_a, col_a) = (a / GRID_WIDTH, a % GRID_WIDTH);
    let (row_b, col_b) = (b / GRID_WIDTH, b % GRID_WIDTH);
    row_a.abs_diff(row_b) + col_a.abs_diff(col_b)
}

/// Sums, over all tiles, the Manhattan distance to the closer of the two
/// cells the tile can occupy on a goal board, scaled by a constant weight.
#[derive(Debug, Clone)]
pub struct GridDistance {
    weight: f64,
}

impl GridDistance {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for GridDistance {
    fn default() -> Self {
        Self::new(2.)
    }
}

impl Heuristic for GridDistance {
    fn evaluate(&mut self, state: &PuzzleState) -> HeuristicValue {
        let total: usize = state
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile != 0)
            .map(|(cell, &tile)| {
                let (first, second) = goal_cells(tile);
                manhattan(cell, first).min(manhattan(cell, second))
            })
            .sum();
        (total as f64 * self.weight).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search::goal_states, test_utils::*};

    #[test]
    fn zero_on_every_goal() {
        let mut heuristic = GridDistance::default();
        for goal in goal_states() {
            assert_eq!(heuristic.evaluate(&goal).into_inner(), 0.);
        }
    }

    #[test]
    fn single_displaced_tile() {
        let mut heuristic = GridDistance::default();
        // only tile 6 is off, one row below cell 5
        assert_eq!(heuristic.evaluate(&one_move_state()).into_inner(), 2.);
    }

    #[test]
    fn takes_the_nearer_goal_cell() {
        let mut heuristic = GridDistance::default();
        // tile 3 at cell 5: cell 2 is one away, cell 3 is two away
        // tile 6 at cell 8: cell 5 is one away, cell 6 is two away
        let state: PuzzleState = "120453786".parse().unwrap();
        assert_eq!(heuristic.evaluate(&state).into_inner(), 4.);
    }
}
