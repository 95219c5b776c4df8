use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Width (and height) of the puzzle grid.
pub const GRID_WIDTH: usize = 3;
/// Number of cells on the puzzle grid.
pub const NUM_CELLS: usize = GRID_WIDTH * GRID_WIDTH;

/// A move of the blank cell. The action names the direction in which the
/// blank travels, so [`Action::Up`] swaps the blank with the tile above it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

impl Action {
    /// All actions in the fixed order successors are generated in.
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Whether the blank moves between rows.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Action::Up | Action::Down)
    }

    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }

    /// The action that undoes this one.
    pub fn inverse(&self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Right => Action::Left,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
        }
    }

    /// The cell the blank lands on when this action is applied with the
    /// blank at `blank_index`, or `None` if the move would leave the grid.
    pub fn target_index(&self, blank_index: usize) -> Option<usize> {
        let row = blank_index / GRID_WIDTH;
        let col = blank_index % GRID_WIDTH;
        match self {
            Action::Up if row > 0 => Some(blank_index - GRID_WIDTH),
            Action::Right if col + 1 < GRID_WIDTH => Some(blank_index + 1),
            Action::Down if row + 1 < GRID_WIDTH => Some(blank_index + GRID_WIDTH),
            Action::Left if col > 0 => Some(blank_index - 1),
            _ => None,
        }
    }
}
