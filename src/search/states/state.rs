//! This module contains the definition of a puzzle state: the arrangement of
//! the eight tiles and the blank on the 3x3 grid. A state only describes the
//! board. Where it came from during a search (parent, action, depth) is kept
//! by the search node that owns it.

use crate::search::{
    action::{GRID_WIDTH, NUM_CELLS},
    goal::is_goal_tiles,
    Action, StateError,
};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// The successors of a state. There are never more than four.
pub type Successors = SmallVec<[(Action, PuzzleState); 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PuzzleState {
    /// Tiles in row-major order, 0 is the blank.
    tiles: [u8; NUM_CELLS],
    /// Position of the blank in `tiles`, always derived from `tiles`.
    blank_index: u8,
}

impl PuzzleState {
    /// Create a state from its tiles, checking that they are a permutation
    /// of 0 to 8.
    pub fn new(tiles: [u8; NUM_CELLS]) -> Result<Self, StateError> {
        let mut seen = [false; NUM_CELLS];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(StateError::TileOutOfRange { tile })?;
            if *slot {
                return Err(StateError::DuplicateTile { tile });
            }
            *slot = true;
        }
        Ok(Self::from_valid_tiles(tiles))
    }

    /// Create a state from tiles already known to be a permutation.
    pub(crate) fn from_valid_tiles(tiles: [u8; NUM_CELLS]) -> Self {
        let blank_index = tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("a valid board always has a blank") as u8;
        Self { tiles, blank_index }
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8; NUM_CELLS] {
        &self.tiles
    }

    #[inline(always)]
    pub fn blank_index(&self) -> usize {
        self.blank_index as usize
    }

    pub fn is_goal(&self) -> bool {
        is_goal_tiles(&self.tiles)
    }

    /// Apply an action, returning `None` if it would move the blank off the
    /// grid.
    pub fn apply(&self, action: Action) -> Option<PuzzleState> {
        let target = action.target_index(self.blank_index())?;
        let mut tiles = self.tiles;
        tiles.swap(self.blank_index(), target);
        Some(Self {
            tiles,
            blank_index: target as u8,
        })
    }

    /// Actions that keep the blank on the grid, in the order up, right, down,
    /// left.
    pub fn legal_actions(&self) -> SmallVec<[Action; 4]> {
        Action::ALL
            .into_iter()
            .filter(|action| action.target_index(self.blank_index()).is_some())
            .collect()
    }

    /// Generate all successors in the fixed action order.
    pub fn successors(&self) -> Successors {
        self.expand(self.legal_actions())
    }

    /// Generate all successors, shuffling the legal moves with `rng` before
    /// building the states.
    pub fn shuffled_successors<R: Rng + ?Sized>(&self, rng: &mut R) -> Successors {
        let mut actions = self.legal_actions();
        actions.shuffle(rng);
        self.expand(actions)
    }

    fn expand(&self, actions: SmallVec<[Action; 4]>) -> Successors {
        actions
            .into_iter()
            .filter_map(|action| self.apply(action).map(|successor| (action, successor)))
            .collect()
    }

    /// Render the board as three rows, with `_` for the blank.
    pub fn to_grid_string(&self) -> String {
        self.tiles
            .chunks(GRID_WIDTH)
            .map(|row| {
                row.iter()
                    .map(|&tile| match tile {
                        0 => "_".to_string(),
                        tile => tile.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<[u8; NUM_CELLS]> for PuzzleState {
    type Error = StateError;

    fn try_from(tiles: [u8; NUM_CELLS]) -> Result<Self, Self::Error> {
        Self::new(tiles)
    }
}

impl TryFrom<&[u8]> for PuzzleState {
    type Error = StateError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        let tiles: [u8; NUM_CELLS] = tiles
            .try_into()
            .map_err(|_| StateError::WrongLength { got: tiles.len() })?;
        Self::new(tiles)
    }
}

impl TryFrom<Vec<u8>> for PuzzleState {
    type Error = StateError;

    fn try_from(tiles: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(tiles.as_slice())
    }
}

impl From<PuzzleState> for Vec<u8> {
    fn from(state: PuzzleState) -> Self {
        state.tiles.to_vec()
    }
}

/// Parses either nine packed digits (`"123456780"`) or tiles separated by
/// commas and/or whitespace (`"1,2,3,4,5,6,7,8,0"`).
impl FromStr for PuzzleState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let tokens: Vec<&str> = if s.len() == NUM_CELLS && s.chars().all(|c| c.is_ascii_digit()) {
            (0..NUM_CELLS).map(|i| &s[i..i + 1]).collect()
        } else {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .collect()
        };

        let tiles = tokens
            .into_iter()
            .map(|token| {
                token.parse::<u8>().map_err(|_| StateError::Unparsable {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::try_from(tiles)
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.tiles.iter().map(|tile| tile.to_string()).collect();
        write!(f, "{}", tiles.join(","))
    }
}
