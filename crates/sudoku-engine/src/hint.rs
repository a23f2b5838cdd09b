use rand::RngExt;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::board::{EMPTY, Grid, empty_cells};
use crate::validation::placement_allowed;
use crate::{EngineError, Result};

/// A rule-legal value offered for one empty cell, never committed to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

/// Pick a uniformly random empty cell and a random value that has no
/// conflicts against the current grid state. Judged only against the cells
/// as they stand, so on a board with player errors the value is "legal right
/// now" rather than guaranteed to match a solution; see [`solution_hint`]
/// for the solution-consistent variant.
///
/// If the randomly chosen cell admits no legal value, the other empty cells
/// are tried in random order before giving up.
pub fn hint(grid: &Grid, rng: &mut impl RngExt) -> Result<Hint> {
    let mut empties = empty_cells(grid);
    if empties.is_empty() {
        return Err(EngineError::GridFull);
    }
    empties.shuffle(rng);

    for (row, col) in empties {
        let mut vals: Vec<u8> = (1..=9).collect();
        vals.shuffle(rng);
        for value in vals {
            if placement_allowed(grid, row, col, value) {
                return Ok(Hint { row, col, value });
            }
        }
    }
    Err(EngineError::NoLegalHint)
}

/// Pick a uniformly random empty cell and reveal the retained solution's
/// value for it. Correct by construction regardless of player errors
/// elsewhere on the board.
pub fn solution_hint(grid: &Grid, solution: &Grid, rng: &mut impl RngExt) -> Result<Hint> {
    let empties = empty_cells(grid);
    if empties.is_empty() {
        return Err(EngineError::GridFull);
    }
    let (row, col) = empties[rng.random_range(0..empties.len())];
    debug_assert_ne!(solution[row][col], EMPTY);
    Ok(Hint {
        row,
        col,
        value: solution[row][col],
    })
}
