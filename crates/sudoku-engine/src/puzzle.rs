use rand::RngExt;
use rand::rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{EMPTY, GivenMask, Grid, empty_grid};
use crate::difficulty::Difficulty;
use crate::validation::placement_allowed;
use crate::{EngineError, Result};

/// A freshly carved puzzle together with the solved grid it was carved from.
/// The solution is retained so hints can stay consistent with an actual
/// solution even after the player has made mistakes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub givens: GivenMask,
    pub solution: Grid,
}

/// Fill the three diagonal boxes with independent random permutations of 1-9.
/// They share no row, column, or box, so no constraint checking is needed;
/// this only shrinks the backtracking search space.
fn seed_diagonal_boxes(grid: &mut Grid, rng: &mut impl RngExt) {
    for box_idx in 0..3 {
        let mut nums: Vec<u8> = (1..=9).collect();
        nums.shuffle(rng);
        let start = box_idx * 3;
        let mut idx = 0;
        for r in start..start + 3 {
            for c in start..start + 3 {
                grid[r][c] = nums[idx];
                idx += 1;
            }
        }
    }
}

/// Backtracking fill over the first empty cell in row-major order, trying
/// candidates in random order. Returns false when some cell admits no
/// candidate, which triggers a backtrack one level up.
fn fill_remaining(grid: &mut Grid, rng: &mut impl RngExt) -> bool {
    for row in 0..9 {
        for col in 0..9 {
            if grid[row][col] == EMPTY {
                let mut vals: Vec<u8> = (1..=9).collect();
                vals.shuffle(rng);
                for val in vals {
                    if placement_allowed(grid, row, col, val) {
                        grid[row][col] = val;
                        if fill_remaining(grid, rng) {
                            return true;
                        }
                        grid[row][col] = EMPTY;
                    }
                }
                trace!(row, col, "no candidate fits, backtracking");
                return false;
            }
        }
    }
    true
}

/// Produce a fully solved grid: every row, column, and box a permutation
/// of 1-9. Distinct results come from the shuffled candidate order.
pub fn generate_solved_grid(rng: &mut impl RngExt) -> Grid {
    let mut grid = empty_grid();
    seed_diagonal_boxes(&mut grid, rng);
    if !fill_remaining(&mut grid, rng) {
        // A diagonally-seeded board always completes; getting here means the
        // constraint check or the seeding is broken.
        unreachable!("backtracking exhausted all candidates on a seeded grid");
    }
    debug!("generated solved grid");
    grid
}

/// Clear exactly `empties` distinct cells from a solved grid, picking cells
/// uniformly at random and retrying already-empty ones. Returns the playable
/// grid and the mask of surviving givens.
pub fn carve(solution: &Grid, empties: usize, rng: &mut impl RngExt) -> Result<(Grid, GivenMask)> {
    if empties > 81 {
        return Err(EngineError::EmptiesOutOfRange(empties));
    }
    // Expects a solved grid; on a partially filled one there may be fewer
    // cells to clear than requested, and the retry loop would never finish.
    let filled = solution.iter().flatten().filter(|&&v| v != EMPTY).count();
    if empties > filled {
        return Err(EngineError::EmptiesOutOfRange(empties));
    }

    let mut grid = *solution;
    let mut remaining = empties;
    while remaining > 0 {
        let row = rng.random_range(0..9);
        let col = rng.random_range(0..9);
        if grid[row][col] != EMPTY {
            grid[row][col] = EMPTY;
            remaining -= 1;
        }
    }

    let mut givens = [[false; 9]; 9];
    for row in 0..9 {
        for col in 0..9 {
            givens[row][col] = grid[row][col] != EMPTY;
        }
    }
    debug!(empties, "carved puzzle");
    Ok((grid, givens))
}

/// Generate a solved grid and carve `empties` cells out of it.
pub fn generate(empties: usize, rng: &mut impl RngExt) -> Result<Puzzle> {
    let solution = generate_solved_grid(rng);
    let (grid, givens) = carve(&solution, empties, rng)?;
    Ok(Puzzle {
        grid,
        givens,
        solution,
    })
}

/// Generate a puzzle for a difficulty tier.
pub fn generate_for(difficulty: Difficulty, rng: &mut impl RngExt) -> Result<Puzzle> {
    generate(difficulty.empties(), rng)
}

/// Generate a puzzle with the ambient thread RNG.
pub fn generate_puzzle(difficulty: Difficulty) -> Puzzle {
    let mut rng = rng();
    generate_for(difficulty, &mut rng).expect("difficulty presets stay within 0..=81")
}
