use serde::{Deserialize, Serialize};

use crate::board::{ConflictMap, EMPTY, GivenMask, Grid, box_origin};
use crate::{EngineError, Result};

/// Outcome of a full-board check: `valid` is true only when every
/// player-editable cell is filled and conflict-free.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub conflicts: ConflictMap,
}

/// All other cells in the same row, column, or box as (row, col) that
/// currently hold `value`. The queried cell is never its own row/column/box
/// conflict, but an out-of-range `value` reports the queried cell itself as
/// a sentinel so a stray zero can never pass as "no conflict".
pub fn conflicts(grid: &Grid, row: usize, col: usize, value: u8) -> Result<Vec<(usize, usize)>> {
    if row >= 9 || col >= 9 {
        return Err(EngineError::OutOfBounds { row, col });
    }
    Ok(conflict_cells(grid, row, col, value))
}

/// Core scan shared by the generator, validator, and hint selector.
pub(crate) fn conflict_cells(
    grid: &Grid,
    row: usize,
    col: usize,
    value: u8,
) -> Vec<(usize, usize)> {
    let mut found = Vec::new();

    if !(1..=9).contains(&value) {
        found.push((row, col));
        return found;
    }

    for c in 0..9 {
        if c != col && grid[row][c] == value {
            found.push((row, c));
        }
    }
    for r in 0..9 {
        if r != row && grid[r][col] == value {
            found.push((r, col));
        }
    }
    let (box_r, box_c) = box_origin(row, col);
    for r in box_r..box_r + 3 {
        for c in box_c..box_c + 3 {
            // Box cells sharing the query's row or column were already
            // caught by the scans above; skipping them keeps this a set.
            if r != row && c != col && grid[r][c] == value {
                found.push((r, c));
            }
        }
    }
    found
}

/// True when `value` could be placed at (row, col) without breaking any rule.
pub(crate) fn placement_allowed(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    conflict_cells(grid, row, col, value).is_empty()
}

/// Re-check every player-editable cell. Empty non-given cells and filled
/// non-given cells with conflicts are both flagged; givens are trusted by
/// construction and never re-checked. A full re-scan each call, since player
/// edits can land anywhere.
pub fn validate(grid: &Grid, givens: &GivenMask) -> Validation {
    let mut conflicts = [[false; 9]; 9];
    let mut valid = true;

    for row in 0..9 {
        for col in 0..9 {
            if givens[row][col] {
                continue;
            }
            let filled_ok = grid[row][col] != EMPTY
                && conflict_cells(grid, row, col, grid[row][col]).is_empty();
            if !filled_ok {
                valid = false;
                conflicts[row][col] = true;
            }
        }
    }

    Validation { valid, conflicts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_grid;

    fn grid_with(cells: &[(usize, usize, u8)]) -> Grid {
        let mut grid = empty_grid();
        for &(r, c, v) in cells {
            grid[r][c] = v;
        }
        grid
    }

    #[test]
    fn empty_grid_has_no_conflicts() {
        let grid = empty_grid();
        assert!(conflicts(&grid, 4, 4, 5).unwrap().is_empty());
    }

    #[test]
    fn row_column_and_box_conflicts_are_reported() {
        let grid = grid_with(&[(0, 5, 7), (6, 0, 7), (1, 1, 7)]);
        let found = conflicts(&grid, 0, 0, 7).unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.contains(&(0, 5)));
        assert!(found.contains(&(6, 0)));
        assert!(found.contains(&(1, 1)));
    }

    #[test]
    fn queried_cell_is_not_its_own_conflict() {
        let grid = grid_with(&[(3, 3, 9)]);
        assert!(conflicts(&grid, 3, 3, 9).unwrap().is_empty());
    }

    #[test]
    fn box_mate_on_shared_row_reported_once() {
        // (0,1) shares both the row and the box with (0,0).
        let grid = grid_with(&[(0, 1, 4)]);
        let found = conflicts(&grid, 0, 0, 4).unwrap();
        assert_eq!(found, vec![(0, 1)]);
    }

    #[test]
    fn out_of_range_value_is_a_sentinel_conflict() {
        let grid = empty_grid();
        assert_eq!(conflicts(&grid, 2, 2, 0).unwrap(), vec![(2, 2)]);
        assert_eq!(conflicts(&grid, 2, 2, 10).unwrap(), vec![(2, 2)]);
    }

    #[test]
    fn out_of_range_coordinates_fail_fast() {
        let grid = empty_grid();
        assert!(matches!(
            conflicts(&grid, 9, 0, 1),
            Err(EngineError::OutOfBounds { row: 9, col: 0 })
        ));
        assert!(matches!(
            conflicts(&grid, 0, 12, 1),
            Err(EngineError::OutOfBounds { row: 0, col: 12 })
        ));
    }

    #[test]
    fn validate_flags_empty_player_cells() {
        let grid = grid_with(&[(0, 0, 1)]);
        let mut givens = [[false; 9]; 9];
        givens[0][0] = true;

        let result = validate(&grid, &givens);
        assert!(!result.valid);
        // Every non-given cell is empty, so every one is flagged.
        assert!(!result.conflicts[0][0]);
        assert!(result.conflicts[0][1]);
        assert!(result.conflicts[8][8]);
    }

    #[test]
    fn validate_never_flags_givens() {
        // Player duplicates a given within its row; only the player cell
        // should light up.
        let grid = grid_with(&[(0, 0, 5), (0, 3, 5)]);
        let mut givens = [[true; 9]; 9];
        givens[0][3] = false;

        let result = validate(&grid, &givens);
        assert!(!result.valid);
        assert!(result.conflicts[0][3]);
        assert!(!result.conflicts[0][0]);
    }
}
