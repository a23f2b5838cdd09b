/// Cell value meaning "no digit placed".
pub const EMPTY: u8 = 0;

/// 9x9 grid of cell values, 0 for empty, 1-9 for placed digits.
pub type Grid = [[u8; 9]; 9];

/// Parallel mask, true where the carver left a pre-filled given.
pub type GivenMask = [[bool; 9]; 9];

/// Per-cell conflict flags produced by the validator.
pub type ConflictMap = [[bool; 9]; 9];

pub fn empty_grid() -> Grid {
    [[EMPTY; 9]; 9]
}

/// Top-left corner of the 3x3 box containing (row, col).
pub fn box_origin(row: usize, col: usize) -> (usize, usize) {
    ((row / 3) * 3, (col / 3) * 3)
}

/// Coordinates of every empty cell, in row-major order.
pub fn empty_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..9 {
        for col in 0..9 {
            if grid[row][col] == EMPTY {
                cells.push((row, col));
            }
        }
    }
    cells
}
