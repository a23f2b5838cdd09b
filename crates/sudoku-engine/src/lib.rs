pub mod board;
pub mod difficulty;
pub mod hint;
pub mod puzzle;
pub mod validation;

use thiserror::Error;

pub use board::{ConflictMap, EMPTY, GivenMask, Grid, empty_grid};
pub use difficulty::Difficulty;
pub use hint::{Hint, hint, solution_hint};
pub use puzzle::{Puzzle, carve, generate, generate_for, generate_puzzle, generate_solved_grid};
pub use validation::{Validation, conflicts, validate};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the 9x9 grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("empties count {0} is outside 0..=81")]
    EmptiesOutOfRange(usize),
    #[error("cannot hint: the grid has no empty cell")]
    GridFull,
    #[error("cannot hint: no empty cell admits a legal value")]
    NoLegalHint,
}

pub type Result<T> = std::result::Result<T, EngineError>;
