use thiserror::Error;
use crate::core::Coordinate;

/// Malformed input, surfaced before any simulation step runs.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("input contains no grid rows")]
    EmptyGrid,
    #[error("grid row {row} has length {found}, expected {expected}")]
    NonRectangular { row: usize, expected: usize, found: usize },
    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol { symbol: char, row: usize, column: usize },
    #[error("no agent marker found in grid")]
    MissingAgent,
    #[error("second agent marker at {second:?}, first was at {first:?}")]
    MultipleAgents { first: Coordinate, second: Coordinate },
    #[error("wide box half at {at:?} has no matching partner")]
    UnpairedWideBox { at: Coordinate },
    #[error("grid at {at:?} already holds wide boxes and cannot be widened again")]
    AlreadyWide { at: Coordinate },
    #[error("occupant at {at:?} lies outside the grid bounds")]
    OutOfBounds { at: Coordinate },
    #[error("unknown direction symbol {symbol:?} at move {index}")]
    UnknownDirection { symbol: char, index: usize },
    #[error("input contains no moves")]
    MissingMoves,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
