//! Error taxonomy for board positions and move application.
//!
//! Position errors (`InvalidIndex`, `InvalidCoordinate`, `MalformedCell`)
//! signal malformed or out-of-range input and are surfaced immediately at
//! the call site. `IllegalMove` signals a removal or jump that violates the
//! board's occupancy invariants; the solver never triggers it because it
//! only applies moves the engine has already validated, so for library
//! callers it indicates a programming error rather than a recoverable
//! condition.

use thiserror::Error;

/// Errors produced by coordinate resolution and move application.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A 1-based cell index outside the valid range.
    #[error("index {index} is not a valid cell (cell indices start at 1)")]
    InvalidIndex {
        /// The offending index.
        index: usize,
    },

    /// A (row, column) pair that does not lie on the triangle.
    #[error("({row}, {col}) is not a cell on the triangle")]
    InvalidCoordinate {
        /// The row of the offending coordinate.
        row: usize,
        /// The column of the offending coordinate.
        col: usize,
    },

    /// A cell given as text that parses as neither an index nor a coordinate.
    #[error("malformed cell {input:?}: expected an index like \"5\" or a coordinate like \"2,1\"")]
    MalformedCell {
        /// The text that failed to parse.
        input: String,
    },

    /// A removal or jump that violates the occupancy invariants.
    #[error("illegal move: {0}")]
    IllegalMove(MoveViolation),
}

/// The specific occupancy invariant an illegal move violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveViolation {
    /// The cell a peg should jump from (or be removed from) is empty.
    #[error("no peg at source cell {0}")]
    SourceEmpty(usize),

    /// The cell being jumped over holds no peg to capture.
    #[error("no peg to jump over at cell {0}")]
    MidpointEmpty(usize),

    /// The landing cell already holds a peg.
    #[error("destination cell {0} is already occupied")]
    DestinationOccupied(usize),

    /// A direct removal was attempted after the opening move.
    #[error("the board already has moves; removal is only valid as the opening move")]
    RemovalAfterFirstMove,
}
