//! # Triangular Peg-Solitaire Solver Library
//!
//! This library provides the game logic for triangular peg solitaire (the
//! "coin puzzle": jump pegs over their neighbours until only one remains)
//! and an exhaustive solver that finds every winning move sequence, ranked
//! from shortest to longest.
//!
//! It is used by two binaries:
//! - `solve`: Searches a board of a given size for all solutions and prints
//!   them in move-list notation.
//! - `play`: Allows interactive play via the command line.
//!
//! ## Modules
//! - `coords`: Conversion between 1-based cell indices and (row, column)
//!   coordinates on the triangular board, plus the [`coords::Cell`] type
//!   that accepts either representation.
//! - `engine`: The board representation ([`engine::Board`]), peg removal and
//!   jump mechanics, move recording, and successor generation.
//! - `solver`: The [`solver::solve`] function that exhaustively explores the
//!   state space with an explicit work stack.
//! - `error`: The [`error::Error`] taxonomy shared by the other modules.

pub mod coords;
pub mod engine;
pub mod error;
pub mod solver;
