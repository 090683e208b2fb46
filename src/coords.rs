//! Coordinate mapping for the triangular board.
//!
//! Cells are numbered 1-based in row-major order: the single cell on row 0
//! is index 1, row 1 holds indices 2 and 3, row 2 holds 4, 5, 6, and so on.
//! Row `r` therefore starts at index `r*(r+1)/2 + 1` and a (row, col) pair
//! is valid when `col <= row`.
//!
//! [`Cell`] wraps either representation so callers can use indices and
//! coordinates interchangeably; resolving a `Cell` to the form it already
//! holds is a validated pass-through.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Converts a 1-based cell index to a (row, column) coordinate.
///
/// The row is the largest `r` with `r*(r+1)/2 < index`.
///
/// # Errors
/// Returns [`Error::InvalidIndex`] for index 0.
///
/// # Examples
/// ```
/// use tripeg_solver::coords::index_to_coord;
/// assert_eq!(index_to_coord(1).unwrap(), (0, 0));
/// assert_eq!(index_to_coord(5).unwrap(), (2, 1));
/// assert!(index_to_coord(0).is_err());
/// ```
pub fn index_to_coord(index: usize) -> Result<(usize, usize), Error> {
    if index == 0 {
        return Err(Error::InvalidIndex { index });
    }
    let row = ((8 * (index - 1) + 1).isqrt() - 1) / 2;
    let col = index - 1 - row * (row + 1) / 2;
    Ok((row, col))
}

/// Converts a (row, column) coordinate to a 1-based cell index.
///
/// # Errors
/// Returns [`Error::InvalidCoordinate`] when `col > row`, which lies
/// outside the triangle.
///
/// # Examples
/// ```
/// use tripeg_solver::coords::coord_to_index;
/// assert_eq!(coord_to_index(0, 0).unwrap(), 1);
/// assert_eq!(coord_to_index(3, 2).unwrap(), 9);
/// assert!(coord_to_index(1, 2).is_err());
/// ```
pub fn coord_to_index(row: usize, col: usize) -> Result<usize, Error> {
    if col > row {
        return Err(Error::InvalidCoordinate { row, col });
    }
    Ok(row * (row + 1) / 2 + col + 1)
}

/// A board position given either as a 1-based index or as a (row, column)
/// coordinate.
///
/// Both resolvers validate their input, so an out-of-triangle coordinate or
/// a zero index fails even when no conversion is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A 1-based row-major index.
    Index(usize),
    /// A (row, column) coordinate with `col <= row`.
    Coord(usize, usize),
}

impl Cell {
    /// Resolves this position to a 1-based index.
    pub fn index(self) -> Result<usize, Error> {
        match self {
            Cell::Index(0) => Err(Error::InvalidIndex { index: 0 }),
            Cell::Index(index) => Ok(index),
            Cell::Coord(row, col) => coord_to_index(row, col),
        }
    }

    /// Resolves this position to a (row, column) coordinate.
    pub fn coord(self) -> Result<(usize, usize), Error> {
        match self {
            Cell::Index(index) => index_to_coord(index),
            Cell::Coord(row, col) if col > row => Err(Error::InvalidCoordinate { row, col }),
            Cell::Coord(row, col) => Ok((row, col)),
        }
    }
}

impl From<usize> for Cell {
    fn from(index: usize) -> Self {
        Cell::Index(index)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::Coord(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Index(index) => write!(f, "{}", index),
            Cell::Coord(row, col) => write!(f, "{},{}", row, col),
        }
    }
}

impl FromStr for Cell {
    type Err = Error;

    /// Parses `"5"` as an index and `"2,1"` as a coordinate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedCell {
            input: s.to_string(),
        };
        let s = s.trim();
        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().map_err(|_| malformed())?;
            let col = col.trim().parse().map_err(|_| malformed())?;
            if col > row {
                return Err(Error::InvalidCoordinate { row, col });
            }
            Ok(Cell::Coord(row, col))
        } else {
            let index = s.parse().map_err(|_| malformed())?;
            if index == 0 {
                return Err(Error::InvalidIndex { index });
            }
            Ok(Cell::Index(index))
        }
    }
}
