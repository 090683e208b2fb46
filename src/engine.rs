//! Core board mechanics for triangular peg solitaire.
//!
//! This module defines the game's fundamental components:
//! - `Board`: occupancy of the triangular board, the recorded move list,
//!   peg removal and (chained) jump application.
//! - Move generation: `jump_targets` enumerates the legal single jumps from
//!   a cell, `successors` produces every board reachable in one move.
//!
//! Occupancy is stored as a single contiguous array indexed through the
//! `coords` module rather than as nested per-row arrays, giving O(1) access
//! for any cell.

use crate::coords::{coord_to_index, Cell};
use crate::error::{Error, MoveViolation};
use std::fmt;

/// The six jump directions on the triangular lattice, as (row, column)
/// deltas of the landing cell relative to the source. The jumped-over peg
/// sits at the midpoint of the two endpoints.
const JUMP_DIRECTIONS: [(isize, isize); 6] = [
    (-2, 0),  // up and right
    (2, 0),   // down and left
    (0, -2),  // left
    (0, 2),   // right
    (-2, -2), // up and left
    (2, 2),   // down and right
];

/// A triangular peg-solitaire board together with its move history.
///
/// A board of `rows` rows has `rows * (rows + 1) / 2` cells and starts with
/// every cell occupied. The first move must be a direct removal of a single
/// peg ([`Board::remove`]); every later move is a jump ([`Board::jump`])
/// that captures the peg between its endpoints. Each move shrinks the peg
/// count by exactly one, so the board is solved when one peg remains.
///
/// Recorded moves are sequences of 1-based cell indices: `[src]` for the
/// opening removal, `[src, d1, d2, ...]` for a chain of jumps by the same
/// peg. When a new jump starts where the previous record ended, it extends
/// that record instead of opening a new one, so a multi-hop turn counts as
/// a single move.
///
/// # Examples
/// ```
/// use tripeg_solver::engine::Board;
///
/// let mut board = Board::new(4);
/// assert_eq!(board.peg_count(), 10);
///
/// board.remove(1).unwrap();
/// board.jump(4, &[1.into()]).unwrap(); // jump over cell 2
/// assert_eq!(board.peg_count(), 8);
/// assert_eq!(board.moves(), &[vec![1], vec![4, 1]]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cells: Vec<bool>,
    moves: Vec<Vec<usize>>,
    /// Final landing cell of the last recorded move, used to decide whether
    /// a new jump extends that record into a chain.
    last_landing: Option<usize>,
}

impl Board {
    /// Creates a full board with the given number of rows and no moves.
    pub fn new(rows: usize) -> Self {
        Board {
            rows,
            cells: vec![true; rows * (rows + 1) / 2],
            moves: Vec::new(),
            last_landing: None,
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the total number of cells, occupied or not.
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of pegs still on the board.
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Returns `true` when exactly one peg remains.
    pub fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }

    /// Returns the recorded moves, oldest first.
    pub fn moves(&self) -> &[Vec<usize>] {
        &self.moves
    }

    /// Resolves a position to its zero-based offset into the occupancy
    /// array, rejecting positions below the last row.
    fn offset(&self, cell: Cell) -> Result<usize, Error> {
        let (row, col) = cell.coord()?;
        if row >= self.rows {
            return Err(Error::InvalidCoordinate { row, col });
        }
        Ok(coord_to_index(row, col)? - 1)
    }

    /// Returns whether the given cell (index or coordinate) holds a peg.
    pub fn is_occupied(&self, cell: impl Into<Cell>) -> Result<bool, Error> {
        Ok(self.cells[self.offset(cell.into())?])
    }

    /// Removes the peg at `cell` directly, without a jump.
    ///
    /// This is only legal as the opening move on a full board; afterwards
    /// pegs leave the board exclusively by being jumped over.
    ///
    /// # Errors
    /// [`Error::IllegalMove`] when moves have already been recorded or the
    /// cell is empty; a position error when `cell` is not on the board.
    pub fn remove(&mut self, cell: impl Into<Cell>) -> Result<(), Error> {
        let offset = self.offset(cell.into())?;
        if !self.moves.is_empty() {
            return Err(Error::IllegalMove(MoveViolation::RemovalAfterFirstMove));
        }
        if !self.cells[offset] {
            return Err(Error::IllegalMove(MoveViolation::SourceEmpty(offset + 1)));
        }
        self.cells[offset] = false;
        self.moves.push(vec![offset + 1]);
        Ok(())
    }

    /// Jumps the peg at `src` through each destination in `dests` in turn.
    ///
    /// Every hop removes the peg at the midpoint of its endpoints (the
    /// arithmetic mean of the two coordinates) and lands the jumping peg on
    /// an empty cell. The whole chain is applied atomically: if any hop is
    /// illegal, the board is left untouched.
    ///
    /// If the previous recorded move ended on `src`, the hops extend that
    /// record; otherwise a new record `[src, dests...]` is appended.
    ///
    /// # Errors
    /// [`Error::IllegalMove`] when a hop's source or midpoint is empty or
    /// its destination occupied; a position error when an endpoint is not
    /// on the board.
    pub fn jump(&mut self, src: impl Into<Cell>, dests: &[Cell]) -> Result<(), Error> {
        if dests.is_empty() {
            return Ok(());
        }

        // Stage the hops on a scratch copy so a failure mid-chain cannot
        // leave a partially applied move behind.
        let mut staged = self.cells.clone();
        let mut landings = Vec::with_capacity(dests.len());

        let src_cell: Cell = src.into();
        let (mut row, mut col) = src_cell.coord()?;
        let mut src_offset = self.offset(Cell::Coord(row, col))?;
        let chain_src = src_offset + 1;

        for dest in dests {
            let (dest_row, dest_col) = dest.coord()?;
            let dest_offset = self.offset(Cell::Coord(dest_row, dest_col))?;
            let mid_offset = self.offset(Cell::Coord((row + dest_row) / 2, (col + dest_col) / 2))?;

            if !staged[src_offset] {
                return Err(Error::IllegalMove(MoveViolation::SourceEmpty(
                    src_offset + 1,
                )));
            }
            if !staged[mid_offset] {
                return Err(Error::IllegalMove(MoveViolation::MidpointEmpty(
                    mid_offset + 1,
                )));
            }
            if staged[dest_offset] {
                return Err(Error::IllegalMove(MoveViolation::DestinationOccupied(
                    dest_offset + 1,
                )));
            }

            staged[src_offset] = false;
            staged[mid_offset] = false;
            staged[dest_offset] = true;
            landings.push(dest_offset + 1);

            row = dest_row;
            col = dest_col;
            src_offset = dest_offset;
        }

        self.cells = staged;

        let final_landing = *landings.last().expect("dests is non-empty");
        if self.last_landing == Some(chain_src) {
            let record = self
                .moves
                .last_mut()
                .expect("a recorded landing implies a recorded move");
            record.extend(landings);
        } else {
            let mut record = Vec::with_capacity(landings.len() + 1);
            record.push(chain_src);
            record.extend(landings);
            self.moves.push(record);
        }
        self.last_landing = Some(final_landing);
        Ok(())
    }

    /// Enumerates the coordinates a peg at `src` can legally jump to.
    ///
    /// Tries all six lattice directions and keeps those where the landing
    /// cell lies on the board and is empty while the jumped-over cell holds
    /// a peg. This is a pure query; it assumes (and does not check) that
    /// `src` itself holds a peg.
    pub fn jump_targets(&self, src: impl Into<Cell>) -> Result<Vec<(usize, usize)>, Error> {
        let src_cell: Cell = src.into();
        let (row, col) = src_cell.coord()?;
        if row >= self.rows {
            return Err(Error::InvalidCoordinate { row, col });
        }

        let mut targets = Vec::new();
        for (row_delta, col_delta) in JUMP_DIRECTIONS {
            let dest_row = row as isize + row_delta;
            let dest_col = col as isize + col_delta;
            if dest_row < 0 || dest_col < 0 || dest_row >= self.rows as isize || dest_col > dest_row
            {
                continue;
            }
            let (dest_row, dest_col) = (dest_row as usize, dest_col as usize);

            let mid_row = (row + dest_row) / 2;
            let mid_col = (col + dest_col) / 2;
            let mid_offset = mid_row * (mid_row + 1) / 2 + mid_col;
            let dest_offset = dest_row * (dest_row + 1) / 2 + dest_col;

            if self.cells[mid_offset] && !self.cells[dest_offset] {
                targets.push((dest_row, dest_col));
            }
        }
        Ok(targets)
    }

    /// Returns `true` when any peg still has a legal jump.
    pub fn has_jump(&self) -> bool {
        (1..=self.total_cells()).any(|index| {
            self.cells[index - 1]
                && !self
                    .jump_targets(index)
                    .expect("every board cell is a valid position")
                    .is_empty()
        })
    }

    /// Produces every board reachable from this one in a single move.
    ///
    /// On a board with no recorded moves the only option is the opening
    /// removal, tried once per cell; afterwards each occupied cell is tried
    /// against each of its legal jump targets, one hop at a time (chains
    /// arise during search by merging consecutive hops of the same peg).
    ///
    /// With `prune_symmetry` set, opening removals are restricted to a
    /// fundamental domain of the triangle's symmetry group: cells with
    /// `col <= row / 2` and `row <= (rows + col - 1) / 2` (integer
    /// division), the upper half of one edge of each nested sub-triangle.
    /// This is a heuristic reduction that keeps one representative of most,
    /// but not necessarily all, symmetric opening pairs.
    pub fn successors(&self, prune_symmetry: bool) -> Vec<Board> {
        let mut next = Vec::new();
        if self.moves.is_empty() {
            for row in 0..self.rows {
                for col in 0..=row {
                    if prune_symmetry && (col > row / 2 || row > (self.rows + col - 1) / 2) {
                        continue;
                    }
                    let mut board = self.clone();
                    board
                        .remove((row, col))
                        .expect("removal from a full board is always legal");
                    next.push(board);
                }
            }
        } else {
            for index in 1..=self.total_cells() {
                if !self.cells[index - 1] {
                    continue;
                }
                let targets = self
                    .jump_targets(index)
                    .expect("every board cell is a valid position");
                for (dest_row, dest_col) in targets {
                    let mut board = self.clone();
                    board
                        .jump(index, &[Cell::Coord(dest_row, dest_col)])
                        .expect("generated jump targets are legal");
                    next.push(board);
                }
            }
        }
        next
    }
}

impl fmt::Display for Board {
    /// Draws the board as `rows` lines of space-separated glyphs, `o` for a
    /// peg and `.` for an empty cell, each row indented to centre the
    /// triangle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", " ".repeat(self.rows - row - 1))?;
            let start = row * (row + 1) / 2;
            let glyphs: Vec<&str> = self.cells[start..=start + row]
                .iter()
                .map(|&occupied| if occupied { "o" } else { "." })
                .collect();
            write!(f, "{}", glyphs.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_full() {
        let board = Board::new(4);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.total_cells(), 10);
        assert_eq!(board.peg_count(), 10);
        assert!(board.moves().is_empty());
        for index in 1..=10 {
            assert!(board.is_occupied(index).unwrap());
        }
    }

    #[test]
    fn test_cell_count_formula() {
        for rows in 1..=8 {
            let board = Board::new(rows);
            assert_eq!(board.total_cells(), rows * (rows + 1) / 2);
            assert_eq!(board.peg_count(), board.total_cells());
        }
    }

    #[test]
    fn test_single_cell_board_is_immediately_solved() {
        let board = Board::new(1);
        assert!(board.is_solved());
        assert!(!board.has_jump());
    }

    #[test]
    fn test_is_occupied_accepts_both_representations() {
        let mut board = Board::new(4);
        board.remove(5).unwrap();
        assert!(!board.is_occupied(5).unwrap());
        assert!(!board.is_occupied((2, 1)).unwrap());
        assert!(board.is_occupied((2, 0)).unwrap());
    }

    #[test]
    fn test_position_errors() {
        let board = Board::new(4);
        assert_eq!(
            board.is_occupied(0),
            Err(Error::InvalidIndex { index: 0 })
        );
        // Index 11 resolves to (4, 0), one row below the board.
        assert_eq!(
            board.is_occupied(11),
            Err(Error::InvalidCoordinate { row: 4, col: 0 })
        );
        assert_eq!(
            board.is_occupied((2, 3)),
            Err(Error::InvalidCoordinate { row: 2, col: 3 })
        );
    }

    #[test]
    fn test_removal_only_as_opening_move() {
        let mut board = Board::new(4);
        board.remove(2).unwrap();
        assert_eq!(board.peg_count(), 9);
        assert_eq!(board.moves(), &[vec![2]]);

        assert_eq!(
            board.remove(7),
            Err(Error::IllegalMove(MoveViolation::RemovalAfterFirstMove))
        );
        assert_eq!(board.peg_count(), 9);
    }

    #[test]
    fn test_jump_source_must_hold_peg() {
        let mut board = Board::new(4);
        board.remove(2).unwrap();
        assert_eq!(
            board.jump(2, &[Cell::Index(7)]),
            Err(Error::IllegalMove(MoveViolation::SourceEmpty(2)))
        );
    }

    #[test]
    fn test_jump_midpoint_must_hold_peg() {
        let mut board = Board::new(4);
        board.remove(5).unwrap();
        // 2 -> 9 has midpoint 5, which was just emptied.
        assert_eq!(
            board.jump(2, &[Cell::Index(9)]),
            Err(Error::IllegalMove(MoveViolation::MidpointEmpty(5)))
        );
    }

    #[test]
    fn test_jump_destination_must_be_empty() {
        let mut board = Board::new(4);
        board.remove(1).unwrap();
        assert_eq!(
            board.jump(4, &[Cell::Index(6)]),
            Err(Error::IllegalMove(MoveViolation::DestinationOccupied(6)))
        );
    }

    #[test]
    fn test_failed_chain_leaves_board_untouched() {
        let mut board = Board::new(4);
        board.remove(2).unwrap();
        let before = board.clone();

        // First hop 7 -> 2 is legal, second hop 2 -> 9 lands on a peg.
        let result = board.jump(7, &[Cell::Index(2), Cell::Index(9)]);
        assert_eq!(
            result,
            Err(Error::IllegalMove(MoveViolation::DestinationOccupied(9)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_peg_count_decreases_by_one_per_move() {
        let mut board = Board::new(4);
        board.remove(2).unwrap();
        assert_eq!(board.peg_count(), 9);
        board.jump(7, &[Cell::Index(2)]).unwrap();
        assert_eq!(board.peg_count(), 8);
        board.jump(1, &[Cell::Index(4)]).unwrap();
        assert_eq!(board.peg_count(), 7);
    }

    #[test]
    fn test_consecutive_jumps_merge_into_one_record() {
        let mut board = Board::new(4);
        board.remove(2).unwrap();
        board.jump(7, &[Cell::Index(2)]).unwrap();
        board.jump(1, &[Cell::Index(4)]).unwrap();
        board.jump(9, &[Cell::Index(7)]).unwrap();
        // 7 is where the previous record ended, so this extends it.
        board.jump(7, &[Cell::Index(2)]).unwrap();

        assert_eq!(
            board.moves(),
            &[vec![2], vec![7, 2], vec![1, 4], vec![9, 7, 2]]
        );
    }

    #[test]
    fn test_full_game_to_single_peg() {
        // A known shortest solution for the 4-row board.
        let mut board = Board::new(4);
        board.remove(2).unwrap();
        board.jump(7, &[Cell::Index(2)]).unwrap();
        board.jump(1, &[Cell::Index(4)]).unwrap();
        board
            .jump(9, &[Cell::Index(7), Cell::Index(2)])
            .unwrap();
        board
            .jump(6, &[Cell::Index(1), Cell::Index(4), Cell::Index(6)])
            .unwrap();
        board.jump(10, &[Cell::Index(3)]).unwrap();

        assert!(board.is_solved());
        assert_eq!(
            board.moves(),
            &[
                vec![2],
                vec![7, 2],
                vec![1, 4],
                vec![9, 7, 2],
                vec![6, 1, 4, 6],
                vec![10, 3]
            ]
        );
        assert_eq!(format!("{}", board), "   .\n  . o\n . . .\n. . . .");
    }

    #[test]
    fn test_jump_targets_after_opening_removal() {
        let mut board = Board::new(4);
        board.remove(1).unwrap();
        // Only the two pegs directly below the hole can reach it.
        assert_eq!(board.jump_targets(4).unwrap(), vec![(0, 0)]);
        assert_eq!(board.jump_targets(6).unwrap(), vec![(0, 0)]);
        assert!(board.jump_targets(2).unwrap().is_empty());
        assert!(board.jump_targets(10).unwrap().is_empty());
    }

    #[test]
    fn test_has_jump() {
        let mut board = Board::new(4);
        assert!(!board.has_jump());
        board.remove(1).unwrap();
        assert!(board.has_jump());
    }

    #[test]
    fn test_opening_successors_without_pruning() {
        let board = Board::new(4);
        let successors = board.successors(false);
        assert_eq!(successors.len(), 10);
        for successor in &successors {
            assert_eq!(successor.peg_count(), 9);
            assert_eq!(successor.moves().len(), 1);
        }
    }

    #[test]
    fn test_opening_successors_with_pruning() {
        let board = Board::new(4);
        let successors = board.successors(true);
        let removed: Vec<usize> = successors.iter().map(|b| b.moves()[0][0]).collect();
        assert_eq!(removed, vec![1, 2, 5]);
    }

    #[test]
    fn test_jump_successors() {
        let mut board = Board::new(4);
        board.remove(1).unwrap();
        let successors = board.successors(true);
        // Pruning only applies to the opening move; both jumps into the
        // apex hole must appear.
        assert_eq!(successors.len(), 2);
        for successor in &successors {
            assert_eq!(successor.peg_count(), 8);
            assert_eq!(successor.moves().len(), 2);
        }
    }

    #[test]
    fn test_display_full_board() {
        let board = Board::new(4);
        assert_eq!(format!("{}", board), "   o\n  o o\n o o o\no o o o");
    }

    #[test]
    fn test_display_after_removal() {
        let mut board = Board::new(3);
        board.remove(1).unwrap();
        assert_eq!(format!("{}", board), "  .\n o o\no o o");
    }
}
