//! Exhaustive search for winning move sequences.
//!
//! The search walks the whole state space with an explicit work stack
//! rather than call-stack recursion, so memory is bounded by the frontier
//! size and deep boards cannot overflow the stack. Every branch owns its
//! own `Board` copy, so no backtracking or rollback is ever needed.

use crate::engine::Board;
use std::fmt;

/// A move sequence that reduces a board to a single peg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The recorded moves, oldest first: the opening removal followed by
    /// the jump records (each possibly a chain).
    pub moves: Vec<Vec<usize>>,
    /// The terminal board, holding exactly one peg.
    pub board: Board,
}

impl Solution {
    /// The number of move records, the measure solutions are ranked by.
    /// A chain of jumps by the same peg counts as one move.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl fmt::Display for Solution {
    /// Formats the solution as `"{count} moves: {records}"`, with records
    /// separated by `", "` and the hops within a record by `"-"`, e.g.
    /// `6 moves: 2, 7-2, 1-4, 9-7-2, 6-1-4-6, 10-3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records: Vec<String> = self
            .moves
            .iter()
            .map(|record| {
                record
                    .iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect();
        write!(f, "{} moves: {}", self.moves.len(), records.join(", "))
    }
}

/// Finds every move sequence that leaves exactly one peg on the board.
///
/// Performs a depth-first traversal from `start`, expanding each popped
/// state with [`Board::successors`] until the work stack is exhausted. The
/// search space is finite because every move removes a peg. A board that is
/// already solved yields a single solution with its current move list.
///
/// `prune_symmetry` restricts the opening removal to a symmetry-reduced
/// subset of cells (see [`Board::successors`]); it does not deduplicate
/// solutions that are related by symmetry after the first move.
///
/// Solutions are sorted by ascending move-record count. The relative order
/// of equal-length solutions is unspecified.
pub fn solve(start: &Board, prune_symmetry: bool) -> Vec<Solution> {
    let mut solutions = Vec::new();
    let mut stack = vec![start.clone()];

    while let Some(state) = stack.pop() {
        if state.is_solved() {
            solutions.push(Solution {
                moves: state.moves().to_vec(),
                board: state,
            });
        } else {
            stack.extend(state.successors(prune_symmetry));
        }
    }

    solutions.sort_by_key(Solution::move_count);
    solutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Cell;

    #[test]
    fn test_single_peg_board_is_already_solved() {
        let solutions = solve(&Board::new(1), true);
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].moves.is_empty());
        assert_eq!(solutions[0].board.peg_count(), 1);
    }

    #[test]
    fn test_two_row_board_has_no_solutions() {
        assert!(solve(&Board::new(2), false).is_empty());
    }

    #[test]
    fn test_three_row_board_has_no_solutions() {
        assert!(solve(&Board::new(3), true).is_empty());
    }

    #[test]
    fn test_four_row_board_with_pruning() {
        let solutions = solve(&Board::new(4), true);
        assert_eq!(solutions.len(), 14);

        let counts: Vec<usize> = solutions.iter().map(Solution::move_count).collect();
        assert_eq!(counts, vec![6, 6, 7, 7, 7, 7, 8, 8, 8, 8, 8, 9, 9, 9]);
    }

    #[test]
    fn test_four_row_board_without_pruning() {
        let solutions = solve(&Board::new(4), false);
        assert_eq!(solutions.len(), 84);
        assert_eq!(solutions[0].move_count(), 6);
    }

    #[test]
    fn test_every_solution_ends_with_one_peg() {
        for solution in solve(&Board::new(4), true) {
            assert_eq!(solution.board.peg_count(), 1);
            assert!(solution.board.is_solved());
        }
    }

    #[test]
    fn test_solutions_sorted_by_move_count() {
        let solutions = solve(&Board::new(4), false);
        for pair in solutions.windows(2) {
            assert!(pair[0].move_count() <= pair[1].move_count());
        }
    }

    #[test]
    fn test_shortest_solution_replays_to_a_win() {
        let solutions = solve(&Board::new(4), true);
        let shortest = &solutions[0];
        assert_eq!(shortest.move_count(), 6);

        // Replay the records on a fresh board.
        let mut board = Board::new(4);
        let mut records = shortest.moves.iter();
        let removal = records.next().expect("a solution records the removal");
        assert_eq!(removal.len(), 1);
        board.remove(removal[0]).unwrap();
        for record in records {
            let dests: Vec<Cell> = record[1..].iter().map(|&cell| cell.into()).collect();
            board.jump(record[0], &dests).unwrap();
        }
        assert!(board.is_solved());
    }

    #[test]
    fn test_fixed_start_cell_without_solutions() {
        // Removing cell 5 first leaves the 4-row board unsolvable.
        let mut board = Board::new(4);
        board.remove(5).unwrap();
        assert!(solve(&board, true).is_empty());
    }

    #[test]
    fn test_solution_display_notation() {
        let solutions = solve(&Board::new(4), true);
        let rendered = format!("{}", solutions[0]);
        assert!(rendered.starts_with("6 moves: "));
        // Each record joins its cells with '-', records join with ', '.
        let body = rendered.trim_start_matches("6 moves: ");
        assert_eq!(body.split(", ").count(), 6);
    }
}
