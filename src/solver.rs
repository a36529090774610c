//! Chronological backtracking search over the 81 cells
use crate::board::Board;
use crate::consts::N_CELLS;

use std::time::{Duration, Instant};

/// Result of a solve attempt.
///
/// `Unsolvable` covers both an exhausted search and a blown time budget;
/// the search cannot tell those apart, so callers must not conclude that
/// no solution exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The board was completed. Contains the solved grid.
    Solved(Board),
    /// No solution was found within the time budget. The partial fill is
    /// still readable through [`Solver::board`].
    Unsolvable,
}

/// A single solve attempt over one [`Board`].
///
/// The solver snapshots the board's cells at construction time; every cell
/// that holds a digit at that point is a given and is never touched by the
/// search. A solver is good for one [`solve`](Solver::solve) call, then a
/// fresh one is constructed for the next attempt.
pub struct Solver {
    board: Board,
    givens: [u8; N_CELLS],
    timeout: Duration,
}

impl Solver {
    /// Default time budget for one [`solve`](Solver::solve) call.
    ///
    /// A tuning constant, not an invariant. It bounds the worst case on
    /// pathological or unsatisfiable inputs; raise it through
    /// [`with_timeout`](Solver::with_timeout) for genuinely hard grids.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

    /// Creates a solver for the given board with the default time budget.
    pub fn new(board: Board) -> Solver {
        Solver::with_timeout(board, Solver::DEFAULT_TIMEOUT)
    }

    /// Creates a solver for the given board with an explicit time budget.
    pub fn with_timeout(board: Board, timeout: Duration) -> Solver {
        Solver {
            board,
            givens: board.to_bytes(),
            timeout,
        }
    }

    /// Returns the board in its current state: untouched before
    /// [`solve`](Solver::solve), fully populated after a successful solve,
    /// partially filled after a failed one.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true if the cell held a digit when the solver was
    /// constructed. Given cells are never altered by the search.
    ///
    /// # Panics
    /// Panics if `cell >= 81`.
    #[inline]
    pub fn is_given(&self, cell: usize) -> bool {
        self.givens[cell] != 0
    }

    /// Runs the search to completion and reports the outcome.
    ///
    /// The search walks a cursor over the cells in order. At each non-given
    /// cell it places the smallest digit not yet present in the cell's row,
    /// column or block. When no digit fits, it clears the cell and walks
    /// the cursor backward to the nearest preceding non-given cell, resuming
    /// there with the next larger digit. Backtracking past cell 0 means no
    /// assignment of the givens can be completed. The elapsed time is
    /// checked once per iteration against the time budget.
    ///
    /// Iterative with O(1) stack; a monotonic clock supplies the budget
    /// check.
    pub fn solve(&mut self) -> Outcome {
        let start_time = Instant::now();
        let mut cell = 0;
        // lowest candidate digit to try at the cursor
        let mut start = 1;
        while self.board.has_empty_cell() {
            if self.is_given(cell) {
                cell += 1;
                start = 1;
            } else {
                let mut placed = false;
                for value in start..=9 {
                    if !self.board.has_value(cell, value) {
                        self.board.set(cell, value);
                        placed = true;
                        break;
                    }
                }
                if placed {
                    cell += 1;
                    start = 1;
                } else {
                    self.board.set(cell, 0);
                    // distance walked backward over given cells
                    let mut back = 1;
                    while back <= cell && self.is_given(cell - back) {
                        back += 1;
                    }
                    if back > cell {
                        return Outcome::Unsolvable;
                    }
                    cell -= back;
                    start = self.board.get(cell) + 1;
                }
            }

            if start_time.elapsed() > self.timeout {
                return Outcome::Unsolvable;
            }
        }
        Outcome::Solved(self.board)
    }
}
