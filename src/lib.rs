#![warn(missing_docs)]
//! A plain chronological backtracking sudoku solver
//!
//! ## Overview
//!
//! This crate solves classic 9x9 sudokus by exhaustive depth-first
//! backtracking over the cells, bounded by a wall-clock time budget.
//! It is deliberately free of solving strategies: no naked singles, no
//! constraint propagation, just the row/column/block uniqueness rule and
//! a two-pointer walk over the grid. [`Board`] holds the cells and
//! answers the uniqueness queries, [`Solver`] runs the search.
//!
//! ## Example
//!
//! ```
//! use sudoku_backtrack::{Board, Outcome, Solver};
//!
//! let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//!
//! let board = Board::from_str_line(line).unwrap();
//! let mut solver = Solver::new(board);
//! match solver.solve() {
//!     Outcome::Solved(solution) => print!("{}", solution),
//!     Outcome::Unsolvable => println!("Solution can not be found"),
//! }
//! ```
mod board;
mod consts;
pub mod errors;
mod solver;

pub use crate::board::Board;
pub use crate::solver::{Outcome, Solver};
