use std::io::{self, BufRead};

use sudoku_backtrack::{Board, Outcome, Solver};

// Reads one puzzle per line from stdin in the 81-character line format
// and prints the solution line, or a message when none is found.
fn main() {
    let stdin = io::stdin();
    for (line_nr, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let board = match Board::from_str_line(line) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("line {}: {}", line_nr + 1, err);
                continue;
            }
        };
        let mut solver = Solver::new(board);
        match solver.solve() {
            Outcome::Solved(solution) => println!("{}", solution.to_str_line()),
            Outcome::Unsolvable => println!("Solution can not be found"),
        }
    }
}
