//! The 9x9 grid and its row, column and block uniqueness queries
use crate::consts::*;
use crate::errors::{FromBytesError, FromBytesSliceError, InvalidEntry, LineParseError};
use crate::solver::{Outcome, Solver};

use std::fmt;

#[inline(always)]
pub(crate) fn row(cell: usize) -> usize {
    cell / DIM
}

#[inline(always)]
pub(crate) fn col(cell: usize) -> usize {
    cell % DIM
}

#[inline(always)]
pub(crate) fn block(cell: usize) -> usize {
    row(cell) / BLOCK_SIZE * BLOCK_SIZE + col(cell) / BLOCK_SIZE
}

/// The 9x9 sudoku grid.
///
/// Cells are numbered 0..=80 going from left to right, top to bottom.
/// A cell contains either a digit `1..=9` or `0` for blank. The board
/// never validates placements on its own: [`set`](Board::set) overwrites
/// unconditionally and legality is the caller's business, checked through
/// [`has_value`](Board::has_value).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board([u8; N_CELLS]);

impl Board {
    /// Creates an all-blank board.
    pub fn new() -> Board {
        Board([0; N_CELLS])
    }

    /// Creates a board from a byte array. `0` marks a blank cell.
    ///
    /// Returns an error if any entry is above 9.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Board, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Board(bytes))
    }

    /// Creates a board from a byte slice. The slice must have length 81
    /// and contain only entries in `0..=9`.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Board, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Board::from_bytes(array)?)
    }

    /// Reads a board from a line of 81 cell characters. Accepted entries
    /// are the digits `1..=9` and `'0'`, `'.'` or `'_'` for blanks.
    /// Anything after the 81st cell must be delimited by a space or tab
    /// and is treated as a comment.
    pub fn from_str_line(s: &str) -> Result<Board, LineParseError> {
        let mut fields = [0; N_CELLS];
        let mut cell = 0;
        let mut chars = s.chars();
        for ch in chars.by_ref() {
            match ch {
                '1'..='9' => fields[cell] = ch as u8 - b'0',
                '0' | '.' | '_' => (),
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: cell as u8,
                        ch,
                    }))
                }
            }
            cell += 1;
            if cell == N_CELLS {
                break;
            }
        }
        if cell < N_CELLS {
            return Err(LineParseError::NotEnoughCells(cell as u8));
        }
        // anything after the grid must be a comment, delimited by space or tab
        match chars.next() {
            None | Some(' ') | Some('\t') => Ok(Board(fields)),
            Some('0'..='9') | Some('.') | Some('_') => Err(LineParseError::TooManyCells),
            Some(_) => Err(LineParseError::MissingCommentDelimiter),
        }
    }

    /// Returns the value of the given cell, `0` for blank.
    ///
    /// # Panics
    /// Panics if `cell >= 81`.
    #[inline]
    pub fn get(&self, cell: usize) -> u8 {
        self.0[cell]
    }

    /// Returns the value at the given row and column, `0` for blank.
    ///
    /// # Panics
    /// Panics if `row >= 9` or `col >= 9`.
    #[inline]
    pub fn get_at(&self, row: usize, col: usize) -> u8 {
        assert!(col < DIM);
        self.get(row * DIM + col)
    }

    /// Overwrites the given cell. `0` clears it. No legality check is
    /// performed.
    ///
    /// # Panics
    /// Panics if `cell >= 81` or `value > 9`.
    #[inline]
    pub fn set(&mut self, cell: usize, value: u8) {
        assert!(value <= 9);
        self.0[cell] = value;
    }

    /// Overwrites the cell at the given row and column. `0` clears it.
    ///
    /// # Panics
    /// Panics if `row >= 9`, `col >= 9` or `value > 9`.
    #[inline]
    pub fn set_at(&mut self, row: usize, col: usize, value: u8) {
        assert!(col < DIM);
        self.set(row * DIM + col, value);
    }

    /// Returns true if `value` occurs anywhere in the row containing `cell`.
    pub fn has_value_in_row(&self, cell: usize, value: u8) -> bool {
        let row = row(cell);
        (0..DIM).any(|col| self.get_at(row, col) == value)
    }

    /// Returns true if `value` occurs anywhere in the column containing `cell`.
    pub fn has_value_in_col(&self, cell: usize, value: u8) -> bool {
        let col = col(cell);
        (0..DIM).any(|row| self.get_at(row, col) == value)
    }

    /// Returns true if `value` occurs anywhere in the 3x3 block containing
    /// `cell`.
    pub fn has_value_in_block(&self, cell: usize, value: u8) -> bool {
        let block_row = row(cell) / BLOCK_SIZE * BLOCK_SIZE;
        let block_col = col(cell) / BLOCK_SIZE * BLOCK_SIZE;
        for row in block_row..block_row + BLOCK_SIZE {
            for col in block_col..block_col + BLOCK_SIZE {
                if self.get_at(row, col) == value {
                    return true;
                }
            }
        }
        false
    }

    /// Returns true if `value` occurs in the row, column or block containing
    /// `cell`. This is the full legality test: placing `value` at `cell` is
    /// legal exactly when this returns false.
    pub fn has_value(&self, cell: usize, value: u8) -> bool {
        self.has_value_in_row(cell, value)
            || self.has_value_in_col(cell, value)
            || self.has_value_in_block(cell, value)
    }

    /// Returns true if the cell contains a digit.
    #[inline]
    pub fn is_occupied(&self, cell: usize) -> bool {
        self.get(cell) != 0
    }

    /// Returns true if any of the 81 cells is still blank.
    pub fn has_empty_cell(&self) -> bool {
        self.0.iter().any(|&value| value == 0)
    }

    /// Returns true if the board is completely filled and every row, column
    /// and block contains each of the digits 1 through 9 exactly once.
    pub fn is_solved(&self) -> bool {
        // digit bitmask per house, bit v set iff digit v was seen
        let mut rows = [0u16; DIM];
        let mut cols = [0u16; DIM];
        let mut blocks = [0u16; DIM];
        for cell in 0..N_CELLS {
            let value = self.0[cell];
            if value == 0 {
                return false;
            }
            let bit = 1 << value;
            if rows[row(cell)] & bit != 0
                || cols[col(cell)] & bit != 0
                || blocks[block(cell)] & bit != 0
            {
                return false;
            }
            rows[row(cell)] |= bit;
            cols[col(cell)] |= bit;
            blocks[block(cell)] |= bit;
        }
        true
    }

    /// Tries to find a solution. Returns `None` if the search exhausts all
    /// candidates or exceeds [`Solver::DEFAULT_TIMEOUT`].
    ///
    /// This is a convenience wrapper around [`Solver`]; construct a solver
    /// directly to control the time budget or inspect a partial fill.
    pub fn solve_one(self) -> Option<Board> {
        match Solver::new(self).solve() {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Unsolvable => None,
        }
    }

    /// Returns the cell values as a byte array, `0` for blank.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the board as a line of 81 characters, `'.'` for blank.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&value| match value {
                0 => '.',
                _ => (b'0' + value) as char,
            })
            .collect()
    }

    /// Returns an iterator over all cells going from left to right, top to
    /// bottom. Blank cells yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.0.iter().map(|&value| match value {
            0 => None,
            _ => Some(value),
        })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// 9 lines of 9 space-separated values, `0` for blank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..DIM {
            for col in 0..DIM {
                if col != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get_at(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
mod serde_board {
    use super::Board;
    use crate::consts::N_CELLS;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Board {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.to_bytes().iter())
        }
    }

    impl<'de> Deserialize<'de> for Board {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
            struct BoardVisitor;

            impl<'de> Visitor<'de> for BoardVisitor {
                type Value = Board;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "a sequence of 81 cell values in 0..=9")
                }

                fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Board, A::Error> {
                    let mut bytes = [0; N_CELLS];
                    for (cell, byte) in bytes.iter_mut().enumerate() {
                        *byte = seq
                            .next_element()?
                            .ok_or_else(|| de::Error::invalid_length(cell, &self))?;
                    }
                    Board::from_bytes(bytes).map_err(de::Error::custom)
                }
            }

            deserializer.deserialize_seq(BoardVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_blank() {
        let board = Board::new();
        for cell in 0..N_CELLS {
            assert_eq!(board.get(cell), 0);
            assert!(!board.is_occupied(cell));
        }
        assert!(board.has_empty_cell());
        assert!(!board.is_solved());
    }

    #[test]
    fn set_changes_only_the_target_cell() {
        let mut board = Board::new();
        board.set(40, 7);
        assert_eq!(board.get(40), 7);
        assert_eq!(board.get_at(4, 4), 7);
        for cell in (0..N_CELLS).filter(|&cell| cell != 40) {
            assert_eq!(board.get(cell), 0);
        }
        board.set(40, 0);
        assert!(!board.is_occupied(40));
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        Board::new().get(81);
    }

    #[test]
    #[should_panic]
    fn set_value_out_of_range_panics() {
        Board::new().set(0, 10);
    }

    #[test]
    fn value_in_row() {
        let mut board = Board::new();
        assert!(!board.has_value_in_row(0, 1));
        board.set(1, 1);
        assert!(board.has_value_in_row(0, 1));
        assert!(!board.has_value_in_row(9, 1));
    }

    #[test]
    fn value_in_col() {
        let mut board = Board::new();
        assert!(!board.has_value_in_col(0, 1));
        board.set(9, 1);
        assert!(board.has_value_in_col(0, 1));
        assert!(!board.has_value_in_col(1, 1));
    }

    #[test]
    fn value_in_block() {
        let mut board = Board::new();
        assert!(!board.has_value_in_block(0, 1));
        board.set(2, 1);
        assert!(board.has_value_in_block(0, 1));
        assert!(board.has_value_in_block(9, 1));
        assert!(board.has_value_in_block(18, 1));
        assert!(board.has_value_in_block(20, 1));
        assert!(!board.has_value_in_block(27, 1));
        assert!(!board.has_value_in_block(22, 1));
    }

    #[test]
    fn has_value_covers_all_three_houses() {
        let mut board = Board::new();
        board.set(2, 5);
        // same block
        assert!(board.has_value(10, 5));
        // same row, different block
        assert!(board.has_value(8, 5));
        // same column, different block
        assert!(board.has_value(74, 5));
        // no shared house
        assert!(!board.has_value(30, 5));
    }

    #[test]
    fn queries_are_pure() {
        let mut board = Board::new();
        board.set(13, 4);
        assert_eq!(board.has_value(22, 4), board.has_value(22, 4));
        assert_eq!(board.get(13), board.get(13));
    }

    #[test]
    fn display_has_nine_space_separated_rows() {
        let mut board = Board::new();
        board.set(0, 3);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "3 0 0 0 0 0 0 0 0");
        assert_eq!(lines[8], "0 0 0 0 0 0 0 0 0");
    }

    #[test]
    fn parse_line_roundtrip() {
        let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let board = Board::from_str_line(line).unwrap();
        assert_eq!(board.get(0), 5);
        assert_eq!(board.get(2), 0);
        assert_eq!(board.to_str_line(), line);
    }

    #[test]
    fn parse_line_accepts_comment() {
        let line: String = std::iter::repeat('.')
            .take(81)
            .chain(" a comment".chars())
            .collect();
        let board = Board::from_str_line(&line).unwrap();
        assert!(board.has_empty_cell());
    }

    #[test]
    fn parse_line_rejects_invalid_char() {
        let line = "..x..............................................................................";
        match Board::from_str_line(line) {
            Err(LineParseError::InvalidEntry(entry)) => {
                assert_eq!(entry.cell, 2);
                assert_eq!(entry.ch, 'x');
                assert_eq!(entry.row(), 0);
                assert_eq!(entry.col(), 2);
                assert_eq!(entry.block(), 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn parse_line_rejects_wrong_lengths() {
        assert_eq!(
            Board::from_str_line("123"),
            Err(LineParseError::NotEnoughCells(3))
        );
        let too_long: String = std::iter::repeat('.').take(82).collect();
        assert_eq!(
            Board::from_str_line(&too_long),
            Err(LineParseError::TooManyCells)
        );
        let missing_delimiter: String = std::iter::repeat('.').take(81).chain("x".chars()).collect();
        assert_eq!(
            Board::from_str_line(&missing_delimiter),
            Err(LineParseError::MissingCommentDelimiter)
        );
    }

    #[test]
    fn from_bytes_slice_validates() {
        assert!(matches!(
            Board::from_bytes_slice(&[0; 80]),
            Err(FromBytesSliceError::WrongLength(80))
        ));
        let mut bytes = [0; N_CELLS];
        bytes[17] = 10;
        assert!(matches!(
            Board::from_bytes_slice(&bytes),
            Err(FromBytesSliceError::FromBytesError(_))
        ));
        bytes[17] = 9;
        assert_eq!(Board::from_bytes_slice(&bytes).unwrap().get(17), 9);
    }

    #[test]
    fn is_solved_detects_duplicates() {
        let solved = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let board = Board::from_str_line(solved).unwrap();
        assert!(board.is_solved());

        let mut tampered = board;
        // duplicate within row 0
        tampered.set(1, 5);
        assert!(!tampered.is_solved());
    }
}
