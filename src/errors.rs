//! Errors that may be encountered when building a board from bytes or a string
use crate::board::{block, col, row};

#[cfg(doc)]
use crate::Board;

/// Error for [`Board::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Board::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell as usize) as u8
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell as usize) as u8
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell as usize) as u8
    }
}

/// Error for [`Board::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted entries are the digits 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Input ends before 81 cells are supplied. Contains the number of cells found.
    #[error("sudoku contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// An 82nd cell is supplied without a comment delimiter in between
    #[error("sudoku contains more than 81 cells or is missing comment delimiter")]
    TooManyCells,
    /// Comments must be delimited by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}
