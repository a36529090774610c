// Grid geometry. The solver is hardwired to classic 9x9 sudoku.
pub(crate) const DIM: usize = 9;
pub(crate) const BLOCK_SIZE: usize = 3;
pub(crate) const N_CELLS: usize = DIM * DIM;
