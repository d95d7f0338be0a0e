//! The 4×Nb byte grid a block occupies while it is transformed.

use core::ops::{Index, IndexMut};

use crate::block::BlockSize;
use crate::error::{Error, Result};

/// Number of rows in every state.
pub const ROWS: usize = 4;

const MAX_COLUMNS: usize = 8;

/// Cipher state: four rows by `Nb` columns.
///
/// Input bytes fill the grid column by column, so byte `k` lands at row
/// `k % 4`, column `k / 4`. Cells past the last column are never touched and
/// stay zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    cells: [[u8; MAX_COLUMNS]; ROWS],
    size: BlockSize,
}

impl State {
    /// Returns an all-zero state with `size.words()` columns.
    pub fn new(size: BlockSize) -> Self {
        Self {
            cells: [[0u8; MAX_COLUMNS]; ROWS],
            size,
        }
    }

    /// Loads a block of exactly `size.bytes()` bytes.
    pub fn from_bytes(size: BlockSize, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != size.bytes() {
            return Err(Error::InvalidBlockSize {
                expected: size.bytes(),
                actual: bytes.len(),
            });
        }
        let mut state = Self::new(size);
        for (k, byte) in bytes.iter().enumerate() {
            state.cells[k % ROWS][k / ROWS] = *byte;
        }
        Ok(state)
    }

    /// Builds a state whose column `c` holds the big-endian bytes of `words[c]`.
    pub(crate) fn from_words(size: BlockSize, words: &[u32]) -> Self {
        assert_eq!(words.len(), size.words(), "one word per column");
        let mut state = Self::new(size);
        for (column, word) in words.iter().enumerate() {
            state.set_column(column, word.to_be_bytes());
        }
        state
    }

    /// Writes the grid back out column by column into `out`.
    pub fn write_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), self.size.bytes(), "output length");
        for (k, byte) in out.iter_mut().enumerate() {
            *byte = self.cells[k % ROWS][k / ROWS];
        }
    }

    /// Serializes the grid, inverting [`State::from_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.size.bytes()];
        self.write_bytes(&mut out);
        out
    }

    /// Block size of this state.
    pub fn block_size(&self) -> BlockSize {
        self.size
    }

    /// Number of columns (`Nb`).
    pub fn columns(&self) -> usize {
        self.size.words()
    }

    /// Rotates `row` left by `amount` positions.
    ///
    /// Same result as `amount` single-position rotations, so amounts of a full
    /// row length or more wrap around.
    pub fn rotate_row_left(&mut self, row: usize, amount: usize) {
        let columns = self.columns();
        self.cells[row][..columns].rotate_left(amount % columns);
    }

    /// Reads column `column` top to bottom.
    pub fn column(&self, column: usize) -> [u8; ROWS] {
        self.check_column(column);
        [
            self.cells[0][column],
            self.cells[1][column],
            self.cells[2][column],
            self.cells[3][column],
        ]
    }

    /// Overwrites column `column` top to bottom.
    pub fn set_column(&mut self, column: usize, values: [u8; ROWS]) {
        self.check_column(column);
        for (row, value) in values.into_iter().enumerate() {
            self.cells[row][column] = value;
        }
    }

    /// Mutable access to every live cell, row by row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        let columns = self.columns();
        self.cells
            .iter_mut()
            .flat_map(move |row| row.iter_mut().take(columns))
    }

    /// XORs `rhs` into `self` cell by cell.
    pub fn xor_in_place(&mut self, rhs: &State) {
        assert_eq!(self.size, rhs.size, "states must share a block size");
        for (dst, src) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d ^= *s;
            }
        }
    }

    #[inline]
    fn check_column(&self, column: usize) {
        assert!(
            column < self.columns(),
            "column {column} out of range for {} columns",
            self.columns()
        );
    }
}

impl Index<(usize, usize)> for State {
    type Output = u8;

    fn index(&self, (row, column): (usize, usize)) -> &u8 {
        self.check_column(column);
        &self.cells[row][column]
    }
}

impl IndexMut<(usize, usize)> for State {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut u8 {
        self.check_column(column);
        &mut self.cells[row][column]
    }
}
