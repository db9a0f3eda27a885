//! Square DNA matrix with fail-fast construction.
//!
//! The original service never validated its input and an uneven matrix
//! produced an index fault deep inside the scan. `DnaGrid` moves that
//! check to construction time: once a grid exists, every coordinate in
//! `0..size` is valid in both axes.

use thiserror::Error;

/// Errors from DNA grid construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows.
    #[error("DNA matrix is empty")]
    Empty,

    /// A row's length does not match the row count.
    #[error("DNA matrix is not square: row #{row} has {len} symbols, expected {size}")]
    NotSquare {
        /// 0-based index of the offending row.
        row: usize,
        /// Symbol count of the offending row.
        len: usize,
        /// Expected side length (the row count).
        size: usize,
    },
}

/// A square, read-only matrix of nucleotide symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaGrid {
    cells: Vec<Vec<char>>,
    size: usize,
}

impl DnaGrid {
    /// Build a grid from string-like rows, validating squareness.
    ///
    /// Symbols are counted as `char`s, so multi-byte input is measured
    /// the way a user reads it, not in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for zero rows, or
    /// [`GridError::NotSquare`] naming the first row whose length differs
    /// from the row count.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size);
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.as_ref().chars().collect();
            if symbols.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: symbols.len(),
                    size,
                });
            }
            cells.push(symbols);
        }

        Ok(Self { cells, size })
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Symbol at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is `>= size()`; squareness guarantees
    /// any in-range pair is valid.
    #[must_use]
    pub fn symbol(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }
}
