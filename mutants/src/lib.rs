//! # mutants
//!
//! Mutant DNA detection library.
//!
//! A DNA sample is a square matrix of nucleotide symbols. A sample is
//! classified as *mutant* when it contains at least two runs of four
//! identical consecutive symbols, oriented horizontally, vertically or
//! diagonally (down-right).
//!
//! ## Quick Start
//!
//! ```rust
//! use mutants::identify_rows;
//!
//! let mutant = identify_rows(&[
//!     "ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG",
//! ]).unwrap();
//! assert!(mutant);
//! ```

pub mod direction;
pub mod grid;
pub mod scanner;


#[cfg(test)]
mod grid_tests;


// Re-export commonly used types
pub use direction::Direction;
pub use grid::{DnaGrid, GridError};
pub use scanner::{identify, identify_rows};
