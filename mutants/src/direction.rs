//! Scan direction strategies.
//!
//! The direction set is closed, so the strategies are a tagged enum
//! rather than a trait hierarchy: each variant supplies a feasibility
//! check and a single-cell step, and the scanner dispatches over
//! [`Direction::ALL`] in a fixed order.

/// One of the three supported run orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right within a row.
    Horizontal,
    /// Top to bottom within a column.
    Vertical,
    /// Down-right along a diagonal.
    Diagonal,
}

impl Direction {
    /// All directions, in the order the scanner tries them.
    pub const ALL: [Self; 3] = [Self::Horizontal, Self::Vertical, Self::Diagonal];

    /// Whether a full-length run starting at `(row, col)` fits on the
    /// grid in this direction. `bound` is the last index a run may start
    /// from (`size - run_length`).
    #[must_use]
    pub fn has_enough_length(self, row: usize, col: usize, bound: usize) -> bool {
        match self {
            Self::Horizontal => col <= bound,
            Self::Vertical => row <= bound,
            Self::Diagonal => row <= bound && col <= bound,
        }
    }

    /// The next cell when advancing one step from `(row, col)`.
    #[must_use]
    pub fn next_step(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Self::Horizontal => (row, col + 1),
            Self::Vertical => (row + 1, col),
            Self::Diagonal => (row + 1, col + 1),
        }
    }
}
