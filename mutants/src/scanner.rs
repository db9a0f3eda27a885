//! The mutant-sequence scanner.
//!
//! Walks every cell of a [`DnaGrid`] in row-major order and, for each
//! cell, probes the three directions of [`Direction::ALL`] for a run of
//! [`RUN_LENGTH`] identical consecutive symbols. The scan stops as soon
//! as [`REQUIRED_RUNS`] runs are confirmed.
//!
//! Interior cells of a confirmed run are recorded in a call-scoped
//! visited set so that overlapping windows of one straight line are
//! never counted twice: `AAAAA` holds two length-4 windows but yields a
//! single run. Run origins are not recorded, so one cell may still
//! originate runs in several directions.

use std::collections::HashSet;

use crate::direction::Direction;
use crate::grid::{DnaGrid, GridError};

/// Length a run must reach to count as a mutant sequence.
const RUN_LENGTH: usize = 4;

/// Number of confirmed runs required for a mutant classification.
const REQUIRED_RUNS: usize = 2;

/// Classify a DNA grid as mutant (`true`) or human (`false`).
///
/// Deterministic and free of shared state; safe to call concurrently.
#[must_use]
pub fn identify(grid: &DnaGrid) -> bool {
    // A run cannot fit at all on a grid smaller than RUN_LENGTH.
    let Some(bound) = grid.size().checked_sub(RUN_LENGTH) else {
        return false;
    };

    let mut found = 0usize;
    let mut visited: HashSet<(usize, usize)> = HashSet::new();

    'scan: for row in 0..grid.size() {
        for col in 0..grid.size() {
            let origin = grid.symbol(row, col);

            for direction in Direction::ALL {
                if found >= REQUIRED_RUNS {
                    break 'scan;
                }

                // A cell already consumed as the interior of a confirmed
                // run never seeds a new search, in any direction.
                if visited.contains(&(row, col)) {
                    continue;
                }

                if !direction.has_enough_length(row, col, bound) {
                    continue;
                }

                let mut run_length = 1;
                let (mut next_row, mut next_col) = (row, col);

                // Feasibility bounds the walk: at most RUN_LENGTH - 1
                // steps, all inside the grid.
                while run_length < RUN_LENGTH {
                    (next_row, next_col) = direction.next_step(next_row, next_col);
                    if grid.symbol(next_row, next_col) != origin {
                        break;
                    }
                    visited.insert((next_row, next_col));
                    run_length += 1;
                }

                if run_length >= RUN_LENGTH {
                    found += 1;
                }
            }
        }
    }

    found >= REQUIRED_RUNS
}

/// Parse rows into a [`DnaGrid`] and classify it in one call.
///
/// # Errors
///
/// Returns a [`GridError`] if the rows do not form a non-empty square
/// matrix; no scanning happens in that case.
pub fn identify_rows<S: AsRef<str>>(rows: &[S]) -> Result<bool, GridError> {
    let grid = DnaGrid::parse(rows)?;
    Ok(identify(&grid))
}
