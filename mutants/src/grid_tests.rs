#[cfg(test)]
mod tests {
    use crate::grid::{DnaGrid, GridError};

    #[test]
    fn test_parse_square_grid() {
        let grid = DnaGrid::parse(&["AT", "GC"]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.symbol(0, 0), 'A');
        assert_eq!(grid.symbol(1, 1), 'C');
    }

    #[test]
    fn test_parse_single_cell() {
        let grid = DnaGrid::parse(&["A"]).unwrap();
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.symbol(0, 0), 'A');
    }

    #[test]
    fn test_parse_empty_errors() {
        let rows: Vec<&str> = vec![];
        assert_eq!(DnaGrid::parse(&rows), Err(GridError::Empty));
    }

    #[test]
    fn test_parse_short_row_errors() {
        let err = DnaGrid::parse(&["ATG", "CA", "TTT"]).unwrap_err();
        assert_eq!(
            err,
            GridError::NotSquare {
                row: 1,
                len: 2,
                size: 3
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("row #1"), "got: {msg}");
        assert!(msg.contains("expected 3"), "got: {msg}");
    }

    #[test]
    fn test_parse_too_many_rows_errors() {
        // 2 columns, 3 rows: every row is "short" relative to the count.
        let err = DnaGrid::parse(&["AT", "GC", "AA"]).unwrap_err();
        assert_eq!(
            err,
            GridError::NotSquare {
                row: 0,
                len: 2,
                size: 3
            }
        );
    }

    #[test]
    fn test_row_length_counts_chars_not_bytes() {
        // Multi-byte symbols still form a valid 2x2 grid.
        let grid = DnaGrid::parse(&["\u{c4}b", "c\u{d6}"]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.symbol(1, 1), '\u{d6}');
    }
}
