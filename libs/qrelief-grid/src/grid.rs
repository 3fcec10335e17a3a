//! # Binary Grid
//!
//! Rectangular read-only matrix of boolean cells. Row 0 is the logical top
//! of the symbol and cell (0, 0) its top-left corner.

use crate::error::GridError;

/// A rectangular binary matrix.
///
/// Constructed once, then read-only; the solid builder consumes it and the
/// grid may be discarded after one build. All rows are guaranteed to have
/// equal length.
///
/// # Example
///
/// ```rust
/// use qrelief_grid::BinaryGrid;
///
/// let grid = BinaryGrid::from_rows(vec![
///     vec![true, false],
///     vec![false, true],
/// ]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 2);
/// assert!(grid.is_filled(0, 0));
/// assert!(!grid.is_filled(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    rows: Vec<Vec<bool>>,
}

impl BinaryGrid {
    /// Creates a grid with zero rows.
    #[must_use]
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Builds a grid from rows of cells.
    ///
    /// Trailing blank rows (zero cells) are stripped before the shape
    /// check, mirroring how trailing blank lines in import files are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if any remaining row's length
    /// differs from the first row's.
    pub fn from_rows(mut rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        if let Some(first) = rows.first() {
            let expected = first.len();
            for (index, row) in rows.iter().enumerate() {
                if row.len() != expected {
                    return Err(GridError::RaggedRow {
                        row: index,
                        expected,
                        found: row.len(),
                    });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (zero for an empty grid).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns true if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if the cell at (row, col) is filled.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// Number of filled cells across the whole grid.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| **cell).count())
            .sum()
    }

    /// Iterates over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = BinaryGrid::empty();
        assert!(grid.is_empty());
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_from_rows_rectangular() {
        let grid = BinaryGrid::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.filled_count(), 3);
    }

    #[test]
    fn test_from_rows_strips_trailing_blank_rows() {
        let grid = BinaryGrid::from_rows(vec![
            vec![true, true],
            vec![false, false],
            Vec::new(),
            Vec::new(),
        ])
        .unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_from_rows_all_blank_yields_empty() {
        let grid = BinaryGrid::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = BinaryGrid::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        match err {
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_interior_blank_row_is_ragged() {
        let err =
            BinaryGrid::from_rows(vec![vec![true], Vec::new(), vec![false]]).unwrap_err();
        assert!(matches!(err, GridError::RaggedRow { .. }));
    }

    #[test]
    fn test_iter_rows_order() {
        let grid = BinaryGrid::from_rows(vec![vec![true], vec![false]]).unwrap();
        let collected: Vec<&[bool]> = grid.iter_rows().collect();
        assert_eq!(collected, vec![&[true][..], &[false][..]]);
    }
}
