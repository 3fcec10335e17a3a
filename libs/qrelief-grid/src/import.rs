//! # Grid Import
//!
//! Loads a binary grid from a delimited text file: one row per line,
//! comma-separated integer tokens, non-zero meaning "filled". No header,
//! trailing blank lines ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::GridError;
use crate::grid::BinaryGrid;

/// Loads a binary grid from a delimited text file.
///
/// An existing but empty file yields an empty grid, not an error: the
/// caller treats an empty grid as "nothing to build".
///
/// # Errors
///
/// - [`GridError::FileNotFound`] if the path does not exist.
/// - [`GridError::InvalidCell`] for a token that is not an integer.
/// - [`GridError::RaggedRow`] if row lengths differ.
/// - [`GridError::Io`] for other read failures.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<BinaryGrid, GridError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GridError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path)?;
    let grid = parse_grid_text(&text)?;
    debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "imported grid file"
    );
    Ok(grid)
}

/// Parses delimited grid text into a grid.
fn parse_grid_text(text: &str) -> Result<BinaryGrid, GridError> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            // Blank line: kept as a blank row so only *trailing* blanks
            // are stripped; an interior blank still fails the shape check.
            rows.push(Vec::new());
            continue;
        }

        let mut row = Vec::with_capacity(line.len() / 2 + 1);
        for token in line.split(',') {
            let token = token.trim();
            let value: i64 = token.parse().map_err(|_| GridError::InvalidCell {
                token: token.to_string(),
                line: index + 1,
            })?;
            row.push(value != 0);
        }
        rows.push(row);
    }

    BinaryGrid::from_rows(rows)
}

// =============================================================================
// TESTS
// =============================================================================
