//! # Solid Builder Errors
//!
//! Error types for solid construction.

use thiserror::Error;

/// Errors that can occur while building the relief solid.
///
/// Geometry variants abort the whole build: a partially accumulated solid
/// is never returned.
#[derive(Debug, Error)]
pub enum SolidError {
    /// Grid acquisition error from the source layer.
    #[error("grid error: {0}")]
    Grid(#[from] qrelief_grid::GridError),

    /// A build parameter violates its documented bound.
    #[error("parameter {name} = {value} {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// Placement frame axes do not span a plane.
    #[error("degenerate placement frame: {reason}")]
    DegenerateFrame { reason: &'static str },

    /// Oriented box construction failed.
    #[error("degenerate box: {reason}")]
    DegenerateBox { reason: String },

    /// A boolean union destroyed the accumulator.
    #[error("boolean union failed at cell ({row}, {col})")]
    BooleanFailed { row: usize, col: usize },
}

impl SolidError {
    /// Creates a degenerate box error.
    pub fn degenerate_box(reason: impl Into<String>) -> Self {
        Self::DegenerateBox {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolidError::InvalidParameter {
            name: "cell_size",
            value: -1.0,
            constraint: "must be positive",
        };
        assert!(err.to_string().contains("cell_size"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_boolean_failed_display() {
        let err = SolidError::BooleanFailed { row: 2, col: 5 };
        assert!(err.to_string().contains("(2, 5)"));
    }
}
