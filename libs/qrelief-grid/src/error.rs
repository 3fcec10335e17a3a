//! # Grid Errors
//!
//! Error types for grid acquisition.

use thiserror::Error;

/// Errors that can occur while acquiring a binary grid.
///
/// Encoding-related variants are recoverable: `GridSource::resolve`
/// converts them into an empty grid plus a logged diagnostic so the
/// invoking layer stays interactive. File-shape variants are surfaced
/// to the caller, who corrects the input and retries explicitly.
#[derive(Debug, Error)]
pub enum GridError {
    /// Import path does not exist.
    #[error("grid file not found: {path}")]
    FileNotFound { path: String },

    /// A cell token could not be read as an integer.
    #[error("cell token {token:?} on line {line} is not an integer")]
    InvalidCell { token: String, line: usize },

    /// A row's cell count differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Explicit symbol version outside the QR Model 2 range.
    #[error("symbol version {version} is out of range 1..=40")]
    InvalidVersion { version: u8 },

    /// Message contains characters the chosen encoding mode cannot carry.
    #[error("message is not encodable in {mode} mode")]
    InvalidMessage { mode: &'static str },

    /// The encoder collaborator rejected the message/option combination.
    #[error("symbol encoding failed: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    /// Underlying read failure other than a missing file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::InvalidCell {
            token: "x".to_string(),
            line: 3,
        };
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_version_error_display() {
        let err = GridError::InvalidVersion { version: 41 };
        assert!(err.to_string().contains("41"));
    }
}
